//! Student command handlers

use anyhow::Result;

use compete_core::{Store, StoreError, StudentDraft, StudentResult, StudentStatus};

use super::print_change;
use crate::output::{Output, OutputFormat};

/// List students, optionally filtered by competition name and status
pub fn list(
    store: &Store,
    competition: Option<String>,
    status: Option<String>,
    output: &Output,
) -> Result<()> {
    let status = status
        .map(|s| s.parse::<StudentStatus>())
        .transpose()?;

    let students: Vec<_> = match competition {
        Some(competition) => store.competition_students(&competition),
        None => store.students().iter().collect(),
    }
    .into_iter()
    .filter(|s| status.map_or(true, |st| s.status == st))
    .collect();

    output.print_students(&students);
    Ok(())
}

/// Show one student with dashboard counters and their feed
pub fn show(store: &Store, id: String, output: &Output) -> Result<()> {
    let student = store
        .student(&id)
        .ok_or_else(|| StoreError::StudentNotFound(id.clone()))?;
    let stats = store.student_stats(&id).unwrap_or_default();

    match output.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "student": student,
            "stats": stats,
            "notifications": store.student_notifications(&id),
        })),
        OutputFormat::Quiet => println!("{}", student.id),
        OutputFormat::Human => {
            output.print_student(student);
            println!();
            println!(
                "Submissions: {} ({} approved)  Certificates: {}  Achievements: {}",
                stats.submissions,
                stats.approved_submissions,
                stats.certificates,
                stats.achievements
            );
            println!();
            println!("── Notifications ({}) ──", stats.notifications);
            output.print_notifications(&store.student_notifications(&id));
        }
    }

    Ok(())
}

/// Register a new student
pub fn register(store: &mut Store, draft: StudentDraft, output: &Output) -> Result<()> {
    let student = store.register_student(draft);
    print_change(
        output,
        &format!("Registered {} as {}", student.name, student.id),
        &student.id,
        &student,
        store.notifications().first(),
    );
    Ok(())
}

/// Change a student's registration status
pub fn set_status(
    store: &mut Store,
    id: String,
    status: StudentStatus,
    output: &Output,
) -> Result<()> {
    let student = store.update_student_status(&id, status)?;
    print_change(
        output,
        &format!("{} is now {}", student.id, student.status),
        &student.id,
        &student,
        store.notifications().first(),
    );
    Ok(())
}

/// Move a student to another stage
pub fn set_stage(store: &mut Store, id: String, stage: String, output: &Output) -> Result<()> {
    let student = store.update_student_stage(&id, stage)?;
    print_change(
        output,
        &format!("{} moved to {}", student.id, student.stage),
        &student.id,
        &student,
        store.notifications().first(),
    );
    Ok(())
}

/// Record a student's result
///
/// Warns when the registration is not approved, since a result only means
/// something for approved students.
pub fn set_result(store: &mut Store, id: String, result: String, output: &Output) -> Result<()> {
    let result = result.parse::<StudentResult>()?;
    let student = store.set_student_result(&id, result)?;

    if student.status != StudentStatus::Approved && output.format == OutputFormat::Human {
        eprintln!(
            "⚠ {} is {}; results are normally only set for approved students",
            student.id, student.status
        );
    }

    print_change(
        output,
        &format!("{} result: {}", student.id, student.result),
        &student.id,
        &student,
        store.notifications().first(),
    );
    Ok(())
}

/// Replace a student's feedback
pub fn set_feedback(
    store: &mut Store,
    id: String,
    feedback: String,
    output: &Output,
) -> Result<()> {
    let student = store.set_student_feedback(&id, feedback)?;
    print_change(
        output,
        &format!("Feedback saved for {}", student.id),
        &student.id,
        &student,
        store.notifications().first(),
    );
    Ok(())
}
