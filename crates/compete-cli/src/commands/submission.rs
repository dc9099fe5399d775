//! Submission command handlers

use anyhow::Result;

use compete_core::{Store, SubmissionDraft, SubmissionStatus};

use super::print_change;
use crate::output::Output;

/// List submissions for a student, a competition, or everything
pub fn list(
    store: &Store,
    student: Option<String>,
    competition: Option<String>,
    output: &Output,
) -> Result<()> {
    let submissions = match (student, competition) {
        (Some(student), Some(competition)) => store
            .student_submissions(&student)
            .into_iter()
            .filter(|s| s.competition_id.as_deref() == Some(competition.as_str()))
            .collect(),
        (Some(student), None) => store.student_submissions(&student),
        (None, Some(competition)) => store.competition_submissions(&competition),
        (None, None) => store.submissions().iter().collect(),
    };

    output.print_submissions(&submissions);
    Ok(())
}

/// Record a new submission
pub fn add(store: &mut Store, draft: SubmissionDraft, output: &Output) -> Result<()> {
    let submission = store.add_submission(draft);
    print_change(
        output,
        &format!("Submitted {} ({})", submission.title, submission.id),
        &submission.id,
        &submission,
        store.notifications().first(),
    );
    Ok(())
}

/// Review a submission
pub fn review(
    store: &mut Store,
    id: String,
    status: String,
    feedback: Option<String>,
    output: &Output,
) -> Result<()> {
    let status = status.parse::<SubmissionStatus>()?;
    let submission = store.update_submission_status(&id, status, feedback)?;
    print_change(
        output,
        &format!("{} marked {}", submission.id, submission.status),
        &submission.id,
        &submission,
        store.notifications().first(),
    );
    Ok(())
}
