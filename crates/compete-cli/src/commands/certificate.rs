//! Certificate command handlers

use anyhow::Result;

use compete_core::{CertificateDraft, Store};

use super::print_change;
use crate::output::Output;

/// List certificates for a student, a competition, or everything
pub fn list(
    store: &Store,
    student: Option<String>,
    competition: Option<String>,
    output: &Output,
) -> Result<()> {
    let certificates = match (student, competition) {
        (Some(student), _) => store.student_certificates(&student),
        (None, Some(competition)) => store.competition_certificates(&competition),
        (None, None) => store.certificates().iter().collect(),
    };

    output.print_certificates(&certificates);
    Ok(())
}

/// Issue a certificate
///
/// Names left out of the draft are filled from the referenced student and
/// competition when those exist.
pub fn issue(store: &mut Store, mut draft: CertificateDraft, output: &Output) -> Result<()> {
    if draft.student_name.is_none() {
        draft.student_name = draft
            .student_id
            .as_deref()
            .and_then(|id| store.student(id))
            .map(|s| s.name.clone());
    }
    if draft.competition_name.is_none() {
        draft.competition_name = draft
            .competition_id
            .as_deref()
            .and_then(|id| store.competition(id))
            .map(|c| c.name.clone());
    }

    let certificate = store.issue_certificate(draft);
    print_change(
        output,
        &format!("Issued certificate {}", certificate.id),
        &certificate.id,
        &certificate,
        store.notifications().first(),
    );
    Ok(())
}
