//! Dashboard statistics
//!
//! Counters derived from the registry for the student dashboard and the
//! `status` command. Nothing here is stored; every call recomputes.

use serde::Serialize;

use crate::models::{StudentResult, StudentStatus, SubmissionStatus};
use crate::store::Store;

/// Per-student counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub submissions: usize,
    pub approved_submissions: usize,
    pub certificates: usize,
    pub achievements: usize,
    /// Addressed notifications plus broadcasts
    pub notifications: usize,
}

/// Registry-wide counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySummary {
    pub students: usize,
    pub competitions: usize,
    pub submissions: usize,
    pub certificates: usize,
    pub achievements: usize,
    pub notifications: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Store {
    /// Counters for one student, or `None` if the student does not exist
    pub fn student_stats(&self, student_id: &str) -> Option<StudentStats> {
        self.student(student_id)?;

        let submissions = self.student_submissions(student_id);
        Some(StudentStats {
            approved_submissions: submissions
                .iter()
                .filter(|s| s.status == SubmissionStatus::Approved)
                .count(),
            submissions: submissions.len(),
            certificates: self.student_certificates(student_id).len(),
            achievements: self.student_achievements(student_id).len(),
            notifications: self.student_notifications(student_id).len(),
        })
    }

    /// Counts across the whole registry
    pub fn summary(&self) -> RegistrySummary {
        let students = self.students();
        let by_status = |status: StudentStatus| students.iter().filter(|s| s.status == status).count();
        let by_result = |result: StudentResult| students.iter().filter(|s| s.result == result).count();

        RegistrySummary {
            students: students.len(),
            competitions: self.competitions().len(),
            submissions: self.submissions().len(),
            certificates: self.certificates().len(),
            achievements: self.achievements().len(),
            notifications: self.notifications().len(),
            pending: by_status(StudentStatus::Pending),
            approved: by_status(StudentStatus::Approved),
            rejected: by_status(StudentStatus::Rejected),
            passed: by_result(StudentResult::Passed),
            failed: by_result(StudentResult::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::drafts::SubmissionDraft;
    use crate::models::SubmissionStatus;
    use crate::seed::DEFAULT_SEED;
    use crate::store::Store;

    #[test]
    fn test_student_stats_for_seeded_student() {
        let store = Store::seeded(DEFAULT_SEED);
        let stats = store.student_stats("ST-001").unwrap();

        assert_eq!(stats.submissions, 1);
        assert_eq!(stats.approved_submissions, 1);
        assert_eq!(stats.certificates, 1);
        assert_eq!(stats.achievements, 2);
        assert_eq!(stats.notifications, 4);
    }

    #[test]
    fn test_student_stats_unknown_student() {
        let store = Store::seeded(DEFAULT_SEED);
        assert!(store.student_stats("ST-999").is_none());
    }

    #[test]
    fn test_stats_follow_mutations() {
        let mut store = Store::seeded(DEFAULT_SEED);
        store.add_submission(SubmissionDraft {
            student_id: Some("ST-002".to_string()),
            status: Some(SubmissionStatus::Approved),
            ..SubmissionDraft::default()
        });

        let stats = store.student_stats("ST-002").unwrap();
        assert_eq!(stats.submissions, 2);
        assert_eq!(stats.approved_submissions, 1);
    }

    #[test]
    fn test_summary_counts_add_up() {
        let store = Store::seeded(DEFAULT_SEED);
        let summary = store.summary();

        assert_eq!(summary.students, 20);
        assert_eq!(summary.competitions, 5);
        assert_eq!(summary.pending + summary.approved + summary.rejected, 20);
        assert!(summary.passed + summary.failed <= summary.approved);
    }
}
