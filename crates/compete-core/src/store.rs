//! In-memory domain store
//!
//! The `Store` owns the registry of students, competitions, submissions,
//! certificates, achievements, and notifications. Every mutation:
//! - fills defaults from a draft,
//! - appends to or patches one collection,
//! - pushes at most one notification to the front of the feed,
//! - bumps the store revision.
//!
//! Patches look the target up before touching anything. An unknown id
//! returns a not-found error and leaves the registry, the feed, and the
//! revision exactly as they were.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::seeded(DEFAULT_SEED);
//!
//! let student = store.register_student(StudentDraft::named("Grace Hopper"));
//! store.update_student_status(&student.id, StudentStatus::Approved)?;
//!
//! let feed = store.student_notifications(&student.id);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::drafts::{
    AchievementDraft, CertificateDraft, CompetitionDraft, StudentDraft, SubmissionDraft,
};
use crate::error::{StoreError, StoreResult};
use crate::ids::{random_token, student_id, IdGenerator};
use crate::models::{
    today, Achievement, Certificate, Competition, Notification, NotificationKind, Student,
    StudentResult, StudentStatus, Submission, SubmissionStatus,
};
use crate::seed::seed_registry;

/// The six entity collections
///
/// Cloning a registry is how callers take a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub students: Vec<Student>,
    pub competitions: Vec<Competition>,
    pub submissions: Vec<Submission>,
    pub certificates: Vec<Certificate>,
    pub achievements: Vec<Achievement>,
    /// Most recent first
    pub notifications: Vec<Notification>,
}

/// A reference from one entity to a student or competition that does not exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Id of the entity holding the reference
    pub source_id: String,
    /// Which field holds it (`studentId` / `competitionId`)
    pub field: &'static str,
    /// The id that could not be resolved
    pub target_id: String,
}

/// In-memory store for the competition domain
#[derive(Debug, Clone, Default)]
pub struct Store {
    registry: Registry,
    ids: IdGenerator,
    revision: u64,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with seed data
    pub fn seeded(seed: u64) -> Self {
        Self::with_registry(seed_registry(seed))
    }

    /// Create a store over an existing registry
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            ids: IdGenerator::new(),
            revision: 0,
        }
    }

    /// Change counter, bumped on every write to the registry
    ///
    /// Consumers compare revisions to decide whether to re-render.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Copy of the current registry
    pub fn snapshot(&self) -> Registry {
        self.registry.clone()
    }

    // ==================== Collections ====================

    pub fn students(&self) -> &[Student] {
        &self.registry.students
    }

    pub fn competitions(&self) -> &[Competition] {
        &self.registry.competitions
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.registry.submissions
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.registry.certificates
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.registry.achievements
    }

    /// Notification feed, most recent first
    pub fn notifications(&self) -> &[Notification] {
        &self.registry.notifications
    }

    /// Get a student by id
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.registry.students.iter().find(|s| s.id == id)
    }

    /// Get a competition by id
    pub fn competition(&self, id: &str) -> Option<&Competition> {
        self.registry.competitions.iter().find(|c| c.id == id)
    }

    /// Get a competition by its display name
    pub fn competition_by_name(&self, name: &str) -> Option<&Competition> {
        self.registry.competitions.iter().find(|c| c.name == name)
    }

    /// Get a submission by id
    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.registry.submissions.iter().find(|s| s.id == id)
    }

    // ==================== Notifications ====================

    /// Push a notification to the front of the feed
    ///
    /// `student_id` of `None` broadcasts to everyone.
    pub fn add_notification(
        &mut self,
        text: impl Into<String>,
        kind: NotificationKind,
        student_id: Option<&str>,
    ) -> &Notification {
        let notification = Notification {
            id: self.ids.next_id(),
            text: text.into(),
            kind,
            date: Some(today()),
            student_id: student_id.map(str::to_string),
        };
        debug!(
            "notification {} ({}) to {}",
            notification.id,
            notification.kind,
            notification.student_id.as_deref().unwrap_or("everyone")
        );
        self.registry.notifications.insert(0, notification);
        self.revision += 1;
        &self.registry.notifications[0]
    }

    // ==================== Competitions ====================

    /// Add a competition, filling defaults for missing fields
    pub fn add_competition(&mut self, draft: CompetitionDraft) -> Competition {
        let mut id = random_token();
        while self.competition(&id).is_some() {
            id = random_token();
        }

        let competition = draft.build(id);
        debug!("added competition {} ({})", competition.id, competition.name);
        self.registry.competitions.push(competition.clone());
        self.revision += 1;

        self.add_notification(
            format!("New competition added: {}", competition.name),
            NotificationKind::Success,
            None,
        );
        competition
    }

    // ==================== Students ====================

    /// Register a student, filling defaults for missing fields
    ///
    /// The id is `ST-{n}` where `n` is one past the current number of
    /// students, advanced further if that id is already taken.
    pub fn register_student(&mut self, draft: StudentDraft) -> Student {
        let mut sequence = self.registry.students.len() + 1;
        while self.student(&student_id(sequence)).is_some() {
            sequence += 1;
        }

        let student = draft.build(student_id(sequence));
        debug!("registered student {} ({})", student.id, student.name);
        self.registry.students.push(student.clone());
        self.revision += 1;

        self.add_notification(
            format!("New student registration: {}", student.name),
            NotificationKind::Info,
            None,
        );
        student
    }

    /// Index of a student, logging when it is missing
    fn student_index(&self, id: &str) -> StoreResult<usize> {
        self.registry
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| {
                warn!("student {} not found", id);
                StoreError::StudentNotFound(id.to_string())
            })
    }

    /// Apply a patch to one student and bump the revision
    fn patch_student(
        &mut self,
        id: &str,
        patch: impl FnOnce(&mut Student),
    ) -> StoreResult<&Student> {
        let index = self.student_index(id)?;
        let student = &mut self.registry.students[index];
        patch(student);
        self.revision += 1;
        Ok(&self.registry.students[index])
    }

    /// Set a student's registration status and notify the student
    pub fn update_student_status(&mut self, id: &str, status: StudentStatus) -> StoreResult<Student> {
        let student = self.patch_student(id, |s| s.status = status)?.clone();
        debug!("student {} status -> {}", id, status);

        let (text, kind) = match status {
            StudentStatus::Approved => (
                format!(
                    "Your registration for {} has been approved! 🎉",
                    student.competition
                ),
                NotificationKind::Success,
            ),
            StudentStatus::Rejected => (
                format!(
                    "Your registration for {} has been rejected. Please contact admin for details.",
                    student.competition
                ),
                NotificationKind::Error,
            ),
            StudentStatus::Pending => (
                format!(
                    "Your registration for {} is pending review.",
                    student.competition
                ),
                NotificationKind::Info,
            ),
        };
        self.add_notification(text, kind, Some(id));
        Ok(student)
    }

    /// Move a student to another stage and notify the student
    pub fn update_student_stage(&mut self, id: &str, stage: impl Into<String>) -> StoreResult<Student> {
        let stage = stage.into();
        let student = self
            .patch_student(id, |s| s.stage = stage.clone())?
            .clone();
        debug!("student {} stage -> {}", id, stage);

        self.add_notification(
            format!(
                "You have progressed to {} stage in {}! 🚀",
                stage, student.competition
            ),
            NotificationKind::Info,
            Some(id),
        );
        Ok(student)
    }

    /// Record a student's result and notify the student
    ///
    /// Does not check that the registration is approved; callers own that rule.
    pub fn set_student_result(&mut self, id: &str, result: StudentResult) -> StoreResult<Student> {
        let student = self.patch_student(id, |s| s.result = result)?.clone();
        debug!("student {} result -> {}", id, result);

        let (text, kind) = if result == StudentResult::Passed {
            (
                format!(
                    "Congratulations! You have passed {}! 🎉🏆",
                    student.competition
                ),
                NotificationKind::Success,
            )
        } else {
            (
                format!(
                    "Unfortunately, you did not pass {}. Keep trying! 💪",
                    student.competition
                ),
                NotificationKind::Error,
            )
        };
        self.add_notification(text, kind, Some(id));
        Ok(student)
    }

    /// Replace a student's feedback and notify the student
    pub fn set_student_feedback(
        &mut self,
        id: &str,
        feedback: impl Into<String>,
    ) -> StoreResult<Student> {
        let feedback = feedback.into();
        let student = self
            .patch_student(id, |s| s.feedback = Some(feedback))?
            .clone();

        self.add_notification(
            format!(
                "You have received new feedback for {} 💬",
                student.competition
            ),
            NotificationKind::Info,
            Some(id),
        );
        Ok(student)
    }

    // ==================== Submissions ====================

    /// Add a submission, filling defaults for missing fields
    pub fn add_submission(&mut self, draft: SubmissionDraft) -> Submission {
        let mut id = self.ids.next_prefixed("sub");
        while self.submission(&id).is_some() {
            id = self.ids.next_prefixed("sub");
        }

        let submission = draft.build(id, today());
        debug!("added submission {} ({})", submission.id, submission.title);
        self.registry.submissions.push(submission.clone());
        self.revision += 1;

        self.add_notification(
            format!("New submission: {}", submission.title),
            NotificationKind::Info,
            None,
        );
        submission
    }

    /// Set a submission's review status and feedback
    ///
    /// `feedback` replaces the previous value; `None` clears it.
    pub fn update_submission_status(
        &mut self,
        id: &str,
        status: SubmissionStatus,
        feedback: Option<String>,
    ) -> StoreResult<Submission> {
        let Some(index) = self.registry.submissions.iter().position(|s| s.id == id) else {
            warn!("submission {} not found", id);
            return Err(StoreError::SubmissionNotFound(id.to_string()));
        };

        let submission = &mut self.registry.submissions[index];
        submission.status = status;
        submission.feedback = feedback;
        let submission = submission.clone();
        self.revision += 1;
        debug!("submission {} status -> {}", id, status);

        self.add_notification(
            format!("Submission {} {}", id, status),
            NotificationKind::Success,
            None,
        );
        Ok(submission)
    }

    // ==================== Certificates ====================

    /// Issue a certificate, filling defaults for missing fields
    pub fn issue_certificate(&mut self, draft: CertificateDraft) -> Certificate {
        let mut id = self.ids.next_prefixed("cert");
        while self.registry.certificates.iter().any(|c| c.id == id) {
            id = self.ids.next_prefixed("cert");
        }

        let certificate = draft.build(id, today());
        debug!("issued certificate {}", certificate.id);
        self.registry.certificates.push(certificate.clone());
        self.revision += 1;

        self.add_notification(
            format!(
                "Certificate issued to {}",
                certificate.student_name.as_deref().unwrap_or("student")
            ),
            NotificationKind::Success,
            None,
        );
        certificate
    }

    // ==================== Achievements ====================

    /// Award an achievement, filling defaults for missing fields
    pub fn add_achievement(&mut self, draft: AchievementDraft) -> Achievement {
        let mut id = self.ids.next_prefixed("ach");
        while self.registry.achievements.iter().any(|a| a.id == id) {
            id = self.ids.next_prefixed("ach");
        }

        let achievement = draft.build(id, today());
        debug!("awarded achievement {} ({})", achievement.id, achievement.badge);
        self.registry.achievements.push(achievement.clone());
        self.revision += 1;

        self.add_notification(
            "Achievement awarded to student",
            NotificationKind::Success,
            None,
        );
        achievement
    }

    /// Remove an achievement by id
    ///
    /// Returns the removed achievement, or `None` if no achievement matched.
    /// No notification is sent either way.
    pub fn remove_achievement(&mut self, id: &str) -> Option<Achievement> {
        let index = self.registry.achievements.iter().position(|a| a.id == id)?;
        let removed = self.registry.achievements.remove(index);
        self.revision += 1;
        debug!("removed achievement {}", id);
        Some(removed)
    }

    // ==================== Queries ====================

    /// Submissions by a student, in insertion order
    pub fn student_submissions(&self, student_id: &str) -> Vec<&Submission> {
        self.registry
            .submissions
            .iter()
            .filter(|s| s.student_id.as_deref() == Some(student_id))
            .collect()
    }

    /// Submissions for a competition, in insertion order
    pub fn competition_submissions(&self, competition_id: &str) -> Vec<&Submission> {
        self.registry
            .submissions
            .iter()
            .filter(|s| s.competition_id.as_deref() == Some(competition_id))
            .collect()
    }

    /// Certificates held by a student, in insertion order
    pub fn student_certificates(&self, student_id: &str) -> Vec<&Certificate> {
        self.registry
            .certificates
            .iter()
            .filter(|c| c.student_id.as_deref() == Some(student_id))
            .collect()
    }

    /// Certificates issued for a competition, in insertion order
    pub fn competition_certificates(&self, competition_id: &str) -> Vec<&Certificate> {
        self.registry
            .certificates
            .iter()
            .filter(|c| c.competition_id.as_deref() == Some(competition_id))
            .collect()
    }

    /// Achievements awarded to a student, in insertion order
    pub fn student_achievements(&self, student_id: &str) -> Vec<&Achievement> {
        self.registry
            .achievements
            .iter()
            .filter(|a| a.student_id.as_deref() == Some(student_id))
            .collect()
    }

    /// Notifications a student sees: addressed to them plus broadcasts,
    /// most recent first
    pub fn student_notifications(&self, student_id: &str) -> Vec<&Notification> {
        self.registry
            .notifications
            .iter()
            .filter(|n| n.is_visible_to(student_id))
            .collect()
    }

    /// Students registered for the named competition
    pub fn competition_students(&self, competition_name: &str) -> Vec<&Student> {
        self.registry
            .students
            .iter()
            .filter(|s| s.competition == competition_name)
            .collect()
    }

    /// References to students or competitions that are not in the registry
    ///
    /// The store accepts these; this is a diagnostic for callers that care.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut check = |source: &str, field: &'static str, target: Option<&String>, exists: bool| {
            if let Some(target) = target {
                if !exists {
                    dangling.push(DanglingReference {
                        source_id: source.to_string(),
                        field,
                        target_id: target.clone(),
                    });
                }
            }
        };

        let student_exists = |id: Option<&String>| id.is_some_and(|id| self.student(id).is_some());
        let competition_exists =
            |id: Option<&String>| id.is_some_and(|id| self.competition(id).is_some());

        for s in &self.registry.submissions {
            let student = s.student_id.as_ref();
            let competition = s.competition_id.as_ref();
            check(&s.id, "studentId", student, student_exists(student));
            check(&s.id, "competitionId", competition, competition_exists(competition));
        }
        for c in &self.registry.certificates {
            let student = c.student_id.as_ref();
            let competition = c.competition_id.as_ref();
            check(&c.id, "studentId", student, student_exists(student));
            check(&c.id, "competitionId", competition, competition_exists(competition));
        }
        for a in &self.registry.achievements {
            let student = a.student_id.as_ref();
            check(&a.id, "studentId", student, student_exists(student));
        }

        dangling
    }
}
