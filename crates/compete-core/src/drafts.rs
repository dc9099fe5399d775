//! Partial input for creating entities
//!
//! Each draft carries optional fields; `build` fills whatever the caller
//! left out with the documented default. Ids and dates are supplied by the
//! store so drafts stay free of clocks and counters.

use crate::models::{
    Achievement, Certificate, Competition, CompetitionKind, RegistrationType, Student,
    StudentResult, StudentStatus, Submission, SubmissionStatus,
};

/// Default school for registrations that do not name one
pub const DEFAULT_SCHOOL: &str = "Lincoln High";

/// Partial competition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompetitionDraft {
    pub name: Option<String>,
    pub stages: Option<Vec<String>>,
    pub description: Option<String>,
    pub kind: Option<CompetitionKind>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_participants: Option<u32>,
}

impl CompetitionDraft {
    /// Draft with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub(crate) fn build(self, id: String) -> Competition {
        Competition {
            id,
            name: self.name.unwrap_or_else(|| "Untitled".to_string()),
            stages: self.stages.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            max_participants: self.max_participants.unwrap_or(0),
        }
    }
}

/// Partial student registration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
    pub class: Option<String>,
    pub school: Option<String>,
    pub competition: Option<String>,
    pub registration: Option<RegistrationType>,
    pub members: Option<String>,
    pub stage: Option<String>,
    pub status: Option<StudentStatus>,
    pub result: Option<StudentResult>,
    pub project_title: Option<String>,
    pub mentor: Option<String>,
    pub abstract_text: Option<String>,
    pub feedback: Option<String>,
}

impl StudentDraft {
    /// Draft with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Email derived from the first word of the name, `alice@school.edu`
    fn default_email(name: Option<&str>) -> String {
        let first = name
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or("")
            .to_lowercase();
        format!("{}@school.edu", first)
    }

    pub(crate) fn build(self, id: String) -> Student {
        let email = self
            .email
            .unwrap_or_else(|| Self::default_email(self.name.as_deref()));
        Student {
            id,
            email,
            name: non_empty(self.name).unwrap_or_else(|| "Unknown".to_string()),
            grade: non_empty(self.grade).unwrap_or_else(|| "9".to_string()),
            class: non_empty(self.class).unwrap_or_else(|| "A".to_string()),
            school: self.school.unwrap_or_else(|| DEFAULT_SCHOOL.to_string()),
            competition: non_empty(self.competition).unwrap_or_else(|| "Unknown".to_string()),
            registration: self.registration.unwrap_or_default(),
            members: non_empty(self.members),
            stage: self.stage.unwrap_or_else(|| "Registration".to_string()),
            status: self.status.unwrap_or_default(),
            result: self.result.unwrap_or_default(),
            project_title: self.project_title,
            mentor: non_empty(self.mentor),
            abstract_text: self.abstract_text.unwrap_or_default(),
            feedback: non_empty(self.feedback),
        }
    }
}

/// Partial submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub student_id: Option<String>,
    pub competition_id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub kind: Option<String>,
    pub status: Option<SubmissionStatus>,
    pub date: Option<String>,
    pub feedback: Option<String>,
}

impl SubmissionDraft {
    pub(crate) fn build(self, id: String, today: String) -> Submission {
        Submission {
            id,
            student_id: self.student_id,
            competition_id: self.competition_id,
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
            url: self.url.unwrap_or_else(|| "#".to_string()),
            kind: self.kind.unwrap_or_else(|| "unknown".to_string()),
            status: self.status.unwrap_or_default(),
            date: self.date.unwrap_or(today),
            feedback: self.feedback,
        }
    }
}

/// Partial certificate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateDraft {
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub competition_id: Option<String>,
    pub competition_name: Option<String>,
    pub achievement: Option<String>,
    pub date: Option<String>,
    pub issued_by: Option<String>,
}

impl CertificateDraft {
    pub(crate) fn build(self, id: String, today: String) -> Certificate {
        Certificate {
            id,
            student_id: self.student_id,
            student_name: self.student_name,
            competition_id: self.competition_id,
            competition_name: self.competition_name,
            achievement: self.achievement,
            date: self.date.unwrap_or(today),
            issued_by: self.issued_by.unwrap_or_else(|| "Admin".to_string()),
        }
    }
}

/// Partial achievement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementDraft {
    pub student_id: Option<String>,
    pub badge: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub date: Option<String>,
    pub color: Option<String>,
}

impl AchievementDraft {
    pub(crate) fn build(self, id: String, today: String) -> Achievement {
        Achievement {
            id,
            student_id: self.student_id,
            badge: self.badge.unwrap_or_else(|| "Badge".to_string()),
            description: self
                .description
                .unwrap_or_else(|| "Achievement".to_string()),
            icon: self.icon.unwrap_or_else(|| "🏆".to_string()),
            date: self.date.unwrap_or(today),
            color: self.color.unwrap_or_else(|| "blue".to_string()),
        }
    }
}

/// Treat an empty string the same as an absent field
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_defaults() {
        let competition = CompetitionDraft::default().build("abc".to_string());
        assert_eq!(competition.name, "Untitled");
        assert!(competition.stages.is_empty());
        assert_eq!(competition.kind, CompetitionKind::Internal);
        assert_eq!(competition.max_participants, 0);
        assert_eq!(competition.start_date, "");
    }

    #[test]
    fn test_student_defaults() {
        let student = StudentDraft::named("Grace Hopper").build("ST-001".to_string());
        assert_eq!(student.email, "grace@school.edu");
        assert_eq!(student.school, DEFAULT_SCHOOL);
        assert_eq!(student.stage, "Registration");
        assert_eq!(student.status, StudentStatus::Pending);
        assert_eq!(student.result, StudentResult::Undecided);
        assert_eq!(student.grade, "9");
        assert_eq!(student.class, "A");
        assert_eq!(student.competition, "Unknown");
        assert_eq!(student.registration, RegistrationType::Individual);
        assert!(student.members.is_none());
        assert!(student.feedback.is_none());
    }

    #[test]
    fn test_student_without_name() {
        let student = StudentDraft::default().build("ST-002".to_string());
        assert_eq!(student.name, "Unknown");
        assert_eq!(student.email, "@school.edu");
    }

    #[test]
    fn test_student_empty_strings_fall_back() {
        let draft = StudentDraft {
            name: Some(String::new()),
            members: Some(String::new()),
            ..StudentDraft::default()
        };
        let student = draft.build("ST-003".to_string());
        assert_eq!(student.name, "Unknown");
        assert!(student.members.is_none());
    }

    #[test]
    fn test_student_keeps_supplied_fields() {
        let draft = StudentDraft {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@engine.org".to_string()),
            competition: Some("Coding Cup".to_string()),
            registration: Some(RegistrationType::Team),
            members: Some("Charles, Mary".to_string()),
            ..StudentDraft::default()
        };
        let student = draft.build("ST-004".to_string());
        assert_eq!(student.email, "ada@engine.org");
        assert_eq!(student.competition, "Coding Cup");
        assert_eq!(student.registration, RegistrationType::Team);
        assert_eq!(student.members.as_deref(), Some("Charles, Mary"));
    }

    #[test]
    fn test_submission_defaults() {
        let submission =
            SubmissionDraft::default().build("sub-1".to_string(), "2024-03-01".to_string());
        assert_eq!(submission.title, "Untitled");
        assert_eq!(submission.url, "#");
        assert_eq!(submission.kind, "unknown");
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert_eq!(submission.date, "2024-03-01");
        assert!(submission.feedback.is_none());
    }

    #[test]
    fn test_certificate_and_achievement_defaults() {
        let certificate =
            CertificateDraft::default().build("cert-1".to_string(), "2024-03-01".to_string());
        assert_eq!(certificate.issued_by, "Admin");
        assert!(certificate.student_name.is_none());

        let achievement =
            AchievementDraft::default().build("ach-1".to_string(), "2024-03-01".to_string());
        assert_eq!(achievement.badge, "Badge");
        assert_eq!(achievement.description, "Achievement");
        assert_eq!(achievement.icon, "🏆");
        assert_eq!(achievement.color, "blue");
    }
}
