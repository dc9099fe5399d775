//! Data models for Compete
//!
//! Defines the domain entities: Student, Competition, Submission,
//! Certificate, Achievement, and Notification, plus the small enums that
//! tag them. Field names serialize in camelCase to match the client shape.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Implements `as_str`, `Display`, and case-insensitive `FromStr` for a
/// fieldless enum with a fixed text form per variant.
macro_rules! text_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Text form of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($text) {
                        return Ok($name::$variant);
                    }
                )+
                Err(StoreError::InvalidValue {
                    field: $field,
                    value: s.to_string(),
                })
            }
        }
    };
}

/// Today's date as an ISO `YYYY-MM-DD` string
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// How a student entered a competition
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RegistrationType {
    #[default]
    Individual,
    Team,
}

text_enum!(RegistrationType, "registration type", {
    Individual => "Individual",
    Team => "Team",
});

/// Review state of a student registration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StudentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

text_enum!(StudentStatus, "status", {
    Pending => "Pending",
    Approved => "Approved",
    Rejected => "Rejected",
});

/// Final outcome of a student in a competition
///
/// Only meaningful when the registration is approved; `Undecided` is shown
/// as "-".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StudentResult {
    Passed,
    Failed,
    #[default]
    #[serde(rename = "-")]
    Undecided,
}

text_enum!(StudentResult, "result", {
    Passed => "Passed",
    Failed => "Failed",
    Undecided => "-",
});

/// Whether a competition is run by the school or by an outside body
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompetitionKind {
    #[default]
    Internal,
    Outer,
}

text_enum!(CompetitionKind, "competition type", {
    Internal => "Internal",
    Outer => "Outer",
});

/// Review state of a submission
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

text_enum!(SubmissionStatus, "submission status", {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

/// Severity tag of a notification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

text_enum!(NotificationKind, "notification type", {
    Info => "info",
    Success => "success",
    Warning => "warning",
    Error => "error",
});

/// A registered student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique identifier (`ST-NNN`)
    pub id: String,
    pub name: String,
    pub email: String,
    pub grade: String,
    pub class: String,
    pub school: String,
    /// Name of the competition the student registered for
    pub competition: String,
    #[serde(rename = "type")]
    pub registration: RegistrationType,
    /// Comma-joined team member names, for team registrations
    pub members: Option<String>,
    /// Current stage, free text
    pub stage: String,
    pub status: StudentStatus,
    pub result: StudentResult,
    pub project_title: Option<String>,
    pub mentor: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub feedback: Option<String>,
}

/// A competition and its ordered stages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub stages: Vec<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CompetitionKind,
    /// ISO date, may be empty
    pub start_date: String,
    /// ISO date, may be empty
    pub end_date: String,
    pub max_participants: u32,
}

impl Competition {
    /// Final stage of the pipeline, if any stages are defined
    pub fn final_stage(&self) -> Option<&str> {
        self.stages.last().map(String::as_str)
    }
}

/// Work submitted by a student for a competition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_id: Option<String>,
    pub competition_id: Option<String>,
    pub title: String,
    pub url: String,
    /// Free-form kind tag (github, link, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub status: SubmissionStatus,
    pub date: String,
    pub feedback: Option<String>,
}

/// A certificate issued to a student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub competition_id: Option<String>,
    pub competition_name: Option<String>,
    pub achievement: Option<String>,
    pub date: String,
    pub issued_by: String,
}

/// A badge awarded to a student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub student_id: Option<String>,
    pub badge: String,
    pub description: String,
    pub icon: String,
    pub date: String,
    pub color: String,
}

/// An entry in the notification feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub date: Option<String>,
    /// Recipient; `None` broadcasts to everyone
    pub student_id: Option<String>,
}

impl Notification {
    /// Whether this notification has no specific recipient
    pub fn is_broadcast(&self) -> bool {
        self.student_id.is_none()
    }

    /// Whether the given student should see this notification
    pub fn is_visible_to(&self, student_id: &str) -> bool {
        match self.student_id {
            Some(ref id) => id == student_id,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parse_case_insensitive() {
        assert_eq!(
            "approved".parse::<StudentStatus>().unwrap(),
            StudentStatus::Approved
        );
        assert_eq!(
            " REJECTED ".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Rejected
        );
        assert_eq!("-".parse::<StudentResult>().unwrap(), StudentResult::Undecided);
        assert_eq!("outer".parse::<CompetitionKind>().unwrap(), CompetitionKind::Outer);
    }

    #[test]
    fn test_enum_parse_rejects_unknown() {
        let err = "maybe".parse::<StudentStatus>().unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidValue {
                field: "status",
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn test_enum_display() {
        assert_eq!(StudentResult::Undecided.to_string(), "-");
        assert_eq!(SubmissionStatus::Approved.to_string(), "approved");
        assert_eq!(NotificationKind::default().to_string(), "info");
        assert_eq!(RegistrationType::Team.to_string(), "Team");
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_notification_visibility() {
        let broadcast = Notification {
            id: 1,
            text: "Maintenance".to_string(),
            kind: NotificationKind::Warning,
            date: None,
            student_id: None,
        };
        let addressed = Notification {
            student_id: Some("ST-001".to_string()),
            ..broadcast.clone()
        };

        assert!(broadcast.is_broadcast());
        assert!(broadcast.is_visible_to("ST-002"));
        assert!(addressed.is_visible_to("ST-001"));
        assert!(!addressed.is_visible_to("ST-002"));
    }

    #[test]
    fn test_student_serialization_shape() {
        let student = Student {
            id: "ST-001".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@school.edu".to_string(),
            grade: "9".to_string(),
            class: "A".to_string(),
            school: "Lincoln High".to_string(),
            competition: "ISEF".to_string(),
            registration: RegistrationType::Individual,
            members: None,
            stage: "Registration".to_string(),
            status: StudentStatus::Pending,
            result: StudentResult::Undecided,
            project_title: None,
            mentor: None,
            abstract_text: String::new(),
            feedback: None,
        };

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["type"], "Individual");
        assert_eq!(json["result"], "-");
        assert_eq!(json["abstract"], "");
        assert!(json.get("projectTitle").is_some());

        let back: Student = serde_json::from_value(json).unwrap();
        assert_eq!(back, student);
    }

    #[test]
    fn test_competition_final_stage() {
        let competition = Competition {
            id: "c1".to_string(),
            name: "Math Olympiad".to_string(),
            stages: vec!["Stage 1".to_string(), "Final".to_string()],
            description: String::new(),
            kind: CompetitionKind::Internal,
            start_date: String::new(),
            end_date: String::new(),
            max_participants: 0,
        };
        assert_eq!(competition.final_stage(), Some("Final"));
    }
}
