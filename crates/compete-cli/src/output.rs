//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use compete_core::{Achievement, Certificate, Competition, Notification, Student, Submission};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print any serializable value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) {
        println!("{}", to_json(value));
    }

    /// Print a single student
    pub fn print_student(&self, student: &Student) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", student.id);
                println!("Name:        {}", student.name);
                println!("Email:       {}", student.email);
                println!(
                    "School:      {} (grade {}, class {})",
                    student.school, student.grade, student.class
                );
                println!("Competition: {}", student.competition);
                println!("Type:        {}", student.registration);
                if let Some(ref members) = student.members {
                    println!("Members:     {}", members);
                }
                println!("Stage:       {}", student.stage);
                println!("Status:      {}", student.status);
                println!("Result:      {}", student.result);
                if let Some(ref title) = student.project_title {
                    println!("Project:     {}", title);
                }
                if let Some(ref mentor) = student.mentor {
                    println!("Mentor:      {}", mentor);
                }
                if let Some(ref feedback) = student.feedback {
                    println!("Feedback:    {}", feedback);
                }
            }
            OutputFormat::Json => self.print_json(student),
            OutputFormat::Quiet => println!("{}", student.id),
        }
    }

    /// Print a list of students
    pub fn print_students(&self, students: &[&Student]) {
        match self.format {
            OutputFormat::Human => {
                if students.is_empty() {
                    println!("No students found.");
                    return;
                }
                for student in students {
                    println!(
                        "{} | {} | {} | {} | {}",
                        student.id,
                        truncate(&student.name, 22),
                        truncate(&student.competition, 20),
                        student.status,
                        student.result
                    );
                }
                println!("\n{} student(s)", students.len());
            }
            OutputFormat::Json => self.print_json(students),
            OutputFormat::Quiet => {
                for student in students {
                    println!("{}", student.id);
                }
            }
        }
    }

    /// Print a list of competitions
    pub fn print_competitions(&self, competitions: &[Competition]) {
        match self.format {
            OutputFormat::Human => {
                if competitions.is_empty() {
                    println!("No competitions found.");
                    return;
                }
                for competition in competitions {
                    println!(
                        "{} | {} | {} | {} → {} | max {}",
                        competition.id,
                        truncate(&competition.name, 22),
                        competition.kind,
                        date_or_dash(&competition.start_date),
                        date_or_dash(&competition.end_date),
                        competition.max_participants
                    );
                    if !competition.stages.is_empty() {
                        println!("    stages: {}", competition.stages.join(" → "));
                    }
                }
                println!("\n{} competition(s)", competitions.len());
            }
            OutputFormat::Json => self.print_json(competitions),
            OutputFormat::Quiet => {
                for competition in competitions {
                    println!("{}", competition.id);
                }
            }
        }
    }

    /// Print a list of submissions
    pub fn print_submissions(&self, submissions: &[&Submission]) {
        match self.format {
            OutputFormat::Human => {
                if submissions.is_empty() {
                    println!("No submissions found.");
                    return;
                }
                for submission in submissions {
                    println!(
                        "{} | {} | {} | {} | {}",
                        submission.id,
                        submission.date,
                        truncate(&submission.title, 30),
                        submission.status,
                        submission.student_id.as_deref().unwrap_or("-")
                    );
                    if let Some(ref feedback) = submission.feedback {
                        println!("    feedback: {}", feedback);
                    }
                }
                println!("\n{} submission(s)", submissions.len());
            }
            OutputFormat::Json => self.print_json(submissions),
            OutputFormat::Quiet => {
                for submission in submissions {
                    println!("{}", submission.id);
                }
            }
        }
    }

    /// Print a list of certificates
    pub fn print_certificates(&self, certificates: &[&Certificate]) {
        match self.format {
            OutputFormat::Human => {
                if certificates.is_empty() {
                    println!("No certificates found.");
                    return;
                }
                for certificate in certificates {
                    println!(
                        "{} | {} | {} | {} | {} | issued by {}",
                        certificate.id,
                        certificate.date,
                        certificate.student_name.as_deref().unwrap_or("-"),
                        certificate.competition_name.as_deref().unwrap_or("-"),
                        certificate.achievement.as_deref().unwrap_or("-"),
                        certificate.issued_by
                    );
                }
                println!("\n{} certificate(s)", certificates.len());
            }
            OutputFormat::Json => self.print_json(certificates),
            OutputFormat::Quiet => {
                for certificate in certificates {
                    println!("{}", certificate.id);
                }
            }
        }
    }

    /// Print a list of achievements
    pub fn print_achievements(&self, achievements: &[&Achievement]) {
        match self.format {
            OutputFormat::Human => {
                if achievements.is_empty() {
                    println!("No achievements found.");
                    return;
                }
                for achievement in achievements {
                    println!(
                        "{} {} | {} | {} | {}",
                        achievement.icon,
                        achievement.id,
                        achievement.badge,
                        achievement.description,
                        achievement.student_id.as_deref().unwrap_or("-")
                    );
                }
                println!("\n{} achievement(s)", achievements.len());
            }
            OutputFormat::Json => self.print_json(achievements),
            OutputFormat::Quiet => {
                for achievement in achievements {
                    println!("{}", achievement.id);
                }
            }
        }
    }

    /// Print a notification feed
    pub fn print_notifications(&self, notifications: &[&Notification]) {
        match self.format {
            OutputFormat::Human => {
                if notifications.is_empty() {
                    println!("No notifications.");
                    return;
                }
                for notification in notifications {
                    println!("{}", notification_line(notification));
                }
            }
            OutputFormat::Json => self.print_json(notifications),
            OutputFormat::Quiet => {
                for notification in notifications {
                    println!("{}", notification.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Serialize to pretty JSON, reporting the error inline if that fails
fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| serde_json::json!({"error": e.to_string()}).to_string())
}

/// One-line rendering of a notification
fn notification_line(notification: &Notification) -> String {
    let recipient = notification
        .student_id
        .as_deref()
        .map(|id| format!(" → {}", id))
        .unwrap_or_default();
    format!(
        "[{}] {:<7} {}{}",
        notification.date.as_deref().unwrap_or("----------"),
        notification.kind.as_str(),
        notification.text,
        recipient
    )
}

fn date_or_dash(date: &str) -> &str {
    if date.is_empty() {
        "-"
    } else {
        date
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_core::NotificationKind;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
        // Multi-byte characters are never split
        assert_eq!(truncate("ééééééééééé", 5), "éé...");
    }

    #[test]
    fn test_notification_line() {
        let mut notification = Notification {
            id: 1,
            text: "Maintenance tonight".to_string(),
            kind: NotificationKind::Warning,
            date: Some("2024-01-28".to_string()),
            student_id: None,
        };
        assert_eq!(
            notification_line(&notification),
            "[2024-01-28] warning Maintenance tonight"
        );

        notification.student_id = Some("ST-001".to_string());
        assert!(notification_line(&notification).ends_with("→ ST-001"));
    }

    #[test]
    fn test_date_or_dash() {
        assert_eq!(date_or_dash(""), "-");
        assert_eq!(date_or_dash("2024-05-11"), "2024-05-11");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&serde_json::json!({"a": 1}));
        assert!(json.contains("\"a\": 1"));
    }
}
