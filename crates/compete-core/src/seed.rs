//! Seed data
//!
//! Every store starts from the same fixed competitions, submissions,
//! certificates, achievements, and notifications, plus a batch of generated
//! students. Per-student competition, status, and result are picked from a
//! SHA-256 digest of `(seed, index, field)`, so a given seed always yields
//! the same registry.

use sha2::{Digest, Sha256};

use crate::ids::student_id;
use crate::models::{
    Achievement, Certificate, Competition, CompetitionKind, Notification, NotificationKind,
    RegistrationType, Student, StudentResult, StudentStatus, Submission, SubmissionStatus,
};
use crate::store::Registry;

/// Seed used when the configuration does not name one
pub const DEFAULT_SEED: u64 = 2024;

/// Number of generated students
pub const GENERATED_STUDENTS: usize = 20;

const FIRST_NAMES: [&str; 20] = [
    "Alice", "Bob", "Charlie", "Diana", "Evan", "Fiona", "George", "Hannah", "Ian", "Jack",
    "Karen", "Leo", "Mona", "Nathan", "Olivia", "Peter", "Quinn", "Rachel", "Steve", "Tony",
];

const LAST_NAMES: [&str; 20] = [
    "Johnson", "Smith", "Brown", "Prince", "Wright", "Gallagher", "Miller", "Montana",
    "Somerhalder", "Daniels", "Page", "Messi", "Lisa", "Drake", "Wilde", "Parker", "Fabray",
    "Green", "Rogers", "Stark",
];

const SCHOOLS: [&str; 5] = [
    "Lincoln High",
    "Washington Academy",
    "Roosevelt Prep",
    "Jefferson High",
    "Kennedy International",
];

const PROJECT_TITLES: [&str; 12] = [
    "Eco-Friendly Water Purification System",
    "AI-Driven Crop Disease Detection",
    "Renewable Energy from Algae",
    "Blockchain for Supply Chain Transparency",
    "Smart Traffic Management System",
    "Biodegradable Plastic from Corn Starch",
    "Autonomous Drone for Search and Rescue",
    "Mental Health Analysis using NLP",
    "Vertical Farming Automation",
    "Low-Cost Prosthetic Global Arm",
    "Solar-Powered Water Desalination",
    "Machine Learning for Early Wildfire Detection",
];

const MENTORS: [&str; 5] = [
    "Dr. Alan Grant",
    "Prof. Minerva McGonagall",
    "Dr. Emmett Brown",
    "Mr. Miyagi",
    "Ms. Frizzle",
];

const COMPETITION_NAMES: [&str; 5] = [
    "Math Olympiad",
    "Science Fair",
    "Coding Cup",
    "Debate Championship",
    "ISEF",
];

const STATUSES: [StudentStatus; 3] = [
    StudentStatus::Approved,
    StudentStatus::Pending,
    StudentStatus::Rejected,
];

const RESULTS: [StudentResult; 3] = [
    StudentResult::Passed,
    StudentResult::Failed,
    StudentResult::Undecided,
];

const CLASSES: [&str; 3] = ["A", "B", "C"];

const ABSTRACT: &str = "This project aims to explore the viability of using advanced algorithms to solve daily problems efficiently.";

/// Build the full seeded registry
pub fn seed_registry(seed: u64) -> Registry {
    Registry {
        students: generate_students(seed),
        competitions: seed_competitions(),
        submissions: seed_submissions(),
        certificates: seed_certificates(),
        achievements: seed_achievements(),
        notifications: seed_notifications(),
    }
}

/// Deterministic index into a pool of `len` items
fn pick(seed: u64, index: usize, field: &str, len: usize) -> usize {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update((index as u64).to_le_bytes());
    hasher.update(field.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    (u64::from_le_bytes(bytes) % len as u64) as usize
}

/// Generate the mock student batch
///
/// Names, schools, projects, and mentors cycle through their pools by index;
/// competition, status, and result come from `pick`. A result other than
/// "-" is only assigned to approved students.
pub fn generate_students(seed: u64) -> Vec<Student> {
    (0..GENERATED_STUDENTS)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[i % LAST_NAMES.len()];
            let school = SCHOOLS[i % SCHOOLS.len()];

            let competition = COMPETITION_NAMES[pick(seed, i, "competition", COMPETITION_NAMES.len())];
            let status = STATUSES[pick(seed, i, "status", STATUSES.len())];
            let result = if status == StudentStatus::Approved {
                RESULTS[pick(seed, i, "result", RESULTS.len())]
            } else {
                StudentResult::Undecided
            };

            let is_project = competition == "Science Fair" || competition == "ISEF";
            let is_team = i % 5 == 0;
            let members = is_team.then(|| {
                format!(
                    "{}, {}",
                    FIRST_NAMES[(i + 1) % FIRST_NAMES.len()],
                    FIRST_NAMES[(i + 2) % FIRST_NAMES.len()]
                )
            });

            let feedback = match result {
                StudentResult::Failed => {
                    Some("Great effort, but the methodology lacks control variables.".to_string())
                }
                StudentResult::Passed => {
                    Some("Excellent work! The presentation was very persuasive.".to_string())
                }
                StudentResult::Undecided => None,
            };

            let school_domain: String = school
                .split_whitespace()
                .collect::<String>()
                .to_lowercase();

            Student {
                id: student_id(i + 1),
                name: format!("{} {}", first, last),
                email: format!(
                    "{}.{}@{}.edu",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    school_domain
                ),
                grade: (9 + i % 4).to_string(),
                class: CLASSES[i % CLASSES.len()].to_string(),
                school: school.to_string(),
                competition: competition.to_string(),
                registration: if is_team {
                    RegistrationType::Team
                } else {
                    RegistrationType::Individual
                },
                members,
                stage: "Registration".to_string(),
                status,
                result,
                project_title: is_project
                    .then(|| PROJECT_TITLES[i % PROJECT_TITLES.len()].to_string()),
                mentor: is_project.then(|| MENTORS[i % MENTORS.len()].to_string()),
                abstract_text: ABSTRACT.to_string(),
                feedback,
            }
        })
        .collect()
}

fn competition(
    id: &str,
    name: &str,
    stages: &[&str],
    description: &str,
    kind: CompetitionKind,
    dates: (&str, &str),
    max_participants: u32,
) -> Competition {
    Competition {
        id: id.to_string(),
        name: name.to_string(),
        stages: stages.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        kind,
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
        max_participants,
    }
}

fn seed_competitions() -> Vec<Competition> {
    vec![
        competition(
            "c1",
            "Math Olympiad",
            &["Stage 1", "Stage 2", "Final"],
            "Annual mathematics competition for high school students.",
            CompetitionKind::Internal,
            ("2023-09-01", "2023-12-15"),
            100,
        ),
        competition(
            "c2",
            "Science Fair",
            &["Submission", "Final"],
            "Showcase of innovative science projects.",
            CompetitionKind::Internal,
            ("2023-10-01", "2024-02-20"),
            50,
        ),
        competition(
            "c3",
            "Coding Cup",
            &["Qualifiers", "Final"],
            "Competitive programming contest.",
            CompetitionKind::Internal,
            ("2023-11-15", "2024-01-30"),
            200,
        ),
        competition(
            "c4",
            "Debate Championship",
            &["Round 1", "Round 2", "Final"],
            "Inter-school debate tournament.",
            CompetitionKind::Internal,
            ("2024-01-10", "2024-03-15"),
            32,
        ),
        competition(
            "c5",
            "ISEF",
            &["Local Qualifier", "Regional", "International Final"],
            "International Science and Engineering Fair - The world's largest international pre-college science competition.",
            CompetitionKind::Outer,
            ("2024-05-11", "2024-05-17"),
            1000,
        ),
    ]
}

fn seed_submissions() -> Vec<Submission> {
    let submission = |id: &str,
                      student: &str,
                      competition: &str,
                      title: &str,
                      url: &str,
                      kind: &str,
                      status: SubmissionStatus,
                      date: &str,
                      feedback: Option<&str>| Submission {
        id: id.to_string(),
        student_id: Some(student.to_string()),
        competition_id: Some(competition.to_string()),
        title: title.to_string(),
        url: url.to_string(),
        kind: kind.to_string(),
        status,
        date: date.to_string(),
        feedback: feedback.map(str::to_string),
    };

    vec![
        submission(
            "sub-001",
            "ST-001",
            "c2",
            "Water Purification Project",
            "https://github.com/alice/water-project",
            "github",
            SubmissionStatus::Approved,
            "2024-01-15",
            Some("Excellent research methodology!"),
        ),
        submission(
            "sub-002",
            "ST-002",
            "c3",
            "Algorithm Optimizer",
            "https://github.com/bob/algo",
            "github",
            SubmissionStatus::Pending,
            "2024-01-20",
            None,
        ),
        submission(
            "sub-003",
            "ST-003",
            "c2",
            "Solar Energy Research",
            "https://docs.google.com/document",
            "link",
            SubmissionStatus::Rejected,
            "2024-01-18",
            Some("Needs more data analysis"),
        ),
    ]
}

fn seed_certificates() -> Vec<Certificate> {
    vec![Certificate {
        id: "cert-001".to_string(),
        student_id: Some("ST-001".to_string()),
        student_name: Some("Alice Johnson".to_string()),
        competition_id: Some("c2".to_string()),
        competition_name: Some("Science Fair".to_string()),
        achievement: Some("First Place".to_string()),
        date: "2024-02-01".to_string(),
        issued_by: "Dr. John Smith".to_string(),
    }]
}

fn seed_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "ach-001".to_string(),
            student_id: Some("ST-001".to_string()),
            badge: "First Submission".to_string(),
            description: "Submitted first project".to_string(),
            icon: "🎯".to_string(),
            date: "2024-01-15".to_string(),
            color: "blue".to_string(),
        },
        Achievement {
            id: "ach-002".to_string(),
            student_id: Some("ST-001".to_string()),
            badge: "Team Player".to_string(),
            description: "Collaborated with 5+ team members".to_string(),
            icon: "🤝".to_string(),
            date: "2024-01-20".to_string(),
            color: "green".to_string(),
        },
    ]
}

fn seed_notifications() -> Vec<Notification> {
    let notification =
        |id: u64, text: &str, kind: NotificationKind, date: &str, student: Option<&str>| {
            Notification {
                id,
                text: text.to_string(),
                kind,
                date: Some(date.to_string()),
                student_id: student.map(str::to_string),
            }
        };

    vec![
        notification(
            1,
            "New registration guidelines for ISEF 2024 available.",
            NotificationKind::Info,
            "2024-02-01",
            Some("ST-001"),
        ),
        notification(
            2,
            "System maintenance scheduled for this weekend.",
            NotificationKind::Warning,
            "2024-01-28",
            None,
        ),
        notification(
            3,
            "Welcome to the competition platform!",
            NotificationKind::Info,
            "2024-02-01",
            Some("ST-001"),
        ),
        notification(
            4,
            "Your abstract for Science Fair was reviewed.",
            NotificationKind::Success,
            "2024-02-02",
            Some("ST-001"),
        ),
    ]
}
