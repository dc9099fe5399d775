//! Compete Core Library
//!
//! This crate provides the domain state of Compete, a student competition
//! platform: students, competitions, submissions, certificates, achievements,
//! and the notification feed that reports changes to them.
//!
//! # Architecture
//!
//! - **Store**: in-memory registry, seeded at startup, mutated through
//!   typed operations that fill defaults and emit notifications
//!
//! Nothing but the theme preference is persisted; every new store starts
//! from the same seed data.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::seeded(DEFAULT_SEED);
//!
//! // Register a student
//! let student = store.register_student(StudentDraft::named("Grace Hopper"));
//! store.update_student_status(&student.id, StudentStatus::Approved)?;
//!
//! // Query
//! let submissions = store.student_submissions(&student.id);
//! ```
//!
//! # Modules
//!
//! - `store`: Registry, mutations, and queries (main entry point)
//! - `models`: Entity structs and their enums
//! - `drafts`: Partial input with defaults for creating entities
//! - `seed`: Deterministic seed data
//! - `auth`: Mocked login session and role checks
//! - `team`: Team chat and shared resources
//! - `theme`: Persisted light/dark preference
//! - `context`: Explicitly constructed application context
//! - `config`: Application configuration

pub mod auth;
pub mod config;
pub mod context;
pub mod drafts;
pub mod error;
pub mod ids;
pub mod models;
pub mod seed;
pub mod stats;
pub mod store;
pub mod team;
pub mod theme;

pub use auth::{authorize, Access, Auth, AuthError, AuthState, CancellationToken, Role, User};
pub use config::Config;
pub use context::AppContext;
pub use drafts::{
    AchievementDraft, CertificateDraft, CompetitionDraft, StudentDraft, SubmissionDraft,
};
pub use error::{StoreError, StoreResult};
pub use models::{
    Achievement, Certificate, Competition, CompetitionKind, Notification, NotificationKind,
    RegistrationType, Student, StudentResult, StudentStatus, Submission, SubmissionStatus,
};
pub use seed::DEFAULT_SEED;
pub use stats::{RegistrySummary, StudentStats};
pub use store::{DanglingReference, Registry, Store};
pub use team::{Message, Resource, ResourceDraft, Team, TeamMember, TeamWorkspace};
pub use theme::{Theme, ThemePreference};
