//! Compete CLI
//!
//! Command-line interface for Compete - student competition management.
//! Every invocation starts from seed data; only the theme is persisted.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use compete_core::{
    AchievementDraft, AppContext, CertificateDraft, CompetitionDraft, CompetitionKind, Config,
    RegistrationType, ResourceDraft, Role, StoreError, StudentDraft, StudentStatus,
    SubmissionDraft,
};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "compete")]
#[command(about = "Compete - student competition management")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show registry counters and settings
    Status,
    /// Manage student registrations
    #[command(alias = "student")]
    Students {
        #[command(subcommand)]
        command: StudentCommands,
    },
    /// Manage competitions
    #[command(alias = "competition")]
    Competitions {
        #[command(subcommand)]
        command: CompetitionCommands,
    },
    /// Manage submissions
    #[command(alias = "submission")]
    Submissions {
        #[command(subcommand)]
        command: SubmissionCommands,
    },
    /// Manage certificates
    #[command(alias = "certificate")]
    Certificates {
        #[command(subcommand)]
        command: CertificateCommands,
    },
    /// Manage achievement badges
    #[command(alias = "achievement")]
    Achievements {
        #[command(subcommand)]
        command: AchievementCommands,
    },
    /// Show the notification feed
    Notifications {
        /// Only what this student sees (addressed plus broadcasts)
        #[arg(short, long)]
        student: Option<String>,
    },
    /// Show or toggle the light/dark theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Sign in with a role
    Login {
        /// admin or student
        role: Role,
    },
    /// Team workspace
    Team {
        #[command(subcommand)]
        command: Option<TeamCommands>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum StudentCommands {
    /// List students
    #[command(alias = "ls")]
    List {
        /// Filter by competition name
        #[arg(short, long)]
        competition: Option<String>,
        /// Filter by status (pending, approved, rejected)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show a student with counters and notifications
    Show {
        /// Student id, e.g. ST-001
        id: String,
    },
    /// Register a new student
    #[command(alias = "add")]
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        school: Option<String>,
        /// Competition name
        #[arg(long)]
        competition: Option<String>,
        /// Register as a team with these members
        #[arg(long)]
        members: Option<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        mentor: Option<String>,
        #[arg(long = "abstract")]
        abstract_text: Option<String>,
    },
    /// Approve a registration
    Approve { id: String },
    /// Reject a registration
    Reject { id: String },
    /// Move a student to another stage
    Stage { id: String, stage: String },
    /// Record a result (passed, failed, -)
    Result { id: String, result: String },
    /// Replace a student's feedback
    Feedback { id: String, feedback: String },
}

#[derive(Subcommand)]
enum CompetitionCommands {
    /// List competitions
    #[command(alias = "ls")]
    List,
    /// Add a competition
    Add {
        name: String,
        /// Stage names, in order
        #[arg(long = "stage")]
        stages: Vec<String>,
        #[arg(long)]
        description: Option<String>,
        /// internal or outer
        #[arg(long)]
        kind: Option<CompetitionKind>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        max_participants: Option<u32>,
    },
}

#[derive(Subcommand)]
enum SubmissionCommands {
    /// List submissions
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        student: Option<String>,
        #[arg(short, long)]
        competition: Option<String>,
    },
    /// Record a submission
    Add {
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        competition: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
        /// Submission type, e.g. pdf or video
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Review a submission (pending, approved, rejected)
    Review {
        id: String,
        status: String,
        #[arg(long)]
        feedback: Option<String>,
    },
}

#[derive(Subcommand)]
enum CertificateCommands {
    /// List certificates
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        student: Option<String>,
        #[arg(short, long)]
        competition: Option<String>,
    },
    /// Issue a certificate
    Issue {
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        competition: Option<String>,
        /// What the certificate recognizes
        #[arg(long)]
        achievement: Option<String>,
        #[arg(long)]
        issued_by: Option<String>,
    },
}

#[derive(Subcommand)]
enum AchievementCommands {
    /// List achievements
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        student: Option<String>,
    },
    /// Award a badge
    Award {
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        badge: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a badge
    #[command(alias = "rm")]
    Remove { id: String },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
enum TeamCommands {
    /// Show roster, chat, and resources
    Show,
    /// Post a chat message
    Message {
        text: String,
        /// Sign in with this role first
        #[arg(long = "as")]
        role: Option<Role>,
    },
    /// Share a resource
    Share {
        name: String,
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        url: Option<String>,
        /// Sign in with this role first
        #[arg(long = "as")]
        role: Option<Role>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, seed, login_delay_ms, log_level)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    match run(cli, &output).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if let Some(suggestion) = e
                .downcast_ref::<StoreError>()
                .and_then(StoreError::recovery_suggestion)
            {
                eprintln!("Error: {}", e);
                eprintln!("{}", suggestion);
                std::process::exit(1);
            }
            Err(e)
        }
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    // Config commands work on the file directly and don't need a context
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())?;
    init_logging(&config);

    let mut ctx = AppContext::init(config);
    debug!("context ready, seed {}", ctx.config().seed);

    match cli.command {
        None | Some(Commands::Status) => commands::status::show(&ctx, output),
        Some(Commands::Students { command }) => handle_student_command(command, &mut ctx, output),
        Some(Commands::Competitions { command }) => {
            handle_competition_command(command, &mut ctx, output)
        }
        Some(Commands::Submissions { command }) => {
            handle_submission_command(command, &mut ctx, output)
        }
        Some(Commands::Certificates { command }) => {
            handle_certificate_command(command, &mut ctx, output)
        }
        Some(Commands::Achievements { command }) => {
            handle_achievement_command(command, &mut ctx, output)
        }
        Some(Commands::Notifications { student }) => {
            commands::notification::list(ctx.store()?, student, output)
        }
        Some(Commands::Theme { command }) => match command {
            Some(ThemeCommands::Show) | None => commands::theme::show(ctx.theme(), output),
            Some(ThemeCommands::Toggle) => commands::theme::toggle(ctx.theme_mut(), output),
        },
        Some(Commands::Login { role }) => commands::session::login(&mut ctx, role, output).await,
        Some(Commands::Team { command }) => handle_team_command(command, &mut ctx, output).await,
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
    }
}

/// Initialize stderr logging
///
/// RUST_LOG wins when set; otherwise the configured log level applies.
fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_student_command(
    command: StudentCommands,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let store = ctx.store_mut()?;
    match command {
        StudentCommands::List {
            competition,
            status,
        } => commands::student::list(store, competition, status, output),
        StudentCommands::Show { id } => commands::student::show(store, id, output),
        StudentCommands::Register {
            name,
            email,
            grade,
            class,
            school,
            competition,
            members,
            project,
            mentor,
            abstract_text,
        } => {
            let registration = members.as_ref().map(|_| RegistrationType::Team);
            let draft = StudentDraft {
                name,
                email,
                grade,
                class,
                school,
                competition,
                registration,
                members,
                project_title: project,
                mentor,
                abstract_text,
                ..StudentDraft::default()
            };
            commands::student::register(store, draft, output)
        }
        StudentCommands::Approve { id } => {
            commands::student::set_status(store, id, StudentStatus::Approved, output)
        }
        StudentCommands::Reject { id } => {
            commands::student::set_status(store, id, StudentStatus::Rejected, output)
        }
        StudentCommands::Stage { id, stage } => {
            commands::student::set_stage(store, id, stage, output)
        }
        StudentCommands::Result { id, result } => {
            commands::student::set_result(store, id, result, output)
        }
        StudentCommands::Feedback { id, feedback } => {
            commands::student::set_feedback(store, id, feedback, output)
        }
    }
}

fn handle_competition_command(
    command: CompetitionCommands,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let store = ctx.store_mut()?;
    match command {
        CompetitionCommands::List => commands::competition::list(store, output),
        CompetitionCommands::Add {
            name,
            stages,
            description,
            kind,
            start,
            end,
            max_participants,
        } => {
            let draft = CompetitionDraft {
                stages: (!stages.is_empty()).then_some(stages),
                description,
                kind,
                start_date: start,
                end_date: end,
                max_participants,
                ..CompetitionDraft::named(name)
            };
            commands::competition::add(store, draft, output)
        }
    }
}

fn handle_submission_command(
    command: SubmissionCommands,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let store = ctx.store_mut()?;
    match command {
        SubmissionCommands::List {
            student,
            competition,
        } => commands::submission::list(store, student, competition, output),
        SubmissionCommands::Add {
            student,
            competition,
            title,
            url,
            kind,
        } => {
            let draft = SubmissionDraft {
                student_id: student,
                competition_id: competition,
                title,
                url,
                kind,
                ..SubmissionDraft::default()
            };
            commands::submission::add(store, draft, output)
        }
        SubmissionCommands::Review {
            id,
            status,
            feedback,
        } => commands::submission::review(store, id, status, feedback, output),
    }
}

fn handle_certificate_command(
    command: CertificateCommands,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let store = ctx.store_mut()?;
    match command {
        CertificateCommands::List {
            student,
            competition,
        } => commands::certificate::list(store, student, competition, output),
        CertificateCommands::Issue {
            student,
            competition,
            achievement,
            issued_by,
        } => {
            let draft = CertificateDraft {
                student_id: student,
                competition_id: competition,
                achievement,
                issued_by,
                ..CertificateDraft::default()
            };
            commands::certificate::issue(store, draft, output)
        }
    }
}

fn handle_achievement_command(
    command: AchievementCommands,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let store = ctx.store_mut()?;
    match command {
        AchievementCommands::List { student } => {
            commands::achievement::list(store, student, output)
        }
        AchievementCommands::Award {
            student,
            badge,
            description,
            icon,
            color,
        } => {
            let draft = AchievementDraft {
                student_id: student,
                badge,
                description,
                icon,
                color,
                ..AchievementDraft::default()
            };
            commands::achievement::award(store, draft, output)
        }
        AchievementCommands::Remove { id } => commands::achievement::remove(store, id, output),
    }
}

async fn handle_team_command(
    command: Option<TeamCommands>,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    match command {
        Some(TeamCommands::Show) | None => commands::team::show(ctx, output),
        Some(TeamCommands::Message { text, role }) => {
            commands::team::message(ctx, text, role, output).await
        }
        Some(TeamCommands::Share {
            name,
            kind,
            url,
            role,
        }) => {
            let draft = ResourceDraft {
                name: Some(name),
                kind,
                url,
            };
            commands::team::share(ctx, draft, role, output).await
        }
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
