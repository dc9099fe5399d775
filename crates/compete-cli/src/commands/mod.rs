//! Command handlers

pub mod achievement;
pub mod certificate;
pub mod competition;
pub mod config;
pub mod notification;
pub mod session;
pub mod status;
pub mod student;
pub mod submission;
pub mod team;
pub mod theme;

use serde::Serialize;

use compete_core::Notification;

use crate::output::{Output, OutputFormat};

/// Report an entity produced by a mutation together with the notification
/// the mutation emitted, if any
pub fn print_change<T: Serialize>(
    output: &Output,
    summary: &str,
    id: &str,
    entity: &T,
    notification: Option<&Notification>,
) {
    match output.format {
        OutputFormat::Human => {
            output.success(summary);
            if let Some(notification) = notification {
                println!("  notification: {}", notification.text);
            }
        }
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "entity": entity,
            "notification": notification,
        })),
        OutputFormat::Quiet => println!("{}", id),
    }
}
