//! Notification command handlers

use anyhow::Result;

use compete_core::Store;

use crate::output::Output;

/// Show the feed, or what one student sees
pub fn list(store: &Store, student: Option<String>, output: &Output) -> Result<()> {
    let notifications = match student {
        Some(student) => store.student_notifications(&student),
        None => store.notifications().iter().collect(),
    };

    output.print_notifications(&notifications);
    Ok(())
}
