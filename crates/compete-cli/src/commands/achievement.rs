//! Achievement command handlers

use anyhow::Result;

use compete_core::{AchievementDraft, Store};

use super::print_change;
use crate::output::Output;

/// List achievements, optionally for one student
pub fn list(store: &Store, student: Option<String>, output: &Output) -> Result<()> {
    let achievements = match student {
        Some(student) => store.student_achievements(&student),
        None => store.achievements().iter().collect(),
    };

    output.print_achievements(&achievements);
    Ok(())
}

/// Award a badge
pub fn award(store: &mut Store, draft: AchievementDraft, output: &Output) -> Result<()> {
    let achievement = store.add_achievement(draft);
    print_change(
        output,
        &format!("Awarded {} ({})", achievement.badge, achievement.id),
        &achievement.id,
        &achievement,
        store.notifications().first(),
    );
    Ok(())
}

/// Remove a badge; unknown ids are reported but not an error
pub fn remove(store: &mut Store, id: String, output: &Output) -> Result<()> {
    match store.remove_achievement(&id) {
        Some(achievement) => {
            print_change(
                output,
                &format!("Removed {} ({})", achievement.badge, achievement.id),
                &achievement.id,
                &achievement,
                None,
            );
        }
        None => output.message(&format!("No achievement with id {}", id)),
    }
    Ok(())
}
