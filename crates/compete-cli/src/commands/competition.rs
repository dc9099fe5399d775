//! Competition command handlers

use anyhow::Result;

use compete_core::{CompetitionDraft, Store};

use super::print_change;
use crate::output::Output;

/// List all competitions
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_competitions(store.competitions());
    Ok(())
}

/// Add a competition
pub fn add(store: &mut Store, draft: CompetitionDraft, output: &Output) -> Result<()> {
    let competition = store.add_competition(draft);
    print_change(
        output,
        &format!("Added competition {} ({})", competition.name, competition.id),
        &competition.id,
        &competition,
        store.notifications().first(),
    );
    Ok(())
}
