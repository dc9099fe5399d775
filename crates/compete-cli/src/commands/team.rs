//! Team workspace command handlers

use anyhow::Result;

use compete_core::{AppContext, ResourceDraft, Role};

use crate::output::{Output, OutputFormat};

/// Show the team, its chat log, and shared resources
pub fn show(ctx: &AppContext, output: &Output) -> Result<()> {
    let workspace = ctx.team();
    let team = workspace.team();

    match output.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "team": team,
            "messages": workspace.messages(),
            "resources": workspace.resources(),
        })),
        OutputFormat::Quiet => println!("{}", team.id),
        OutputFormat::Human => {
            println!("{} (rank #{}, {} pts)", team.name, team.rank, team.score);
            println!("Project: {}", team.project_title);
            println!();
            println!("── Members ({}) ──", team.members.len());
            for member in &team.members {
                println!("  [{}] {} ({})", member.avatar, member.name, member.role);
            }
            println!();
            println!("── Chat ({}) ──", workspace.messages().len());
            for message in workspace.messages() {
                println!("  {} {}: {}", message.timestamp, message.sender, message.text);
            }
            println!();
            println!("── Resources ({}) ──", workspace.resources().len());
            for resource in workspace.resources() {
                println!(
                    "  {} [{}] {} by {} on {}",
                    resource.name, resource.kind, resource.url, resource.uploaded_by, resource.date
                );
            }
        }
    }

    Ok(())
}

/// Post a chat message, signing in first when a role is given
pub async fn message(
    ctx: &mut AppContext,
    text: String,
    role: Option<Role>,
    output: &Output,
) -> Result<()> {
    if let Some(role) = role {
        ctx.login(role).await;
    }

    let message = ctx.send_team_message(text);
    match output.format {
        OutputFormat::Json => output.print_json(message),
        OutputFormat::Quiet => println!("{}", message.id),
        OutputFormat::Human => output.success(&format!(
            "{} {}: {}",
            message.timestamp, message.sender, message.text
        )),
    }

    Ok(())
}

/// Share a resource, signing in first when a role is given
pub async fn share(
    ctx: &mut AppContext,
    draft: ResourceDraft,
    role: Option<Role>,
    output: &Output,
) -> Result<()> {
    if let Some(role) = role {
        ctx.login(role).await;
    }

    let resource = ctx.share_team_resource(draft);
    match output.format {
        OutputFormat::Json => output.print_json(resource),
        OutputFormat::Quiet => println!("{}", resource.id),
        OutputFormat::Human => output.success(&format!(
            "Shared {} ({}) as {}",
            resource.name, resource.kind, resource.uploaded_by
        )),
    }

    Ok(())
}
