//! Session command handlers

use anyhow::Result;

use compete_core::{Access, AppContext, Role};

use crate::output::{Output, OutputFormat};

/// Areas of the application and the roles allowed into each
pub const AREAS: &[(&str, &[Role])] = &[
    ("dashboard", &[]),
    ("admin", &[Role::Admin]),
    ("student", &[Role::Student]),
];

/// Sign in with a role and report which areas the session can enter
pub async fn login(ctx: &mut AppContext, role: Role, output: &Output) -> Result<()> {
    if output.format == OutputFormat::Human {
        println!("Signing in as {}...", role);
    }

    let user = ctx.login(role).await;

    let areas: Vec<&str> = AREAS
        .iter()
        .filter(|(_, allowed)| matches!(ctx.auth().authorize(allowed), Access::Granted(_)))
        .map(|(name, _)| *name)
        .collect();

    match output.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "user": user,
            "areas": areas,
        })),
        OutputFormat::Quiet => println!("{}", user.id),
        OutputFormat::Human => {
            output.success(&format!("Signed in as {} ({})", user.name, user.role));
            println!("  id:    {}", user.id);
            println!("  areas: {}", areas.join(", "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_core::{authorize, AuthState, User};

    fn signed_in(role: Role) -> AuthState {
        AuthState::SignedIn(User {
            id: "abc".to_string(),
            name: role.display_name().to_string(),
            role,
        })
    }

    fn granted(state: &AuthState) -> Vec<&'static str> {
        AREAS
            .iter()
            .filter(|(_, allowed)| matches!(authorize(state, allowed), Access::Granted(_)))
            .map(|(name, _)| *name)
            .collect()
    }

    #[test]
    fn test_admin_areas() {
        assert_eq!(granted(&signed_in(Role::Admin)), vec!["dashboard", "admin"]);
    }

    #[test]
    fn test_student_areas() {
        assert_eq!(
            granted(&signed_in(Role::Student)),
            vec!["dashboard", "student"]
        );
    }

    #[test]
    fn test_signed_out_has_no_areas() {
        assert!(granted(&AuthState::SignedOut).is_empty());
    }
}
