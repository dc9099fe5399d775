//! Application context
//!
//! Bundles the store, auth session, team workspace, and theme preference
//! into one explicitly constructed value that callers pass by reference.
//! A context built with `uninitialized` has no store; reaching for it
//! returns `StoreError::MissingProvider`, which callers treat as fatal.

use crate::auth::{Auth, Role, User};
use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::store::Store;
use crate::team::{Message, Resource, ResourceDraft, TeamWorkspace};
use crate::theme::ThemePreference;

/// Everything a front end needs, wired from one configuration
pub struct AppContext {
    config: Config,
    store: Option<Store>,
    auth: Auth,
    team: TeamWorkspace,
    theme: ThemePreference,
}

impl AppContext {
    /// Build a context with seeded data and the persisted theme
    pub fn init(config: Config) -> Self {
        let store = Store::seeded(config.seed);
        let theme = ThemePreference::load(config.theme_path());
        Self {
            auth: Auth::new(config.login_delay()),
            store: Some(store),
            team: TeamWorkspace::seeded(),
            theme,
            config,
        }
    }

    /// Build a context whose store was never provided
    pub fn uninitialized(config: Config) -> Self {
        Self {
            auth: Auth::new(config.login_delay()),
            store: None,
            team: TeamWorkspace::seeded(),
            theme: ThemePreference::in_memory(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The domain store
    pub fn store(&self) -> StoreResult<&Store> {
        self.store.as_ref().ok_or(StoreError::MissingProvider("Store"))
    }

    /// Mutable access to the domain store
    pub fn store_mut(&mut self) -> StoreResult<&mut Store> {
        self.store.as_mut().ok_or(StoreError::MissingProvider("Store"))
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut Auth {
        &mut self.auth
    }

    /// Sign in with the given role, waiting out the simulated delay
    pub async fn login(&mut self, role: Role) -> User {
        self.auth.login(role).await
    }

    pub fn team(&self) -> &TeamWorkspace {
        &self.team
    }

    /// Post to the team chat as the signed-in user
    pub fn send_team_message(&mut self, text: impl Into<String>) -> &Message {
        self.team.send_message(text, self.auth.user())
    }

    /// Share a resource as the signed-in user
    pub fn share_team_resource(&mut self, draft: ResourceDraft) -> &Resource {
        self.team.add_resource(draft, self.auth.user())
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemePreference {
        &mut self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentStatus;
    use crate::theme::Theme;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            login_delay_ms: 0,
            ..Config::default()
        }
    }

    #[test]
    fn test_init_provides_seeded_store() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::init(test_config(&temp_dir));

        let store = ctx.store().unwrap();
        assert_eq!(store.students().len(), 20);
        assert_eq!(ctx.theme().theme(), Theme::Light);
        assert_eq!(ctx.theme().path(), Some(ctx.config().theme_path().as_path()));
    }

    #[test]
    fn test_uninitialized_store_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = AppContext::uninitialized(test_config(&temp_dir));

        assert_eq!(
            ctx.store().unwrap_err(),
            StoreError::MissingProvider("Store")
        );
        assert!(ctx.store_mut().is_err());
    }

    #[test]
    fn test_store_mutations_through_context() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = AppContext::init(test_config(&temp_dir));

        ctx.store_mut()
            .unwrap()
            .update_student_status("ST-001", StudentStatus::Approved)
            .unwrap();

        assert_eq!(
            ctx.store().unwrap().student("ST-001").unwrap().status,
            StudentStatus::Approved
        );
    }

    #[test]
    fn test_theme_survives_new_context() {
        let temp_dir = TempDir::new().unwrap();

        let mut ctx = AppContext::init(test_config(&temp_dir));
        ctx.theme_mut().toggle().unwrap();

        let reopened = AppContext::init(test_config(&temp_dir));
        assert_eq!(reopened.theme().theme(), Theme::Dark);
        // Everything else starts from seed data again
        assert_eq!(reopened.store().unwrap().revision(), 0);
    }

    #[tokio::test]
    async fn test_team_message_uses_session_user() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = AppContext::init(test_config(&temp_dir));

        assert_eq!(ctx.send_team_message("hello").sender, "Me");

        ctx.login(Role::Admin).await;
        assert_eq!(ctx.send_team_message("hi again").sender, "Admin User");
        assert_eq!(ctx.team().messages().len(), 4);
    }

    #[tokio::test]
    async fn test_shared_resource_uses_session_user() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = AppContext::init(test_config(&temp_dir));

        ctx.login(Role::Student).await;
        let resource = ctx.share_team_resource(ResourceDraft {
            name: Some("Poster.pdf".to_string()),
            ..ResourceDraft::default()
        });

        assert_eq!(resource.uploaded_by, "Student User");
        assert_eq!(resource.kind, "unknown");
        assert_eq!(ctx.team().resources().len(), 3);
    }

    #[tokio::test]
    async fn test_logout_reverts_to_anonymous_author() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = AppContext::init(test_config(&temp_dir));

        ctx.login(Role::Student).await;
        ctx.auth_mut().logout();

        assert!(ctx.auth().user().is_none());
        assert_eq!(ctx.send_team_message("still here").sender, "Me");
    }
}
