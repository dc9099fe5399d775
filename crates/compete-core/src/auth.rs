//! Mocked authentication
//!
//! A session is signed out, waiting on a login, or signed in as one user.
//! `login` simulates network latency with a timer and always succeeds;
//! there is no credential check. `login_with_cancel` lets the caller abandon
//! a pending login, which puts the session back to signed out.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

use crate::error::StoreError;
use crate::ids::random_token;

/// Default simulated login latency
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(500);

/// Errors from the login flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Login was cancelled")]
    Cancelled,
}

/// What a signed-in user may do
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }

    /// Name shown for a user signed in with this role
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin User",
            Role::Student => "Student User",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            _ => Err(StoreError::InvalidValue {
                field: "role",
                value: s.to_string(),
            }),
        }
    }
}

/// The signed-in identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// Session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    SignedOut,
    Pending,
    SignedIn(User),
}

/// Outcome of a role check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    /// A login is still in flight
    Loading,
    /// Signed out, or signed in with a role that is not allowed
    Denied,
    Granted(&'a User),
}

/// Check whether the session may enter an area restricted to `allowed`
///
/// An empty `allowed` list admits any signed-in user.
pub fn authorize<'a>(state: &'a AuthState, allowed: &[Role]) -> Access<'a> {
    match state {
        AuthState::Pending => Access::Loading,
        AuthState::SignedOut => Access::Denied,
        AuthState::SignedIn(user) if allowed.is_empty() || allowed.contains(&user.role) => {
            Access::Granted(user)
        }
        AuthState::SignedIn(_) => Access::Denied,
    }
}

/// Handle for cancelling a pending login
///
/// Clones share the same cancellation flag.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once `cancel` has been called
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives in `self`, so the channel cannot close here
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Mocked authentication session
#[derive(Debug, Clone)]
pub struct Auth {
    state: AuthState,
    delay: Duration,
}

impl Default for Auth {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_DELAY)
    }
}

impl Auth {
    /// Signed-out session with the given simulated latency
    pub fn new(delay: Duration) -> Self {
        Self {
            state: AuthState::SignedOut,
            delay,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&User> {
        match self.state {
            AuthState::SignedIn(ref user) => Some(user),
            _ => None,
        }
    }

    /// Whether a login is in flight
    pub fn is_loading(&self) -> bool {
        self.state == AuthState::Pending
    }

    /// Sign in with the given role after the simulated delay
    ///
    /// Never fails. Replaces any existing session.
    pub async fn login(&mut self, role: Role) -> User {
        self.state = AuthState::Pending;
        tokio::time::sleep(self.delay).await;
        self.complete(role)
    }

    /// Like `login`, but gives up when `token` is cancelled first
    pub async fn login_with_cancel(
        &mut self,
        role: Role,
        token: &CancellationToken,
    ) -> Result<User, AuthError> {
        self.state = AuthState::Pending;
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => Ok(self.complete(role)),
            _ = token.cancelled() => {
                info!("Login as {} cancelled", role);
                self.state = AuthState::SignedOut;
                Err(AuthError::Cancelled)
            }
        }
    }

    fn complete(&mut self, role: Role) -> User {
        let user = User {
            id: random_token(),
            name: role.display_name().to_string(),
            role,
        };
        info!("Signed in as {} ({})", user.name, user.id);
        self.state = AuthState::SignedIn(user.clone());
        user
    }

    /// Clear the session
    pub fn logout(&mut self) {
        if let AuthState::SignedIn(ref user) = self.state {
            info!("Signed out {}", user.name);
        }
        self.state = AuthState::SignedOut;
    }

    /// Role check against the current session
    pub fn authorize(&self, allowed: &[Role]) -> Access<'_> {
        authorize(&self.state, allowed)
    }
}
