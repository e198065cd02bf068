//! Session gate for views that require a signed-in user.
//!
//! The gate starts in [`SessionState::Checking`] and is driven only by identity
//! notifications. Each notification yields a [`GateAction`] for the view to
//! carry out: keep showing the loader, redirect to the sign-in page, or load
//! the user's collections (once per session).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Route of the sign-in entry point.
pub const SIGN_IN_PATH: &str = "/auth";

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    /// Stable opaque id; scopes every persisted key.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Checking,
    Authenticated(IdentityUser),
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Nothing to do; keep rendering the current state.
    None,
    /// Leave the protected view for the sign-in page.
    Redirect(&'static str),
    /// Load the collections of this user (first notification of the session).
    Initialize(IdentityUser),
    /// Same user re-announced (e.g. display name changed); refresh the profile only.
    Refresh(IdentityUser),
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    state: SessionState,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self {
            state: SessionState::Checking,
        }
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.state, SessionState::Checking)
    }

    pub fn user(&self) -> Option<&IdentityUser> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Feeds one identity notification through the gate.
    ///
    /// Once the gate has gone anonymous the redirect is already under way and
    /// later notifications are ignored.
    pub fn on_identity(&mut self, user: Option<IdentityUser>) -> GateAction {
        if self.state == SessionState::Anonymous {
            return GateAction::None;
        }

        let Some(user) = user else {
            self.state = SessionState::Anonymous;
            return GateAction::Redirect(SIGN_IN_PATH);
        };

        let same_user = self.user().is_some_and(|current| current.uid == user.uid);
        self.state = SessionState::Authenticated(user.clone());
        if same_user {
            GateAction::Refresh(user)
        } else {
            GateAction::Initialize(user)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(uid: &str) -> IdentityUser {
        IdentityUser {
            uid: uid.to_string(),
            email: None,
            display_name: None,
            photo_url: None,
            created_at: None,
        }
    }

    #[test]
    fn starts_checking() {
        let gate = SessionGate::new();
        assert!(gate.is_checking());
        assert_eq!(gate.user(), None);
    }

    #[test]
    fn anonymous_redirects_to_sign_in() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.on_identity(None), GateAction::Redirect("/auth"));
        assert_eq!(gate.state(), &SessionState::Anonymous);
    }

    #[test]
    fn authenticated_initializes_once_per_session() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.on_identity(Some(user("a"))), GateAction::Initialize(user("a")));
        assert_eq!(gate.on_identity(Some(user("a"))), GateAction::Refresh(user("a")));
        assert_eq!(gate.user().map(|u| u.uid.as_str()), Some("a"));
    }

    #[test]
    fn switching_users_initializes_again() {
        let mut gate = SessionGate::new();
        gate.on_identity(Some(user("a")));
        assert_eq!(gate.on_identity(Some(user("b"))), GateAction::Initialize(user("b")));
    }

    #[test]
    fn sign_out_redirects_and_later_notifications_are_ignored() {
        let mut gate = SessionGate::new();
        gate.on_identity(Some(user("a")));
        assert_eq!(gate.on_identity(None), GateAction::Redirect("/auth"));
        assert_eq!(gate.on_identity(Some(user("a"))), GateAction::None);
        assert_eq!(gate.state(), &SessionState::Anonymous);
    }
}
