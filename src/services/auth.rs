#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Facade over the auth state container.
///
/// Holds the container's signal rather than resolving a hidden global, so
/// tests can inject a private container while the app shares the one
/// provided by `App`.
#[derive(Clone, Copy)]
pub struct AuthService {
    state: RwSignal<AuthState>,
}

impl AuthService {
    /// Build a service over an explicitly supplied container.
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self { state }
    }

    /// Resolve the app-wide container from context.
    ///
    /// Call below `App`, which provides the container signal before any
    /// page or component renders.
    pub fn from_context() -> Self {
        Self::new(expect_context::<RwSignal<AuthState>>())
    }

    /// Sign in with the given session token and role set.
    pub fn login(&self, token: String, roles: Vec<String>) {
        log::info!("auth: login with {} role(s)", roles.len());
        self.state.update(|auth| auth.login(token, roles));
    }

    /// Sign out, clearing the token and roles.
    pub fn logout(&self) {
        log::info!("auth: logout");
        self.state.update(AuthState::logout);
    }

    /// Whether a user is currently signed in.
    ///
    /// Reads through the signal, so callers in a reactive scope re-run
    /// when the login status changes.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|auth| auth.logged_in)
    }

    /// Whether the current role set contains `role`, matched exactly.
    /// Always false while signed out, since the role set is then empty.
    pub fn has_role(&self, role: &str) -> bool {
        self.state.with(|auth| auth.roles.iter().any(|r| r == role))
    }

    /// Current session token; empty while signed out.
    pub fn token(&self) -> String {
        self.state.with(|auth| auth.token.clone())
    }

    /// Current role set, cloned out of the container.
    pub fn roles(&self) -> Vec<String> {
        self.state.with(|auth| auth.roles.clone())
    }
}
