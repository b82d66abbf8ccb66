#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;

use crate::state::user::{UserProfile, UserState};

/// Facade over the user-profile state container.
///
/// Same injection pattern as `AuthService`: explicit container for tests,
/// context resolution for the app-wide instance.
#[derive(Clone, Copy)]
pub struct UserService {
    state: RwSignal<UserState>,
}

impl UserService {
    /// Build a service over an explicitly supplied container.
    pub fn new(state: RwSignal<UserState>) -> Self {
        Self { state }
    }

    /// Resolve the app-wide container from context.
    pub fn from_context() -> Self {
        Self::new(expect_context::<RwSignal<UserState>>())
    }

    /// Replace the held profile wholesale.
    pub fn set_user(&self, profile: UserProfile) {
        self.state.update(|user| user.set_user(profile));
    }

    /// Replace only the profile's name, leaving other fields unchanged.
    ///
    /// A no-op when no profile is held: nothing is created and the
    /// container is not touched.
    pub fn update_name(&self, name: String) {
        let Some(mut profile) = self.state.with_untracked(|user| user.profile.clone()) else {
            log::debug!("user: update_name with no current profile, ignoring");
            return;
        };
        profile.name = name;
        self.set_user(profile);
    }

    /// Replace only the profile's email, leaving other fields unchanged.
    ///
    /// A no-op when no profile is held.
    pub fn update_email(&self, email: String) {
        let Some(mut profile) = self.state.with_untracked(|user| user.profile.clone()) else {
            log::debug!("user: update_email with no current profile, ignoring");
            return;
        };
        profile.email = email;
        self.set_user(profile);
    }

    /// Drop the held profile. Idempotent.
    pub fn clear_user(&self) {
        self.state.update(UserState::clear_user);
    }

    /// The held profile, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.with(|user| user.profile.clone())
    }
}
