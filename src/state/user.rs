#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

/// A user profile as shown and edited in the portal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// User-profile state holding at most one profile.
///
/// Profile presence is deliberately independent of the auth state:
/// signing out does not clear the profile held here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserState {
    pub profile: Option<UserProfile>,
}

impl UserState {
    /// Replace the held profile wholesale.
    pub fn set_user(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Drop the held profile. Idempotent.
    pub fn clear_user(&mut self) {
        self.profile = None;
    }
}
