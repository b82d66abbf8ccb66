#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state: session token, granted roles, and the login flag.
///
/// `logged_in` is true exactly between a `login` call and the next
/// `logout`; `token` and `roles` are meaningful only while it is true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
    pub roles: Vec<String>,
    pub logged_in: bool,
}

impl AuthState {
    /// Record a sign-in, replacing any prior token and role set wholesale.
    ///
    /// Inputs are trusted as given; no format validation happens here.
    pub fn login(&mut self, token: String, roles: Vec<String>) {
        self.token = token;
        self.roles = roles;
        self.logged_in = true;
    }

    /// Reset to the signed-out state: empty token, no roles, flag cleared.
    /// Calling while already signed out is a no-op in effect.
    pub fn logout(&mut self) {
        self.token = String::new();
        self.roles = Vec::new();
        self.logged_in = false;
    }
}
