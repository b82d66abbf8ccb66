#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Where unauthenticated visitors to protected routes are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where signed-in visitors to guest-only routes are sent.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Access requirement attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Anyone may visit.
    #[default]
    Public,
    /// Signed-in users only; everyone else goes to the login page.
    RequiresAuth,
    /// Signed-out users only; signed-in users go to the dashboard.
    RequiresGuest,
}

/// Outcome of the guard check for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation continues to the requested route.
    Proceed,
    /// Navigation is re-targeted to the given path.
    Redirect(&'static str),
}

/// Decide whether navigation to a route with `policy` may proceed given the
/// authentication status at the moment of navigation.
pub fn evaluate(policy: AccessPolicy, authenticated: bool) -> GuardDecision {
    match (policy, authenticated) {
        (AccessPolicy::RequiresAuth, false) => GuardDecision::Redirect(LOGIN_PATH),
        (AccessPolicy::RequiresGuest, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        _ => GuardDecision::Proceed,
    }
}
