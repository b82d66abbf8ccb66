//! Route table and navigation resolution.
//!
//! DESIGN
//! ======
//! The route table is static data and `guard::evaluate` is a pure function
//! of (policy, auth status), so every redirect rule is testable without a
//! browser. The `Guarded` component applies the same rules reactively while
//! rendering, reading live auth state on each navigation.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod guard;

use guard::{AccessPolicy, DASHBOARD_PATH, GuardDecision};

/// One entry in the static route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub policy: AccessPolicy,
    /// Static redirect target; such a route renders nothing itself.
    pub redirect_to: Option<&'static str>,
}

/// The application's route table.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        name: "home",
        policy: AccessPolicy::Public,
        redirect_to: Some(DASHBOARD_PATH),
    },
    RouteDef {
        path: "/login",
        name: "login",
        policy: AccessPolicy::RequiresGuest,
        redirect_to: None,
    },
    RouteDef {
        path: "/dashboard",
        name: "dashboard",
        policy: AccessPolicy::RequiresAuth,
        redirect_to: None,
    },
    RouteDef {
        path: "/profile",
        name: "profile",
        policy: AccessPolicy::RequiresAuth,
        redirect_to: None,
    },
];

/// Look up a route by exact path.
pub fn route_for(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Access policy for `path`. Unknown paths are public so the router's
/// fallback can render.
pub fn policy_for(path: &str) -> AccessPolicy {
    route_for(path).map_or(AccessPolicy::Public, |route| route.policy)
}

/// Resolve a navigation to its final destination: follow the static
/// redirect (if any), then the guard, repeating until a path proceeds.
///
/// Returns `Some(final_path)` when the navigation was re-targeted, `None`
/// when the requested path proceeds as-is. The hop cap only protects
/// against a future cyclic table; the current one terminates in at most
/// two hops (`/` to `/dashboard` to `/login`).
pub fn resolve(path: &str, authenticated: bool) -> Option<&'static str> {
    let mut destination = None;
    let mut cursor = path;

    for _ in 0..=ROUTES.len() {
        let step = route_for(cursor).and_then(|route| {
            route
                .redirect_to
                .or_else(|| match guard::evaluate(route.policy, authenticated) {
                    GuardDecision::Redirect(target) => Some(target),
                    GuardDecision::Proceed => None,
                })
        });

        match step {
            Some(next) if next != cursor => {
                destination = Some(next);
                cursor = next;
            }
            _ => break,
        }
    }

    destination
}
