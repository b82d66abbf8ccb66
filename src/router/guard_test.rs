use super::*;

// =============================================================
// evaluate: full (policy, auth) matrix
// =============================================================

#[test]
fn public_routes_always_proceed() {
    assert_eq!(evaluate(AccessPolicy::Public, false), GuardDecision::Proceed);
    assert_eq!(evaluate(AccessPolicy::Public, true), GuardDecision::Proceed);
}

#[test]
fn protected_route_redirects_guests_to_login() {
    assert_eq!(
        evaluate(AccessPolicy::RequiresAuth, false),
        GuardDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn protected_route_admits_authenticated_users() {
    assert_eq!(
        evaluate(AccessPolicy::RequiresAuth, true),
        GuardDecision::Proceed
    );
}

#[test]
fn guest_route_redirects_authenticated_users_to_dashboard() {
    assert_eq!(
        evaluate(AccessPolicy::RequiresGuest, true),
        GuardDecision::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn guest_route_admits_guests() {
    assert_eq!(
        evaluate(AccessPolicy::RequiresGuest, false),
        GuardDecision::Proceed
    );
}

// =============================================================
// policy defaults
// =============================================================

#[test]
fn default_policy_is_public() {
    assert_eq!(AccessPolicy::default(), AccessPolicy::Public);
}
