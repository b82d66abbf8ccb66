use super::*;

// =============================================================
// Route table shape
// =============================================================

#[test]
fn table_lists_the_four_routes() {
    let paths: Vec<&str> = ROUTES.iter().map(|route| route.path).collect();
    assert_eq!(paths, vec!["/", "/login", "/dashboard", "/profile"]);
}

#[test]
fn root_route_redirects_to_dashboard() {
    let root = route_for("/").expect("root route");
    assert_eq!(root.redirect_to, Some("/dashboard"));
    assert_eq!(root.policy, AccessPolicy::Public);
}

#[test]
fn route_names_match_paths() {
    assert_eq!(route_for("/login").expect("login").name, "login");
    assert_eq!(route_for("/dashboard").expect("dashboard").name, "dashboard");
    assert_eq!(route_for("/profile").expect("profile").name, "profile");
}

#[test]
fn login_is_guest_only_and_the_rest_protected() {
    assert_eq!(policy_for("/login"), AccessPolicy::RequiresGuest);
    assert_eq!(policy_for("/dashboard"), AccessPolicy::RequiresAuth);
    assert_eq!(policy_for("/profile"), AccessPolicy::RequiresAuth);
}

#[test]
fn unknown_paths_are_public() {
    assert!(route_for("/missing").is_none());
    assert_eq!(policy_for("/missing"), AccessPolicy::Public);
}

// =============================================================
// resolve: navigation scenarios
// =============================================================

#[test]
fn guest_visiting_dashboard_lands_on_login() {
    assert_eq!(resolve("/dashboard", false), Some("/login"));
}

#[test]
fn authenticated_visit_to_login_lands_on_dashboard() {
    assert_eq!(resolve("/login", true), Some("/dashboard"));
}

#[test]
fn authenticated_visit_to_profile_proceeds() {
    assert_eq!(resolve("/profile", true), None);
}

#[test]
fn guest_visit_to_login_proceeds() {
    assert_eq!(resolve("/login", false), None);
}

#[test]
fn root_redirect_chains_through_the_dashboard_guard() {
    // Signed in: static redirect only.
    assert_eq!(resolve("/", true), Some("/dashboard"));
    // Signed out: static redirect, then the dashboard guard re-targets.
    assert_eq!(resolve("/", false), Some("/login"));
}

#[test]
fn unknown_paths_resolve_in_place() {
    assert_eq!(resolve("/missing", false), None);
    assert_eq!(resolve("/missing", true), None);
}
