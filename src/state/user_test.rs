use super::*;

fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

// =============================================================
// UserState defaults
// =============================================================

#[test]
fn user_state_default_holds_no_profile() {
    let state = UserState::default();
    assert!(state.profile.is_none());
}

// =============================================================
// set_user / clear_user
// =============================================================

#[test]
fn set_user_stores_the_profile() {
    let mut state = UserState::default();
    state.set_user(profile());
    assert_eq!(state.profile, Some(profile()));
}

#[test]
fn set_user_replaces_wholesale() {
    let mut state = UserState::default();
    state.set_user(profile());
    let replacement = UserProfile {
        id: "u-2".to_owned(),
        name: "Grace".to_owned(),
        email: "grace@example.com".to_owned(),
    };
    state.set_user(replacement.clone());
    assert_eq!(state.profile, Some(replacement));
}

#[test]
fn clear_user_is_idempotent() {
    let mut state = UserState::default();
    state.set_user(profile());
    state.clear_user();
    assert!(state.profile.is_none());
    state.clear_user();
    assert!(state.profile.is_none());
}
