//! Route guard wrapper applying an access policy to a page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::guard::{self, AccessPolicy, GuardDecision};
use crate::services::auth::AuthService;

/// Renders `children` only while the route's policy admits the current
/// auth status; otherwise navigates to the guard's redirect target.
///
/// The decision reads live auth state and re-runs whenever it changes, so
/// signing out on a protected page bounces to the login page immediately,
/// and signing in on the login page moves to the dashboard.
#[component]
pub fn Guarded(policy: AccessPolicy, children: ChildrenFn) -> impl IntoView {
    let auth = AuthService::from_context();
    let navigate = use_navigate();

    let decision = move || guard::evaluate(policy, auth.is_authenticated());

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision() {
            log::debug!("guard: redirecting to {target}");
            navigate(target, NavigateOptions::default());
        }
    });

    move || match decision() {
        GuardDecision::Proceed => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
