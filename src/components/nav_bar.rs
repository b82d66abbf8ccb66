//! Top navigation bar reflecting authentication status.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::auth::AuthService;

/// Navigation bar showing portal links and a sign-out action while signed
/// in, or a login link for guests.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = AuthService::from_context();

    let on_logout = move |_| auth.logout();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Portal"</span>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <A href="/login">"Sign in"</A> }
            >
                <A href="/dashboard">"Dashboard"</A>
                <A href="/profile">"Profile"</A>
                <button class="nav-bar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
