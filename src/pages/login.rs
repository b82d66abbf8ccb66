//! Guest sign-in page seeding the session and profile.

use leptos::prelude::*;

use crate::services::auth::AuthService;
use crate::services::user::UserService;
use crate::state::user::UserProfile;

/// Role granted to every sign-in.
const MEMBER_ROLE: &str = "member";

/// Login page — collects a display name and email, then signs in with a
/// freshly minted session token and seeds the user profile. The guest
/// guard on this route then moves the now-authenticated user onward.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = AuthService::from_context();
    let user = UserService::from_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let display_name = name.get();
        if display_name.trim().is_empty() {
            return;
        }

        auth.login(
            uuid::Uuid::new_v4().to_string(),
            vec![MEMBER_ROLE.to_owned()],
        );
        user.set_user(UserProfile {
            id: uuid::Uuid::new_v4().to_string(),
            name: display_name,
            email: email.get(),
        });
    };

    view! {
        <div class="login-page">
            <h1>"Portal"</h1>
            <p>"Sign in to continue"</p>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit" class="login-page__submit">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
