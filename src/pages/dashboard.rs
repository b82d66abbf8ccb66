//! Dashboard landing page for signed-in users.

use leptos::prelude::*;

use crate::services::auth::AuthService;
use crate::services::user::UserService;

/// Dashboard page — greets the current user and lists granted roles.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = AuthService::from_context();
    let user = UserService::from_context();

    let greeting = move || {
        user.current_user()
            .map_or_else(|| "Welcome".to_owned(), |p| format!("Welcome, {}", p.name))
    };

    let roles = move || auth.roles().join(", ");

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>
            <p class="dashboard-page__roles">{move || format!("Roles: {}", roles())}</p>
            <Show when=move || auth.has_role("admin")>
                <p class="dashboard-page__admin">"Administrator tools are enabled."</p>
            </Show>
        </div>
    }
}
