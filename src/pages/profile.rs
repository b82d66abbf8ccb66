//! Profile page for viewing and editing the current user.

use leptos::prelude::*;

use crate::services::user::UserService;

/// Profile page — shows the held profile and edits it one field at a time
/// through the user service, or clears it entirely.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let user = UserService::from_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_save_name = move |_| user.update_name(name.get());
    let on_save_email = move |_| user.update_email(email.get());
    let on_clear = move |_| user.clear_user();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || match user.current_user() {
                Some(profile) => view! {
                    <dl class="profile-page__details">
                        <dt>"Id"</dt>
                        <dd>{profile.id}</dd>
                        <dt>"Name"</dt>
                        <dd>{profile.name}</dd>
                        <dt>"Email"</dt>
                        <dd>{profile.email}</dd>
                    </dl>
                }
                    .into_any(),
                None => view! { <p class="profile-page__empty">"No profile on record."</p> }
                    .into_any(),
            }}

            <div class="profile-page__editor">
                <input
                    type="text"
                    placeholder="New name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button on:click=on_save_name>"Update name"</button>
            </div>

            <div class="profile-page__editor">
                <input
                    type="email"
                    placeholder="New email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button on:click=on_save_email>"Update email"</button>
            </div>

            <button class="profile-page__clear" on:click=on_clear>
                "Clear profile"
            </button>
        </div>
    }
}
