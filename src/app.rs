//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::nav_bar::NavBar;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage};
use crate::router::guard::AccessPolicy;
use crate::state::{auth::AuthState, user::UserState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the state containers before anything that resolves them,
/// provides them via context, and sets up client-side routing with the
/// static route table's guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Containers are created here, ahead of every service resolution.
    let auth = RwSignal::new(AuthState::default());
    let user = RwSignal::new(UserState::default());

    provide_context(auth);
    provide_context(user);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Portal"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <Guarded policy=AccessPolicy::RequiresGuest>
                                <LoginPage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Guarded policy=AccessPolicy::RequiresAuth>
                                <DashboardPage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <Guarded policy=AccessPolicy::RequiresAuth>
                                <ProfilePage/>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// The root path renders nothing and applies the route table's static
/// redirect; the destination's own guard then re-evaluates.
#[component]
fn HomeRedirect() -> impl IntoView {
    let navigate = leptos_router::hooks::use_navigate();

    Effect::new(move || {
        if let Some(target) = crate::router::route_for("/").and_then(|route| route.redirect_to) {
            navigate(target, leptos_router::NavigateOptions::default());
        }
    });
}
