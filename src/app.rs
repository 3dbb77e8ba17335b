//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage,
    profile::ProfilePage,
};
use crate::state::auth::{AuthState, TokenAccessor};
use crate::state::students::StudentsState;

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
/// Provides the token accessor and shared state contexts, and sets up
/// client-side routing. The route surface matches the portal: login at the
/// root, password reset, faculty profile, and the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One token accessor for the whole app; the network layer reads the
    // current token through it on every request.
    let tokens = TokenAccessor::from_session();
    let auth = RwSignal::new(AuthState::default());
    let students = RwSignal::new(StudentsState::default());

    provide_context(tokens);
    provide_context(auth);
    provide_context(students);

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-admin.css"/>
        <Title text="Campus Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("forgotpassword") view=ForgotPasswordPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
