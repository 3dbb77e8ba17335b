//! Faculty dashboard hosting the student record manager.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::manage_students::ManageStudents;
use crate::state::auth::TokenAccessor;

/// Dashboard page. Redirects to the login page when no session token is
/// present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let tokens = expect_context::<TokenAccessor>();
    let navigate = use_navigate();

    Effect::new({
        let tokens = tokens.clone();
        let navigate = navigate.clone();
        move || {
            if tokens.token().is_none() {
                navigate("/", NavigateOptions::default());
            }
        }
    });

    let on_logout = move |_| {
        crate::util::session::clear_token();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Faculty Dashboard"</h1>
                <nav class="dashboard-page__nav">
                    <a href="/profile">"Profile"</a>
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </nav>
            </header>

            <ManageStudents/>
        </div>
    }
}
