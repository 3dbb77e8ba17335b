//! Login page: email/password form against `/api/auth/login`.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::alert_banner::AlertBanner;
#[cfg(feature = "hydrate")]
use crate::net::types::Credentials;

/// Login form. On success the returned bearer token is stored in session
/// storage and the user lands on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if email.get().trim().is_empty() || password.get().is_empty() {
            error.set(Some("Please enter email and password.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let credentials = Credentials {
                email: email.get().trim().to_owned(),
                password: password.get(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(token) => {
                        crate::util::session::store_token(&token);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some("Invalid email or password.".to_owned()));
                    }
                }
            });
        }
    });

    view! {
        <div class="login-page">
            <h1>"Campus Admin"</h1>
            <p>"Faculty sign in"</p>
            <AlertBanner message=error error=true/>
            <label class="field">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Sign in"
            </button>
            <a class="login-page__forgot" href="/forgotpassword">
                "Forgot password?"
            </a>
        </div>
    }
}
