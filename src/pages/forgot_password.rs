//! Password reset request page.

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;

/// Asks for an email address and requests a reset mail.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        if email.get().trim().is_empty() {
            error.set(Some("Please enter your email address.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let address = email.get().trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::forgot_password(&address).await {
                    Ok(()) => {
                        message.set(Some("Password reset link sent to your email.".to_owned()));
                        error.set(None);
                    }
                    Err(e) => {
                        leptos::logging::warn!("password reset request failed: {e}");
                        error.set(Some("Error sending reset link.".to_owned()));
                    }
                }
            });
        }
    });

    view! {
        <div class="forgot-page">
            <h3>"Forgot Password"</h3>
            <AlertBanner message=message/>
            <AlertBanner message=error error=true/>
            <label class="field">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Send reset link"
            </button>
            <a href="/">"Back to sign in"</a>
        </div>
    }
}
