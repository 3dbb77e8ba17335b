//! Faculty profile view.

use leptos::prelude::*;

use crate::state::auth::{AuthState, TokenAccessor};

/// Shows the signed-in faculty member's profile, fetched on mount.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tokens = expect_context::<TokenAccessor>();
    let requested = RwSignal::new(false);

    Effect::new({
        let tokens = tokens.clone();
        move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            auth.update(|a| a.loading = true);

            #[cfg(feature = "hydrate")]
            {
                let tokens = tokens.clone();
                leptos::task::spawn_local(async move {
                    let profile = crate::net::api::fetch_profile(&tokens).await;
                    auth.update(|a| {
                        a.profile = profile;
                        a.loading = false;
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &tokens;
            }
        }
    });

    view! {
        <div class="profile-page">
            <h3>"Faculty Profile"</h3>
            {move || {
                let state = auth.get();
                if state.loading {
                    view! { <p>"Loading profile..."</p> }.into_any()
                } else if let Some(profile) = state.profile {
                    view! {
                        <dl class="profile-page__fields">
                            <dt>"Name"</dt>
                            <dd>{profile.name}</dd>
                            <dt>"Email"</dt>
                            <dd>{profile.email}</dd>
                            <dt>"Department"</dt>
                            <dd>{profile.department}</dd>
                        </dl>
                    }
                    .into_any()
                } else {
                    view! { <p>"Profile unavailable. Please sign in again."</p> }.into_any()
                }
            }}
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
