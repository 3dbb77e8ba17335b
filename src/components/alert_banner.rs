//! Dismissable-looking success/error banner above a form.

use leptos::prelude::*;

/// Renders nothing while `message` is `None`, otherwise a success banner,
/// or an error banner when `error` is set.
#[component]
pub fn AlertBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error { "alert alert--error" } else { "alert alert--success" };

    view! {
        <Show when=move || message.get().is_some()>
            <div class=class role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
