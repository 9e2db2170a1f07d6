//! Inline error banner shown under the form inputs.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <p class="error-banner__text">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
