//! Icebreaker generator page: company form, error banner, and result card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Form state lives in a context-provided `RwSignal` so the
//! loading flag re-renders the controls while the webhook call is pending.
//! Submission runs in the browser only, through `submit_form`; SSR renders
//! the idle form.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::result_card::ResultCard;
#[cfg(feature = "hydrate")]
use crate::net::config::ApiConfig;
#[cfg(feature = "hydrate")]
use crate::state::form::submit_form;
use crate::state::form::FormState;

/// Submit button caption for the current loading state.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Generating..." } else { "Generate" }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    #[cfg(feature = "hydrate")]
    let config = expect_context::<ApiConfig>();

    let loading = move || form.with(|state| state.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let api = crate::net::api::IcebreakerApi::new(config.clone(), crate::net::api::BrowserTransport);
            leptos::task::spawn_local(async move {
                match submit_form(&form, &api).await {
                    Some(Ok(())) => log::info!("icebreaker generated"),
                    Some(Err(e)) => log::warn!("icebreaker request failed [{}]: {e}", e.code()),
                    None => {}
                }
            });
        }
    };

    let error = Signal::derive(move || form.with(|state| state.error.clone()));
    let result = move || {
        form.with(|state| state.result.clone())
            .map(|result| view! { <ResultCard result=result/> })
    };

    view! {
        <main class="home-page">
            <div class="home-page__inner">
                <header class="home-header">
                    <h1 class="home-header__title">"Generate an email icebreaker in seconds"</h1>
                    <p class="home-header__subtitle">
                        "Fill in all the fields and generate a unique email icebreaker"
                    </p>
                </header>

                <form class="icebreaker-form" on:submit=on_submit>
                    <div class="icebreaker-form__fields">
                        <div class="form-field">
                            <label class="form-field__label" for="company-name">"Company name"</label>
                            <input
                                id="company-name"
                                class="form-field__input"
                                type="text"
                                placeholder="Enter company name"
                                required
                                prop:value=move || form.with(|state| state.company_name.clone())
                                on:input=move |ev| form.update(|state| state.set_company_name(event_target_value(&ev)))
                                disabled=loading
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-field__label" for="website-url">"Website URL"</label>
                            <input
                                id="website-url"
                                class="form-field__input"
                                type="url"
                                placeholder="https://example.com"
                                required
                                prop:value=move || form.with(|state| state.website_url.clone())
                                on:input=move |ev| form.update(|state| state.set_website_url(event_target_value(&ev)))
                                disabled=loading
                            />
                        </div>
                    </div>

                    <ErrorBanner message=error/>

                    <div class="icebreaker-form__actions">
                        <button class="submit-button" type="submit" disabled=loading>
                            {move || submit_label(loading())}
                        </button>
                    </div>
                </form>

                {result}
            </div>
        </main>
    }
}
