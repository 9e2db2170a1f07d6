//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::{API_URL_META_NAME, ApiConfig};
use crate::pages::home::HomePage;
use crate::state::form::FormState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Publishes the configured API base URL in a `<meta>` tag so the hydrated
/// app can pick it up.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_url_meta = api
        .base_url()
        .map(|url| view! { <meta name=API_URL_META_NAME content=url.to_owned()/> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {api_url_meta}
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
/// Provides the API configuration and form state to the page. The server
/// supplies `ApiConfig` through context during SSR; in the browser it is
/// read back from the shell's `<meta>` tag.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(detect_api_config);
    provide_context(api);
    provide_context(RwSignal::new(FormState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/icebreaker.css"/>
        <Title text="Icebreaker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn detect_api_config() -> ApiConfig {
    let config = ApiConfig::from_document();
    if !config.is_configured() {
        log::warn!("API URL is not configured; submissions will fail");
    }
    config
}

#[cfg(not(feature = "hydrate"))]
fn detect_api_config() -> ApiConfig {
    ApiConfig::unconfigured()
}
