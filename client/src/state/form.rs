//! Icebreaker form state and submission controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page keeps a `RwSignal<FormState>` in context and hands it to
//! `submit_form`, which runs `begin_submit` / `finish_submit` around the
//! webhook call without holding the state across the await, so the loading
//! state is visible while the request is pending. `FormController` drives the
//! same function over a `RefCell` for callers that own the state outright.
//!
//! INVARIANTS
//! ==========
//! - `error` and `result` are never both set.
//! - `loading` is true only while exactly one request is outstanding.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::{Ref, RefCell};

use leptos::prelude::{RwSignal, Update};

use crate::net::api::{IcebreakerApi, SubmitError, WebhookTransport};
use crate::net::types::{IcebreakerRequest, IcebreakerResult};

/// Input problems caught before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Company name is required")]
    MissingCompanyName,

    #[error("Website URL is required")]
    MissingWebsiteUrl,

    #[error("Please enter a valid URL (e.g., https://example.com)")]
    InvalidWebsiteUrl,
}

/// True when `raw` parses as an absolute `http` or `https` URL.
///
/// `raw` is parsed as typed: the URL parser strips only leading and trailing
/// C0 controls and spaces, so other Unicode whitespace makes it invalid.
pub fn is_valid_website_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Check both inputs in order and build the trimmed request body.
///
/// # Errors
///
/// Returns the first failing check: company name, then URL presence, then
/// URL format.
pub fn validate_submission(company_name: &str, website_url: &str) -> Result<IcebreakerRequest, ValidationError> {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return Err(ValidationError::MissingCompanyName);
    }
    let trimmed_url = website_url.trim();
    if trimmed_url.is_empty() {
        return Err(ValidationError::MissingWebsiteUrl);
    }
    if !is_valid_website_url(website_url) {
        return Err(ValidationError::InvalidWebsiteUrl);
    }
    Ok(IcebreakerRequest { company_name: company_name.to_owned(), website_url: trimmed_url.to_owned() })
}

/// Everything the form renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub company_name: String,
    pub website_url: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<IcebreakerResult>,
}

impl FormState {
    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.company_name = value.into();
    }

    pub fn set_website_url(&mut self, value: impl Into<String>) {
        self.website_url = value.into();
    }

    /// Start a submission.
    ///
    /// Clears the previous error and result, validates, and on success
    /// enters the loading state and returns the request to send. Returns
    /// `None` when validation fails (the error is recorded) or when a
    /// request is already in flight (state is left untouched).
    pub fn begin_submit(&mut self) -> Option<IcebreakerRequest> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.result = None;

        match validate_submission(&self.company_name, &self.website_url) {
            Ok(request) => {
                self.loading = true;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Record the webhook outcome and leave the loading state.
    pub fn finish_submit(&mut self, outcome: Result<IcebreakerResult, SubmitError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.error = None;
                self.result = Some(result);
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Somewhere `FormState` lives and can be changed in short, separate steps.
pub trait FormStore {
    /// Apply `f` to the state. `None` when the state no longer exists.
    fn modify<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormStore for RwSignal<FormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormStore for RefCell<FormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Validate, call the webhook once, and store the outcome.
///
/// Returns `None` when no request was sent (invalid input or one already in
/// flight), otherwise whether the webhook call succeeded.
pub async fn submit_form<S, T>(store: &S, api: &IcebreakerApi<T>) -> Option<Result<(), SubmitError>>
where
    S: FormStore,
    T: WebhookTransport,
{
    let request = store.modify(FormState::begin_submit).flatten()?;
    let outcome = api.generate(&request).await;
    let summary = outcome.as_ref().map(|_| ()).map_err(Clone::clone);
    store.modify(|state| state.finish_submit(outcome));
    Some(summary)
}

/// Form state paired with the webhook client that serves it.
pub struct FormController<T> {
    state: RefCell<FormState>,
    api: IcebreakerApi<T>,
}

impl<T> FormController<T> {
    pub fn new(api: IcebreakerApi<T>) -> Self {
        Self { state: RefCell::new(FormState::default()), api }
    }

    pub fn state(&self) -> Ref<'_, FormState> {
        self.state.borrow()
    }

    pub fn api(&self) -> &IcebreakerApi<T> {
        &self.api
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.state.get_mut().set_company_name(value);
    }

    pub fn set_website_url(&mut self, value: impl Into<String>) {
        self.state.get_mut().set_website_url(value);
    }
}

impl<T: WebhookTransport> FormController<T> {
    /// Validate, call the webhook once, and store the outcome.
    pub async fn submit(&self) {
        submit_form(&self.state, &self.api).await;
    }
}
