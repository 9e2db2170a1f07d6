//! Card showing a generated icebreaker with its source and company summary.

#[cfg(test)]
#[path = "result_card_test.rs"]
mod result_card_test;

use leptos::prelude::*;

use crate::net::types::IcebreakerResult;

pub const ICEBREAKER_LABEL: &str = "Icebreaker";
pub const SOURCE_LABEL: &str = "Source";
pub const SUMMARY_LABEL: &str = "Company Summary";

/// Labeled sections to render, in order. The icebreaker is always present;
/// source and summary only when non-empty.
pub fn result_sections(result: &IcebreakerResult) -> Vec<(&'static str, String)> {
    let mut sections = vec![(ICEBREAKER_LABEL, result.icebreaker.clone())];
    if let Some(source) = result.source_text() {
        sections.push((SOURCE_LABEL, source.to_owned()));
    }
    if let Some(summary) = result.summary_text() {
        sections.push((SUMMARY_LABEL, summary.to_owned()));
    }
    sections
}

#[component]
pub fn ResultCard(result: IcebreakerResult) -> impl IntoView {
    let sections = result_sections(&result)
        .into_iter()
        .map(|(label, text)| {
            let text_class = if label == ICEBREAKER_LABEL {
                "result-card__text result-card__text--primary"
            } else {
                "result-card__text"
            };
            view! {
                <div class="result-card__section">
                    <h3 class="result-card__label">{label}</h3>
                    <p class=text_class>{text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="result-card">
            <header class="result-card__header">
                <h2 class="result-card__title">"Your Email Icebreaker"</h2>
                <p class="result-card__description">"Generated based on recent company information"</p>
            </header>
            <div class="result-card__content">{sections}</div>
        </section>
    }
}
