//! Wire DTOs for the icebreaker webhook.
//!
//! DESIGN
//! ======
//! The response is consumed as-is without schema validation: missing or
//! `null` fields decode to empty strings so a sparse payload still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// JSON body posted to the webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcebreakerRequest {
    /// Trimmed company name.
    pub company_name: String,
    /// Trimmed website URL.
    pub website_url: String,
}

/// Generated icebreaker returned by the webhook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcebreakerResult {
    /// Opening line for the outreach email. Always rendered.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub icebreaker: String,
    /// Where the icebreaker's hook was found (article, blog post, etc.).
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub source: String,
    /// Short description of the company.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub company_summary: String,
}

impl IcebreakerResult {
    /// Source text, when there is anything to show.
    pub fn source_text(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    /// Company summary text, when there is anything to show.
    pub fn summary_text(&self) -> Option<&str> {
        non_empty(&self.company_summary)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
