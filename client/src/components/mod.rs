//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the icebreaker page from values passed in by
//! the page, which owns the form state.

pub mod error_banner;
pub mod result_card;
