//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State models are plain structs wrapped in `RwSignal` and provided through
//! Leptos context, so the logic stays testable without a reactive runtime.

pub mod form;
