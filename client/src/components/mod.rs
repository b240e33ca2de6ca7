//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and route-level guards while reading shared
//! session state from Leptos context providers.

pub mod form_field;
pub mod password_strength_meter;
pub mod protected_route;
pub mod session_watcher;
