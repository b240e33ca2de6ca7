//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted token, `auth` derives the authenticated view of
//! it, and `form` tracks per-form submission status. Pages read these through
//! Leptos context instead of touching browser storage directly.

pub mod auth;
pub mod form;
pub mod session;
