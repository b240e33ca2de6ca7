//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validate, call the gateway,
//! update the session, navigate) and delegates rendering details to
//! `components`. The async flows are plain functions over the gateway so they
//! run in native tests.

pub mod config_error;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
