//! # client
//!
//! Leptos + WASM frontend for account registration, login and the protected
//! profile view.
//!
//! This crate contains pages, components, session state, form validation and
//! the HTTP gateway that talks to the remote auth API. Everything outside the
//! `csr` feature compiles natively so the session and validation logic can be
//! tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validation;
