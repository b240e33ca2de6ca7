//! Navigation half of the gateway's unauthorized handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway lives outside the router, so on a 401/403 it only clears the
//! session and bumps a counter signal. This component sits inside `<Router>`
//! and turns each bump into a replace-navigation to `/login`, whichever page
//! issued the failing call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::util::auth::LOGIN_PATH;

#[component]
pub fn SessionExpiryRedirect(expired: RwSignal<u32>) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        if expired.get() == 0 {
            return;
        }
        // A rejected login attempt also lands here; stay put so the form keeps its message.
        if location.pathname.get_untracked() == LOGIN_PATH {
            return;
        }
        log::info!("session rejected by server; returning to login");
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..Default::default() });
    });
}
