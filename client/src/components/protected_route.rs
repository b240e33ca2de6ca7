//! Route wrapper that only renders its children for an authenticated session.
//!
//! DESIGN
//! ======
//! The decision is made during render, so an unauthenticated visitor gets a
//! `<Redirect>` in the same pass and protected content never paints.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::is_authenticated;
use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, guard_decision};

/// Path plus query string as the router currently sees it.
fn requested_path(pathname: &str, search: &str) -> String {
    match search.trim_start_matches('?') {
        "" => pathname.to_owned(),
        query => format!("{pathname}?{query}"),
    }
}

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();

    move || {
        let requested = requested_path(&location.pathname.get(), &location.search.get());
        match guard_decision(is_authenticated(&session), &requested) {
            GuardDecision::Allowed => children().into_any(),
            GuardDecision::Redirect(target) => {
                log::debug!("guard: {requested} -> {target}");
                view! { <Redirect path=target options=NavigateOptions { replace: true, ..Default::default() }/> }
                    .into_any()
            }
        }
    }
}
