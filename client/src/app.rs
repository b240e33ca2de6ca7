//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::session_watcher::SessionExpiryRedirect;
use crate::config::ApiConfig;
use crate::net::api::AppGateway;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    config_error::ConfigErrorPage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::session::SessionStore;
use crate::util::auth::LOGIN_PATH;

/// Root application component.
///
/// Builds the session store and gateway once, provides both as context, and
/// sets up client-side routing. A bundle built without a usable API address
/// renders only the configuration notice.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match ApiConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid API configuration: {e}");
            return view! { <ConfigErrorPage error=e/> }.into_any();
        }
    };
    log::info!("API base {} (timeout {} ms)", config.base_url(), config.timeout_ms());

    // Bumped by the gateway on every 401/403; watched inside the router.
    let session_expired = RwSignal::new(0_u32);
    let session = SessionStore::browser();
    let gateway = AppGateway::new(config, session.clone(), BrowserTransport).with_unauthorized_hook(move || {
        session_expired.try_update(|n| *n += 1);
    });

    provide_context(session);
    provide_context(gateway);

    view! {
        <Title text="Account"/>

        <Router>
            <SessionExpiryRedirect expired=session_expired/>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
