//! Shown instead of the app when the bundle was built without a usable API address.

use leptos::prelude::*;

use crate::config::ConfigError;

#[component]
pub fn ConfigErrorPage(error: ConfigError) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--error" role="alert">
                <h1>"Configuration error"</h1>
                <p>"This build cannot reach its API."</p>
                <p class="auth-card__detail">{error.to_string()}</p>
            </div>
        </div>
    }
}
