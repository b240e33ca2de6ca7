//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::LOGIN_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found"</h1>
                <p>"The page you are looking for does not exist."</p>
                <A href=LOGIN_PATH>"Go to sign in"</A>
            </div>
        </div>
    }
}
