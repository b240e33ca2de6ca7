//! Login page: email + password with an optional remember-me flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors bounced by the route guard arrive with `?from=<path>` and return
//! there after signing in. Registration sends new accounts here with
//! `?registered=1` instead of signing them in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::form_field::FormField;
use crate::net::api::{AppGateway, Gateway};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::LoginRequest;
use crate::state::auth::is_authenticated;
use crate::state::form::FormStatus;
use crate::state::session::StorageError;
use crate::util::auth::{FROM_PARAM, PROFILE_PATH, REGISTER_PATH, login_return_target};
use crate::validation::{FIELD_EMAIL, FIELD_PASSWORD, FieldErrors, LoginCredentials, LoginDraft, validate_login};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password. Please try again.";
pub const SESSION_NOT_SAVED_MESSAGE: &str = "Signed in, but this browser refused to store the session.";
pub const REGISTERED_PARAM: &str = "registered";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginFailure {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoginFailure {
    /// Form-level message. A 401/403 here means bad credentials, not an
    /// ended session.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(ApiError::Unauthorized { .. }) => INVALID_CREDENTIALS_MESSAGE.to_owned(),
            Self::Api(e) => e.user_message(INVALID_CREDENTIALS_MESSAGE),
            Self::Storage(_) => SESSION_NOT_SAVED_MESSAGE.to_owned(),
        }
    }
}

/// Sign in, store the token, and return where to navigate next.
///
/// # Errors
///
/// Returns a [`LoginFailure`] when the server refuses or cannot be reached, or
/// when the token cannot be stored.
pub async fn perform_login<T: Transport>(
    gateway: &Gateway<T>,
    credentials: &LoginCredentials,
    from: Option<&str>,
) -> Result<String, LoginFailure> {
    let request = LoginRequest { email: credentials.email.clone(), password: credentials.password.clone() };
    let token = gateway.login(&request).await?;
    gateway.session().set(&token, credentials.remember_me)?;
    log::info!("signed in (remember_me={})", credentials.remember_me);
    Ok(login_return_target(from))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    if is_authenticated(gateway.session()) {
        return view! { <Redirect path=PROFILE_PATH/> }.into_any();
    }

    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(gateway.session().has_remember_preference());
    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(FormStatus::default());
    let submitting = Signal::derive(move || status.with(|s| s.submitting));

    let registered = move || query.with(|q| q.get(REGISTERED_PARAM).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = LoginDraft {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember.get_untracked(),
        };
        let credentials = match validate_login(&draft) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }

        let gateway = gateway.clone();
        let navigate = navigate.clone();
        let from = query.with_untracked(|q| q.get(FROM_PARAM));
        leptos::task::spawn_local(async move {
            match perform_login(&gateway, &credentials, from.as_deref()).await {
                Ok(target) => {
                    status.update(FormStatus::finish);
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    status.update(|s| s.fail(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <Show when=registered>
                    <p class="auth-card__notice">"Account created. Please sign in."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        value=email
                        error=Signal::derive(move || errors.with(|e| e.get(FIELD_EMAIL).copied()))
                        disabled=submitting
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        error=Signal::derive(move || errors.with(|e| e.get(FIELD_PASSWORD).copied()))
                        disabled=submitting
                    />
                    <label class="auth-form__remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            disabled=move || submitting.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <Show when=move || status.with(|s| s.message.is_some())>
                        <p class="auth-form__message" role="alert">
                            {move || status.with(|s| s.message.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <A href=REGISTER_PATH>"Create one"</A>
                </p>
            </div>
        </div>
    }
    .into_any()
}
