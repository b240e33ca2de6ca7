//! Registration page.
//!
//! Every field is validated locally before anything is sent. A created
//! account is not signed in; the visitor lands on the login page with a
//! notice instead.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::password_strength_meter::PasswordStrengthMeter;
use crate::net::api::{AppGateway, Gateway};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::RegisterRequest;
use crate::state::auth::is_authenticated;
use crate::state::form::FormStatus;
use crate::util::auth::{LOGIN_PATH, PROFILE_PATH};
use crate::validation::rules::sanitize_national_id_input;
use crate::validation::{
    FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_NAME, FIELD_NATIONAL_ID, FIELD_PASSWORD, FieldErrors, RegisterDraft,
    ValidRegistration, validate_registration,
};

use super::login::REGISTERED_PARAM;

pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Where a successful registration sends the visitor.
pub fn registered_redirect() -> String {
    format!("{LOGIN_PATH}?{REGISTERED_PARAM}=1")
}

/// Submit a validated registration. Returns the server's acknowledgement.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`].
pub async fn perform_registration<T: Transport>(
    gateway: &Gateway<T>,
    registration: &ValidRegistration,
) -> Result<Option<String>, ApiError> {
    let request = RegisterRequest {
        name: registration.name.clone(),
        email: registration.email.clone(),
        password: registration.password.clone(),
        national_id: registration.national_id.clone(),
    };
    let ack = gateway.register(&request).await?;
    log::info!("account registered");
    Ok(ack)
}

pub fn registration_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { .. } => REGISTRATION_FAILED_MESSAGE.to_owned(),
        other => other.user_message(REGISTRATION_FAILED_MESSAGE),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    if is_authenticated(gateway.session()) {
        return view! { <Redirect path=PROFILE_PATH/> }.into_any();
    }
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(FormStatus::default());
    let submitting = Signal::derive(move || status.with(|s| s.submitting));
    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).copied()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = RegisterDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            national_id: national_id.get_untracked(),
        };
        let registration = match validate_registration(&draft) {
            Ok(registration) => registration,
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
        leptos::task::spawn_local(async move {
            match perform_registration(&gateway, &registration).await {
                Ok(_) => {
                    status.update(FormStatus::finish);
                    navigate(&registered_redirect(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    status.update(|s| s.fail(registration_failure_message(&e)));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <FormField
                        label="Full name"
                        name="name"
                        autocomplete="name"
                        value=name
                        error=field_error(FIELD_NAME)
                        disabled=submitting
                    />
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        value=email
                        error=field_error(FIELD_EMAIL)
                        disabled=submitting
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        autocomplete="new-password"
                        value=password
                        error=field_error(FIELD_PASSWORD)
                        disabled=submitting
                    />
                    <PasswordStrengthMeter password=password/>
                    <FormField
                        label="Confirm password"
                        name="confirm_password"
                        input_type="password"
                        autocomplete="new-password"
                        value=confirm_password
                        error=field_error(FIELD_CONFIRM_PASSWORD)
                        disabled=submitting
                    />
                    <FormField
                        label="National ID"
                        name="national_id"
                        placeholder="12 digits"
                        value=national_id
                        error=field_error(FIELD_NATIONAL_ID)
                        disabled=submitting
                        sanitize=sanitize_national_id_input
                    />
                    <Show when=move || status.with(|s| s.message.is_some())>
                        <p class="auth-form__message" role="alert">
                            {move || status.with(|s| s.message.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
    .into_any()
}
