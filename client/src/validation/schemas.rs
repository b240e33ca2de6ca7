//! Registration and login form schemas.

#[cfg(test)]
#[path = "schemas_test.rs"]
mod schemas_test;

use super::rules::{
    CONFIRM_PASSWORD_RULES, EMAIL_RULES, LOGIN_PASSWORD_RULES, NAME_RULES, NATIONAL_ID_RULES, PASSWORD_RULES,
};
use super::{FieldErrors, Rule, first_failure};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";
pub const FIELD_NATIONAL_ID: &str = "national_id";

/// Raw registration input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub national_id: String,
}

/// Registration input that passed every rule; name and email are trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub national_id: String,
}

/// Raw login input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

fn check(errors: &mut FieldErrors, field: &'static str, value: &str, rules: &[Rule]) {
    if let Some(message) = first_failure(value, rules) {
        errors.insert(field, message);
    }
}

/// Validate every registration field.
///
/// # Errors
///
/// Returns one message per failing field.
pub fn validate_registration(draft: &RegisterDraft) -> Result<ValidRegistration, FieldErrors> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    // Exactly twelve digits as typed; surrounding whitespace is a non-digit.
    let national_id = draft.national_id.as_str();

    let mut errors = FieldErrors::new();
    check(&mut errors, FIELD_NAME, name, NAME_RULES);
    check(&mut errors, FIELD_EMAIL, email, EMAIL_RULES);
    check(&mut errors, FIELD_PASSWORD, &draft.password, PASSWORD_RULES);
    check(&mut errors, FIELD_CONFIRM_PASSWORD, &draft.confirm_password, CONFIRM_PASSWORD_RULES);
    if !errors.contains_key(FIELD_CONFIRM_PASSWORD) && draft.confirm_password != draft.password {
        errors.insert(FIELD_CONFIRM_PASSWORD, "Passwords do not match");
    }
    check(&mut errors, FIELD_NATIONAL_ID, national_id, NATIONAL_ID_RULES);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidRegistration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: draft.password.clone(),
        national_id: national_id.to_owned(),
    })
}

/// Validate the login form.
///
/// # Errors
///
/// Returns one message per failing field.
pub fn validate_login(draft: &LoginDraft) -> Result<LoginCredentials, FieldErrors> {
    let email = draft.email.trim();

    let mut errors = FieldErrors::new();
    check(&mut errors, FIELD_EMAIL, email, EMAIL_RULES);
    check(&mut errors, FIELD_PASSWORD, &draft.password, LOGIN_PASSWORD_RULES);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginCredentials {
        email: email.to_owned(),
        password: draft.password.clone(),
        remember_me: draft.remember_me,
    })
}
