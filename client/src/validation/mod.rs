//! Client-side form validation.
//!
//! DESIGN
//! ======
//! Each field has an ordered rule list; the first failing rule supplies the
//! field's message and later rules are skipped. Fields are checked
//! independently and their failures collected into [`FieldErrors`]. Nothing
//! here touches the network.

pub mod rules;
pub mod schemas;
pub mod strength;

use std::collections::BTreeMap;

pub use schemas::{
    FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_NAME, FIELD_NATIONAL_ID, FIELD_PASSWORD, LoginCredentials, LoginDraft,
    RegisterDraft, ValidRegistration, validate_login, validate_registration,
};
pub use strength::{PasswordStrength, password_strength};

/// Field name to the single message for that field.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// One predicate plus the message shown when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Message of the first rule `value` fails, if any.
pub fn first_failure(value: &str, rules: &[Rule]) -> Option<&'static str> {
    rules.iter().find(|rule| !(rule.check)(value)).map(|rule| rule.message)
}
