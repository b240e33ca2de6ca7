//! Per-field rule lists and input sanitizers.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

use super::Rule;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const NATIONAL_ID_DIGITS: usize = 12;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_national_id(value: &str) -> bool {
    value.len() == NATIONAL_ID_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

pub const NAME_RULES: &[Rule] = &[
    Rule { check: non_empty, message: "Name is required" },
    Rule { check: |v| char_len(v) >= NAME_MIN_CHARS, message: "Name must be at least 2 characters" },
    Rule { check: |v| char_len(v) <= NAME_MAX_CHARS, message: "Name must be at most 50 characters" },
    Rule {
        check: |v| v.chars().all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.')),
        message: "Name can only contain letters, spaces, hyphens, apostrophes and periods",
    },
];

pub const EMAIL_RULES: &[Rule] = &[
    Rule { check: non_empty, message: "Email is required" },
    Rule { check: |v| char_len(v) <= EMAIL_MAX_CHARS, message: "Email must be at most 254 characters" },
    Rule { check: is_valid_email, message: "Please enter a valid email address" },
];

pub const PASSWORD_RULES: &[Rule] = &[
    Rule { check: non_empty, message: "Password is required" },
    Rule { check: |v| char_len(v) >= PASSWORD_MIN_CHARS, message: "Password must be at least 8 characters" },
    Rule {
        check: |v| v.chars().any(char::is_uppercase),
        message: "Password must contain at least one uppercase letter",
    },
    Rule {
        check: |v| v.chars().any(char::is_lowercase),
        message: "Password must contain at least one lowercase letter",
    },
    Rule { check: |v| v.chars().any(|c| c.is_ascii_digit()), message: "Password must contain at least one number" },
];

/// Login only checks presence; strength rules apply at registration.
pub const LOGIN_PASSWORD_RULES: &[Rule] = &[Rule { check: non_empty, message: "Password is required" }];

pub const CONFIRM_PASSWORD_RULES: &[Rule] = &[Rule { check: non_empty, message: "Please confirm your password" }];

pub const NATIONAL_ID_RULES: &[Rule] = &[
    Rule { check: non_empty, message: "National ID is required" },
    Rule { check: is_national_id, message: "National ID must be exactly 12 digits" },
];

/// Keep only ASCII digits, capped at twelve; applied as the user types.
pub fn sanitize_national_id_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(NATIONAL_ID_DIGITS).collect()
}
