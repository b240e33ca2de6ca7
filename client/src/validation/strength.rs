//! Advisory password strength scoring for the registration meter.
//!
//! Never blocks submission; [`super::rules::PASSWORD_RULES`] decides validity.

#[cfg(test)]
#[path = "strength_test.rs"]
mod strength_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Modifier for the meter's CSS class.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// One point each for length >= 8, length >= 12, uppercase, lowercase, digit
/// and symbol. 0-2 points is weak, 3-4 medium, 5-6 strong.
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let points = [
        len >= 8,
        len >= 12,
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_alphanumeric()),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();

    match points {
        0..=2 => PasswordStrength::Weak,
        3 | 4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}
