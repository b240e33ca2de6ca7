use super::*;

#[test]
fn empty_password_is_weak() {
    assert_eq!(password_strength(""), PasswordStrength::Weak);
}

#[test]
fn short_lowercase_is_weak() {
    assert_eq!(password_strength("abcdefg"), PasswordStrength::Weak);
}

#[test]
fn eight_lowercase_is_weak() {
    // length >= 8 + lowercase = 2 points
    assert_eq!(password_strength("abcdefgh"), PasswordStrength::Weak);
}

#[test]
fn nine_chars_three_classes_is_medium() {
    // length >= 8, uppercase, lowercase, digit = 4 points
    assert_eq!(password_strength("Abcdefgh1"), PasswordStrength::Medium);
}

#[test]
fn adding_a_symbol_reaches_strong() {
    assert_eq!(password_strength("Abcdefgh1!"), PasswordStrength::Strong);
}

#[test]
fn long_password_with_three_classes_is_strong() {
    // length >= 8, length >= 12, uppercase, lowercase, digit = 5 points
    assert_eq!(password_strength("Abcdefghijk1"), PasswordStrength::Strong);
}

#[test]
fn every_point_is_strong() {
    assert_eq!(password_strength("Abcdefghij1!"), PasswordStrength::Strong);
}

#[test]
fn short_mixed_is_medium() {
    // uppercase, lowercase, digit = 3 points
    assert_eq!(password_strength("Ab1"), PasswordStrength::Medium);
}

#[test]
fn symbols_alone_are_weak() {
    assert_eq!(password_strength("!!!"), PasswordStrength::Weak);
}

#[test]
fn labels_and_modifiers() {
    assert_eq!(PasswordStrength::Weak.label(), "Weak");
    assert_eq!(PasswordStrength::Medium.css_modifier(), "medium");
    assert_eq!(PasswordStrength::Strong.label(), "Strong");
}
