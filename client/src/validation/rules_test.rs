use super::*;
use crate::validation::first_failure;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_basic_addresses() {
    for ok in ["user@example.com", "first.last+tag@mail.example.co.uk", "a@b.io"] {
        assert_eq!(first_failure(ok, EMAIL_RULES), None, "expected {ok:?} to pass");
    }
}

#[test]
fn email_rejects_missing_domain_structure() {
    for bad in [
        "plainaddress",
        "user@",
        "@example.com",
        "user@example",
        "user@@example.com",
        "user @example.com",
        "user@exa mple.com",
        "user.example.com",
    ] {
        assert_eq!(
            first_failure(bad, EMAIL_RULES),
            Some("Please enter a valid email address"),
            "expected {bad:?} to fail"
        );
    }
}

#[test]
fn email_required_message_wins_for_empty_input() {
    assert_eq!(first_failure("", EMAIL_RULES), Some("Email is required"));
}

#[test]
fn email_rejects_overlong_address() {
    let long = format!("{}@example.com", "a".repeat(250));
    assert_eq!(first_failure(&long, EMAIL_RULES), Some("Email must be at most 254 characters"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_length_boundaries() {
    assert_eq!(first_failure("Abcd1", PASSWORD_RULES), Some("Password must be at least 8 characters"));
    assert_eq!(first_failure("Abcde1", PASSWORD_RULES), Some("Password must be at least 8 characters"));
    assert_eq!(first_failure("Abcdef1", PASSWORD_RULES), Some("Password must be at least 8 characters"));
    assert_eq!(first_failure("Abcdefg1", PASSWORD_RULES), None);
}

#[test]
fn password_requires_each_character_class() {
    assert_eq!(
        first_failure("abcdefg1", PASSWORD_RULES),
        Some("Password must contain at least one uppercase letter")
    );
    assert_eq!(
        first_failure("ABCDEFG1", PASSWORD_RULES),
        Some("Password must contain at least one lowercase letter")
    );
    assert_eq!(first_failure("Abcdefgh", PASSWORD_RULES), Some("Password must contain at least one number"));
}

#[test]
fn password_accepts_iff_length_and_classes_hold() {
    let candidates = [
        ("", false),
        ("Aa1", false),
        ("Aa1Aa", false),
        ("Aa1Aa1", false),
        ("Aa1Aa1A", false),
        ("Aa1Aa1Aa", true),
        ("aaaaaaaa", false),
        ("AAAAAAA1", false),
        ("Password1!", true),
        ("Pässwörd1", true),
    ];
    for (candidate, expected) in candidates {
        let len = candidate.chars().count();
        let by_definition = len >= 8
            && candidate.chars().any(char::is_uppercase)
            && candidate.chars().any(char::is_lowercase)
            && candidate.chars().any(|c| c.is_ascii_digit());
        assert_eq!(by_definition, expected, "fixture {candidate:?}");
        assert_eq!(first_failure(candidate, PASSWORD_RULES).is_none(), expected, "rules for {candidate:?}");
    }
}

#[test]
fn login_password_only_requires_presence() {
    assert_eq!(first_failure("", LOGIN_PASSWORD_RULES), Some("Password is required"));
    assert_eq!(first_failure("x", LOGIN_PASSWORD_RULES), None);
}

// =============================================================
// National ID
// =============================================================

#[test]
fn national_id_accepts_exactly_twelve_digits() {
    assert_eq!(first_failure("123456789012", NATIONAL_ID_RULES), None);
}

#[test]
fn national_id_rejects_wrong_lengths() {
    for bad in ["12345678901", "1234567890123", "1"] {
        assert_eq!(
            first_failure(bad, NATIONAL_ID_RULES),
            Some("National ID must be exactly 12 digits"),
            "expected {bad:?} to fail"
        );
    }
}

#[test]
fn national_id_rejects_non_digits() {
    for bad in ["12345678901a", "1234 5678 90", "1234-5678-90", "１２３４５６７８９０１２", "12345678901.", "-12345678901"] {
        assert!(!is_national_id(bad), "expected {bad:?} to fail");
    }
}

#[test]
fn national_id_required_message() {
    assert_eq!(first_failure("", NATIONAL_ID_RULES), Some("National ID is required"));
}

#[test]
fn sanitize_national_id_keeps_digits_and_caps_length() {
    assert_eq!(sanitize_national_id_input("1234-5678 9012"), "123456789012");
    assert_eq!(sanitize_national_id_input("12345678901234"), "123456789012");
    assert_eq!(sanitize_national_id_input("abc"), "");
    assert_eq!(sanitize_national_id_input("４2"), "2");
}

// =============================================================
// Name
// =============================================================

#[test]
fn name_rules_first_failure_wins() {
    assert_eq!(first_failure("", NAME_RULES), Some("Name is required"));
    assert_eq!(first_failure("A", NAME_RULES), Some("Name must be at least 2 characters"));
    assert_eq!(first_failure(&"a".repeat(51), NAME_RULES), Some("Name must be at most 50 characters"));
    assert_eq!(
        first_failure("R2-D2", NAME_RULES),
        Some("Name can only contain letters, spaces, hyphens, apostrophes and periods")
    );
}

#[test]
fn name_accepts_common_forms() {
    for ok in ["Jo", "Mary-Jane O'Neil", "J. R. Tolkien", "Zoë Saldaña"] {
        assert_eq!(first_failure(ok, NAME_RULES), None, "expected {ok:?} to pass");
    }
}
