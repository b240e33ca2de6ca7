//! Presentation helpers for profile fields.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Show only the last four digits of a national ID: `XXXX-XXXX-1234`.
pub fn mask_national_id(national_id: &str) -> String {
    let digits: Vec<char> = national_id.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return "XXXX-XXXX-XXXX".to_owned();
    }
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("XXXX-XXXX-{tail}")
}

fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.date());
    }
    // Some servers omit the offset.
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Some(Ok(dt)) = raw.get(..19).map(|head| PrimitiveDateTime::parse(head, naive)) {
        return Some(dt.date());
    }
    Date::parse(raw.get(..10)?, format_description!("[year]-[month]-[day]")).ok()
}

/// `2024-01-15T10:00:00Z` becomes `January 15, 2024`. Unparseable input is
/// shown as sent.
pub fn format_member_since(created_at: &str) -> String {
    let raw = created_at.trim();
    match parse_date(raw) {
        Some(date) => format!("{} {}, {}", date.month(), date.day(), date.year()),
        None => raw.to_owned(),
    }
}
