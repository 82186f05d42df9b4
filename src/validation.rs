//! Field validators and normalizers
//!
//! Both the add and edit paths of each service share these rules, so a field
//! is checked identically no matter how it reaches the system.
//!
//! Two behaviors are deliberate and distinct:
//! - invalid amounts and unknown category references are *rejected*;
//! - invalid colors, emojis, and dates are *normalized* (silent fallback to
//!   a default), matching the permissive handling of cosmetic fields.

use crate::models::DEFAULT_COLOR;

/// Why a category name failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameIssue {
    /// Trimmed length outside the 2–20 character range
    BadLength(usize),
    /// Contains a character other than letters, digits, or spaces
    InvalidCharacter(char),
}

impl std::fmt::Display for NameIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "name must be 2-20 characters (got {})", len)
            }
            Self::InvalidCharacter(c) => {
                write!(f, "name may only contain letters, digits, and spaces (found '{}')", c)
            }
        }
    }
}

/// Check a category name's format. The input is expected to be pre-trimmed.
///
/// Uniqueness against other custom categories is a separate check that needs
/// the category list; see `CategoryService::validate_name`.
pub fn check_name_format(name: &str) -> Result<(), NameIssue> {
    let len = name.chars().count();
    if !(2..=20).contains(&len) {
        return Err(NameIssue::BadLength(len));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == ' '))
    {
        return Err(NameIssue::InvalidCharacter(bad));
    }
    Ok(())
}

/// Normalize a color to a `#RRGGBB` code, substituting the default on mismatch
pub fn normalize_color(color: &str) -> String {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        color.to_string()
    } else {
        DEFAULT_COLOR.to_string()
    }
}

/// Truncate an emoji to at most 2 characters
pub fn normalize_emoji(emoji: &str) -> String {
    emoji.chars().take(2).collect()
}

/// Clamp a budget to a non-negative, finite number
pub fn normalize_budget(budget: f64) -> f64 {
    if budget.is_finite() {
        budget.max(0.0)
    } else {
        0.0
    }
}

/// Round an amount to 2 decimal places
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Trim a description and truncate it to 100 characters
pub fn normalize_description(description: &str) -> String {
    description.trim().chars().take(100).collect()
}

/// Check that a date string matches `YYYY-MM-DD` literally.
///
/// This is a shape check only, not a calendar check, matching how dates are
/// compared everywhere else (plain string comparison).
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_format_accepts_alphanumeric_and_spaces() {
        assert!(check_name_format("Pets").is_ok());
        assert!(check_name_format("Home Office 2").is_ok());
        assert!(check_name_format("ab").is_ok());
        assert!(check_name_format(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn test_name_format_rejects_bad_length() {
        assert_eq!(check_name_format("a"), Err(NameIssue::BadLength(1)));
        assert_eq!(check_name_format(""), Err(NameIssue::BadLength(0)));
        assert_eq!(
            check_name_format(&"a".repeat(21)),
            Err(NameIssue::BadLength(21))
        );
    }

    #[test]
    fn test_name_format_rejects_special_characters() {
        assert_eq!(
            check_name_format("Caf!"),
            Err(NameIssue::InvalidCharacter('!'))
        );
        assert!(check_name_format("Food & Drink").is_err());
        assert!(check_name_format("emoji 🍕").is_err());
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#aabbcc"), "#aabbcc");
        assert_eq!(normalize_color("#AABB00"), "#AABB00");
        assert_eq!(normalize_color("aabbcc"), DEFAULT_COLOR);
        assert_eq!(normalize_color("#abc"), DEFAULT_COLOR);
        assert_eq!(normalize_color("#gghhii"), DEFAULT_COLOR);
        assert_eq!(normalize_color(""), DEFAULT_COLOR);
    }

    #[test]
    fn test_normalize_emoji() {
        assert_eq!(normalize_emoji("🍕"), "🍕");
        assert_eq!(normalize_emoji("abc"), "ab");
        assert_eq!(normalize_emoji(""), "");
    }

    #[test]
    fn test_normalize_budget() {
        assert_eq!(normalize_budget(100.0), 100.0);
        assert_eq!(normalize_budget(-5.0), 0.0);
        assert_eq!(normalize_budget(f64::NAN), 0.0);
        assert_eq!(normalize_budget(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(10.005), 10.01);
        assert_eq!(round_amount(10.004), 10.0);
        assert_eq!(round_amount(100.0), 100.0);
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description("  coffee  "), "coffee");
        let long = "x".repeat(150);
        assert_eq!(normalize_description(&long).chars().count(), 100);
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2026-08-29"));
        assert!(is_valid_date("0000-00-00")); // shape check only
        assert!(!is_valid_date("2026-8-29"));
        assert!(!is_valid_date("29-08-2026"));
        assert!(!is_valid_date("2026/08/29"));
        assert!(!is_valid_date("not a date"));
        assert!(!is_valid_date(""));
    }
}
