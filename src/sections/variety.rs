//! Character variety section - checks for lowercase, uppercase, digits and symbols.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::policy::{DIVERSITY_EXEMPT_LENGTH, MIN_CHAR_CLASSES};
use crate::wordset::WordSet;

/// Counts the character classes present: lowercase, uppercase, digit, symbol.
///
/// Anything outside ASCII letters and digits counts as a symbol.
pub fn character_classes(password: &str) -> usize {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count()
}

/// Checks that short passwords mix enough character classes.
///
/// Passwords of [`DIVERSITY_EXEMPT_LENGTH`] characters or more always pass.
pub fn character_variety_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    let pwd = password.expose_secret();
    if pwd.chars().count() >= DIVERSITY_EXEMPT_LENGTH {
        return Vec::new();
    }

    if character_classes(pwd) < MIN_CHAR_CLASSES {
        return vec![format!(
            "Too many similar characters (use at least {} of: lowercase, uppercase, digits, symbols)",
            MIN_CHAR_CLASSES
        )];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        character_variety_section(&SecretString::new(pwd.to_string().into()), &WordSet::default())
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(character_classes(""), 0);
        assert_eq!(character_classes("abc"), 1);
        assert_eq!(character_classes("abc123"), 2);
        assert_eq!(character_classes("abC123"), 3);
        assert_eq!(character_classes("abC12#"), 4);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert_eq!(character_classes("été"), 2);
    }

    #[test]
    fn test_variety_two_classes_rejected() {
        let result = check("lowercase123");
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("similar"));
    }

    #[test]
    fn test_variety_three_classes_accepted() {
        assert!(check("lowercase12#").is_empty());
        assert!(check("Lowercase123").is_empty());
    }

    #[test]
    fn test_variety_long_password_exempt() {
        assert!(check("onlylowercaseletterss").is_empty());
        assert!(check("aaaaaaaaaaaaaaaaaaaa").is_empty());
    }

    #[test]
    fn test_variety_nineteen_chars_not_exempt() {
        assert_eq!(check("onlylowercaseletter").len(), 1);
    }
}
