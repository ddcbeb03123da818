//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::policy::MIN_LENGTH;
use crate::wordset::WordSet;

/// Checks if the password meets the minimum length, counted in characters.
pub fn length_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return vec![format!("Password too short (min {})", MIN_LENGTH)];
    }
    Vec::new()
}
