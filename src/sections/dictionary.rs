//! Dictionary section - detects dictionary words hidden in the password.
//!
//! A word counts when it appears verbatim, reversed, or after undoing a few
//! leet substitutions (`dr4g0n` -> `dragon`).

use std::fmt;
use std::ops::ControlFlow;

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::policy::{MAX_LEET_SUBSTITUTIONS, leet_letter};
use crate::wordset::WordSet;

/// How a dictionary word was found in the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Verbatim,
    Reversed,
    Leet,
}

/// A dictionary word embedded in a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryHit {
    pub word: String,
    pub kind: HitKind,
}

impl fmt::Display for DictionaryHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HitKind::Verbatim => write!(f, "Password contains dictionary word '{}'", self.word),
            HitKind::Reversed => {
                write!(f, "Password contains reversed dictionary word '{}'", self.word)
            }
            HitKind::Leet => {
                write!(f, "Password contains disguised dictionary word '{}'", self.word)
            }
        }
    }
}

/// Finds the first dictionary word embedded in a lowercase password.
///
/// Stages run in order and stop at the first hit: verbatim substring,
/// substring of the reversed password, then the leet-normalized prefix scan.
/// Only the last stage is limited by [`MAX_LEET_SUBSTITUTIONS`].
pub fn find_dictionary_word(lower: &str, words: &WordSet) -> Option<DictionaryHit> {
    let hit = |word: &str, kind| DictionaryHit {
        word: word.to_string(),
        kind,
    };

    if let Some(w) = words.iter().find(|w| lower.contains(*w)) {
        return Some(hit(w, HitKind::Verbatim));
    }

    let reversed: String = lower.chars().rev().collect();
    if let Some(w) = words.iter().find(|w| reversed.contains(*w)) {
        return Some(hit(w, HitKind::Reversed));
    }

    find_leet_word(lower, words).map(|w| hit(w, HitKind::Leet))
}

/// Folds the password into a normalized prefix, checking after every
/// character while the substitution count is within budget.
///
/// Every shorter prefix has already been checked when a character is
/// appended, so only words ending at the new character can be new hits.
fn find_leet_word<'w>(lower: &str, words: &'w WordSet) -> Option<&'w str> {
    let scan = lower.chars().try_fold(
        (String::with_capacity(lower.len()), 0usize),
        |(mut normalized, mut substitutions), c| {
            match leet_letter(c) {
                Some(letter) => {
                    normalized.push(letter);
                    substitutions += 1;
                }
                None => normalized.push(c),
            }

            if substitutions > MAX_LEET_SUBSTITUTIONS {
                return ControlFlow::Break(None);
            }

            match words.iter().find(|w| normalized.ends_with(*w)) {
                Some(w) => ControlFlow::Break(Some(w)),
                None => ControlFlow::Continue((normalized, substitutions)),
            }
        },
    );

    match scan {
        ControlFlow::Break(found) => found,
        ControlFlow::Continue(_) => None,
    }
}

/// Checks the password against the dictionary word set.
pub fn dictionary_section(password: &SecretString, words: &WordSet) -> SectionResult {
    let lower = password.expose_secret().to_lowercase();
    find_dictionary_word(&lower, words)
        .map(|hit| hit.to_string())
        .into_iter()
        .collect()
}
