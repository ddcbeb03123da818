//! Password evaluation sections
//!
//! Each section checks one rule of the policy and reports the reasons it
//! rejects the password for.

mod dictionary;
mod length;
mod pattern;
mod variety;

pub use dictionary::{DictionaryHit, HitKind, dictionary_section, find_dictionary_word};
pub use length::length_section;
pub use pattern::{obvious_patterns, pattern_analysis_section};
pub use variety::character_variety_section;

/// Result type for section evaluation functions.
/// - empty - Section passed
/// - one or more reasons - Section failed
pub type SectionResult = Vec<String>;
