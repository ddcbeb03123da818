//! Dictionary word set
//!
//! Loads word lists into a normalized, deduplicated set used by the
//! dictionary section.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::policy::MIN_DICT_WORD_LEN;

/// Environment variable holding a path list of dictionary files.
pub const DICT_PATH_ENV: &str = "FIRSTBOOT_DICT_PATH";

/// Word list shipped with cracklib on the target image.
pub const DEFAULT_DICT_PATH: &str = "/usr/share/dict/cracklib-small";

/// Lowercase dictionary words, each at least [`MIN_DICT_WORD_LEN`] characters.
///
/// Words are kept longest first, then alphabetically, so matching always
/// reports the same (and most specific) word for a given password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Builds a set from in-memory words, applying the loader's normalization.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: HashSet<String> = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();
        Self::from_set(set)
    }

    fn from_set(set: HashSet<String>) -> Self {
        let mut words: Vec<String> = set.into_iter().collect();
        words.sort_by(|a, b| longest_first(a, b));
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks membership of an already lowercase word.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| longest_first(w, word))
            .is_ok()
    }

    /// Iterates the words, longest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn longest_first(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (word.chars().count() >= MIN_DICT_WORD_LEN).then_some(word)
}

/// Returns the dictionary file paths to load.
///
/// Priority:
/// 1. Environment variable `FIRSTBOOT_DICT_PATH` (platform path list)
/// 2. Default path `/usr/share/dict/cracklib-small`
pub fn dictionary_paths() -> Vec<PathBuf> {
    let from_env: Vec<PathBuf> = std::env::var_os(DICT_PATH_ENV)
        .map(|v| {
            std::env::split_paths(&v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();

    if from_env.is_empty() {
        vec![PathBuf::from(DEFAULT_DICT_PATH)]
    } else {
        from_env
    }
}

/// Loads every readable word list into one [`WordSet`].
///
/// Missing or permission-denied files are skipped, as are other read
/// failures. Bytes that are not valid UTF-8 are dropped from their line.
pub fn load_word_set<I, P>(paths: I) -> WordSet
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut set = HashSet::new();

    for path in paths {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Skipping dictionary {:?}: {}", path, e);
                continue;
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Failed to read dictionary {:?}: {}", path, _e);
                continue;
            }
        };

        #[cfg(feature = "tracing")]
        let before = set.len();
        set.extend(
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(|line| {
                    line.chars()
                        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
                        .collect::<String>()
                })
                .filter_map(|line| normalize_word(&line)),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!("Dictionary {:?} added {} words", path, set.len() - before);
    }

    let words = WordSet::from_set(set);

    #[cfg(feature = "tracing")]
    tracing::info!("Word set loaded: {} words", words.len());

    words
}
