//! Pattern analysis section - detects repeated characters and weak sequences.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::policy::{MIN_REPEAT_RUN, SEQUENCE_WINDOWS, WEAK_SEQUENCES};
use crate::wordset::WordSet;

/// Lists the obvious patterns found in a password, case-insensitively.
///
/// Reports one issue for any run of [`MIN_REPEAT_RUN`] identical characters,
/// then, for every weak sequence and window length, the first chunk of the
/// sequence that appears in the password forwards or backwards.
pub fn obvious_patterns(password: &str) -> Vec<String> {
    let pwd = password.to_lowercase();
    let chars: Vec<char> = pwd.chars().collect();
    let mut issues = Vec::new();

    let repeated = chars
        .windows(MIN_REPEAT_RUN)
        .any(|run| run.iter().all(|&c| c == run[0]));
    if repeated {
        issues.push(format!(
            "Password contains {}+ repeated characters",
            MIN_REPEAT_RUN
        ));
    }

    for seq in WEAK_SEQUENCES {
        for len in SEQUENCE_WINDOWS {
            if let Some(chunk) = first_weak_chunk(&pwd, seq, len) {
                issues.push(format!("Password contains weak sequence '{}'", chunk));
            }
        }
    }

    issues
}

fn first_weak_chunk<'s>(pwd: &str, seq: &'s str, len: usize) -> Option<&'s str> {
    if seq.len() < len {
        return None;
    }
    // sequences are ASCII, so byte windows are character windows
    (0..=seq.len() - len)
        .map(|i| &seq[i..i + len])
        .find(|chunk| {
            let reversed: String = chunk.chars().rev().collect();
            pwd.contains(*chunk) || pwd.contains(reversed.as_str())
        })
}

/// Analyzes password for repetitive and sequential patterns.
pub fn pattern_analysis_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    obvious_patterns(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_repeated_only() {
        assert_eq!(
            obvious_patterns("aaaaaaaaaaaa"),
            vec!["Password contains 4+ repeated characters".to_string()]
        );
    }

    #[test]
    fn test_pattern_three_repeats_allowed() {
        assert!(obvious_patterns("xx%%%k7#bbb").is_empty());
    }

    #[test]
    fn test_pattern_repeated_reported_once() {
        let issues = obvious_patterns("1111zz%%%%k");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("repeated"));
    }

    #[test]
    fn test_pattern_keyboard_row() {
        let issues = obvious_patterns("qwerty123456");
        assert_eq!(
            issues,
            vec![
                "Password contains weak sequence 'qwer'".to_string(),
                "Password contains weak sequence 'qwert'".to_string(),
                "Password contains weak sequence '1234'".to_string(),
                "Password contains weak sequence '12345'".to_string(),
            ]
        );
    }

    #[test]
    fn test_pattern_case_insensitive() {
        let issues = obvious_patterns("xQWERx");
        assert_eq!(issues, vec!["Password contains weak sequence 'qwer'".to_string()]);
    }

    #[test]
    fn test_pattern_reversed_sequence() {
        let issues = obvious_patterns("k#dcba");
        assert_eq!(issues, vec!["Password contains weak sequence 'abcd'".to_string()]);
    }

    #[test]
    fn test_pattern_password_token() {
        let issues = obvious_patterns("Password!");
        assert_eq!(
            issues,
            vec![
                "Password contains weak sequence 'pass'".to_string(),
                "Password contains weak sequence 'passw'".to_string(),
            ]
        );
    }

    #[test]
    fn test_pattern_repetition_and_sequence() {
        let issues = obvious_patterns("zzzz7890");
        assert_eq!(
            issues,
            vec![
                "Password contains 4+ repeated characters".to_string(),
                "Password contains weak sequence '7890'".to_string(),
            ]
        );
    }

    #[test]
    fn test_pattern_strong_password() {
        assert!(obvious_patterns("Zq#v8Kx!mW2p").is_empty());
    }

    #[test]
    fn test_pattern_too_short() {
        assert!(obvious_patterns("ab").is_empty());
        assert!(obvious_patterns("").is_empty());
    }

    #[test]
    fn test_pattern_section_uses_secret() {
        let pwd = SecretString::new("aaaaBBBB1111".to_string().into());
        let result = pattern_analysis_section(&pwd, &WordSet::default());
        assert_eq!(result.len(), 1);
    }
}
