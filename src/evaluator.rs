//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    SectionResult, character_variety_section, dictionary_section, length_section,
    pattern_analysis_section,
};
use crate::wordset::WordSet;

/// Outcome of evaluating one password against the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// Human-readable rejection reasons, in section order.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    /// A password is accepted when no section rejected it.
    pub fn is_accepted(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Evaluates a password and collects every reason to reject it.
///
/// Sections run in a fixed order: length, dictionary, patterns, variety.
/// Evaluation is pure and never fails; an empty reason list means accepted.
pub fn evaluate_password_strength(password: &SecretString, words: &WordSet) -> PasswordEvaluation {
    let mut reasons = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString, &WordSet) -> SectionResult); 4] = [
        ("length", length_section),
        ("dictionary", dictionary_section),
        ("pattern", pattern_analysis_section),
        ("variety", character_variety_section),
    ];

    for (_section_name, section_fn) in sections {
        let found = section_fn(password, words);

        #[cfg(feature = "tracing")]
        if !found.is_empty() {
            tracing::debug!("Section {} rejected password: {} reason(s)", _section_name, found.len());
        }

        reasons.extend(found);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Password evaluated: {} reason(s)", reasons.len());

    PasswordEvaluation { reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn words() -> WordSet {
        WordSet::from_words(["password", "dragon", "monkey", "admin"])
    }

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        evaluate_password_strength(&secret(pwd), &words())
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate("Zq#v8Kx!mW2p");
        assert!(evaluation.is_accepted(), "unexpected reasons: {:?}", evaluation.reasons);
    }

    #[test]
    fn test_evaluate_short_passwords() {
        for pwd in ["", "a", "Zq#v8Kx!mW2"] {
            let evaluation = evaluate(pwd);
            assert!(
                evaluation.reasons.contains(&"Password too short (min 12)".to_string()),
                "missing length reason for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_evaluate_reason_order() {
        let evaluation = evaluate("password");
        assert_eq!(
            evaluation.reasons,
            vec![
                "Password too short (min 12)".to_string(),
                "Password contains dictionary word 'password'".to_string(),
                "Password contains weak sequence 'pass'".to_string(),
                "Password contains weak sequence 'passw'".to_string(),
                "Too many similar characters (use at least 3 of: lowercase, uppercase, digits, symbols)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_dictionary_case_insensitive() {
        let evaluation = evaluate("x7#PassWord#Q");
        assert!(
            evaluation
                .reasons
                .contains(&"Password contains dictionary word 'password'".to_string())
        );
    }

    #[test]
    fn test_evaluate_leet_dictionary_word() {
        let evaluation = evaluate("dr4g0n123456");
        assert!(evaluation.reasons.iter().any(|r| r.contains("'dragon'")));
    }

    #[test]
    fn test_evaluate_repeated_characters() {
        let evaluation = evaluate("aaaaaaaaaaaa");
        assert!(!evaluation.is_accepted());
        assert!(evaluation.reasons.iter().any(|r| r.contains("repeated")));
        assert!(!evaluation.reasons.iter().any(|r| r.contains("too short")));
    }

    #[test]
    fn test_evaluate_keyboard_sequence() {
        let evaluation = evaluate("qwerty123456");
        assert!(
            evaluation
                .reasons
                .iter()
                .any(|r| r.contains("'qwer'") || r.contains("'werty'"))
        );
    }

    #[test]
    fn test_evaluate_long_password_skips_diversity() {
        let evaluation = evaluate("correcthorsebatterystaple");
        assert!(evaluation.is_accepted(), "unexpected reasons: {:?}", evaluation.reasons);
    }

    #[test]
    fn test_evaluate_two_classes_short_rejected() {
        let evaluation = evaluate("zqvkxmwp2847");
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("similar"));
    }

    #[test]
    fn test_evaluate_three_classes_short_accepted() {
        let evaluation = evaluate("zqvkxmwp2847#");
        assert!(evaluation.is_accepted(), "unexpected reasons: {:?}", evaluation.reasons);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let words = words();
        for pwd in ["Zq#v8Kx!mW2p", "qwerty123456", "dr4g0n123456", "aaaaaaaaaaaa"] {
            let first = evaluate_password_strength(&secret(pwd), &words);
            let second = evaluate_password_strength(&secret(pwd), &words);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_evaluate_empty_word_set() {
        let evaluation = evaluate_password_strength(&secret("Zq#v8Kx!mW2p"), &WordSet::default());
        assert!(evaluation.is_accepted());
    }
}
