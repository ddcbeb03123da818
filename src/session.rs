//! Interactive first-boot session
//!
//! Runs once per device: prompts until a password passes the policy, applies
//! it to the account store, then records the one-time marker.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::credential::CredentialStore;
use crate::evaluator::evaluate_password_strength;
use crate::marker::{MarkerError, MarkerStore};
use crate::policy::MIN_LENGTH;
use crate::wordset::WordSet;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read password: {0}")]
    Prompt(#[from] std::io::Error),
    #[error("Password changed but the marker could not be recorded: {0}")]
    Marker(#[from] MarkerError),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The marker was already present; nothing was asked.
    AlreadyDone,
    /// The password was changed and the marker recorded.
    Changed,
}

/// Terminal interaction used by the session.
pub trait Prompter {
    /// Reads a secret without echoing it.
    fn password(&mut self, prompt: &str) -> std::io::Result<SecretString>;

    /// Shows an informational line to the user.
    fn notice(&mut self, message: &str);
}

/// Runs the first-boot password change.
///
/// The word set is only loaded when the marker is absent. Mismatched
/// entries, rejected passwords and failed updates all re-prompt; the loop
/// ends on success or when the prompter fails.
pub fn run_session<P, M, C, F>(
    prompter: &mut P,
    marker: &M,
    store: &mut C,
    account: Option<&str>,
    load_words: F,
) -> Result<Outcome, SessionError>
where
    P: Prompter,
    M: MarkerStore,
    C: CredentialStore,
    F: FnOnce() -> WordSet,
{
    if marker.exists() {
        prompter.notice("Password already changed, exiting.");
        return Ok(Outcome::AlreadyDone);
    }

    let who = account.unwrap_or("this account");
    prompter.notice(&format!(
        "Password change required for {}. Ensure that you will remember this password.",
        who
    ));
    prompter.notice(&format!(
        "The minimum length is {}. Please do not use dictionary words or chains of repeated characters.",
        MIN_LENGTH
    ));

    let words = load_words();

    if store.needs_current_password() {
        let current = prompter.password("Current password")?;
        store.provide_current_password(current);
    }

    loop {
        let first = prompter.password("Enter new password")?;
        let second = prompter.password("Re-enter new password")?;

        if first.expose_secret() != second.expose_secret() {
            prompter.notice("Passwords do not match. Try again.");
            continue;
        }

        let evaluation = evaluate_password_strength(&first, &words);
        if !evaluation.is_accepted() {
            prompter.notice("Password too weak:");
            for reason in &evaluation.reasons {
                prompter.notice(&format!("- {}", reason));
            }
            prompter.notice("Please try again.");
            continue;
        }

        prompter.notice("Password accepted. Updating password...");
        match store.apply(&first) {
            Ok(diagnostics) => {
                if !diagnostics.trim().is_empty() {
                    prompter.notice(diagnostics.trim());
                }
                marker.set()?;
                prompter.notice("Password has been updated.");
                return Ok(Outcome::Changed);
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Credential update failed: {}", e);

                prompter.notice(&e.to_string());
                prompter.notice("Failed to update password. Try again.");
            }
        }
    }
}
