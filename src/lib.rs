//! First-boot password policy
//!
//! This library enforces the password policy used when a device is set up
//! for the first time: it rejects weak passwords and applies the accepted
//! one to the account store exactly once.
//!
//! # Features
//!
//! - `cli` (default): Builds the `firstboot-passwd` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `FIRSTBOOT_DICT_PATH`: Path list of dictionary files
//!   (default: `/usr/share/dict/cracklib-small`)
//!
//! # Example
//!
//! ```rust,no_run
//! use firstboot_passwd::{dictionary_paths, evaluate_password_strength, load_word_set};
//! use secrecy::SecretString;
//!
//! // Load dictionaries (call once at startup)
//! let words = load_word_set(dictionary_paths());
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password, &words);
//!
//! for reason in &evaluation.reasons {
//!     println!("- {}", reason);
//! }
//! println!("Accepted: {}", evaluation.is_accepted());
//! ```

// Internal modules
mod credential;
mod evaluator;
mod marker;
mod sections;
mod session;
mod wordset;

pub mod policy;

// Public API
pub use credential::{CredentialError, CredentialStore, PasswdCommand};
pub use evaluator::{PasswordEvaluation, evaluate_password_strength};
pub use marker::{DEFAULT_MARKER_PATH, FileMarker, MarkerError, MarkerStore};
pub use sections::{DictionaryHit, HitKind, find_dictionary_word, obvious_patterns};
pub use session::{Outcome, Prompter, SessionError, run_session};
pub use wordset::{DEFAULT_DICT_PATH, DICT_PATH_ENV, WordSet, dictionary_paths, load_word_set};
