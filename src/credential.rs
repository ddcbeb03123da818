//! Account credential update
//!
//! Applies an accepted password to the system account store.

use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to start {program:?}: {source}")]
    Spawn {
        program: OsString,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to talk to the password utility: {0}")]
    Io(#[from] std::io::Error),
    #[error("Password utility exited with {code:?}: {diagnostics}")]
    Rejected {
        code: Option<i32>,
        diagnostics: String,
    },
}

/// Account store able to take a new password.
pub trait CredentialStore {
    /// Applies the password, returning diagnostic output on success.
    fn apply(&self, password: &SecretString) -> Result<String, CredentialError>;

    /// Whether the current password must be collected before applying.
    fn needs_current_password(&self) -> bool {
        false
    }

    fn provide_current_password(&mut self, _current: SecretString) {}
}

/// Changes the password by driving the interactive `passwd` utility.
///
/// The utility reads the current password (when configured) followed by the
/// new password twice from its standard input.
pub struct PasswdCommand {
    program: OsString,
    account: Option<String>,
    ask_current: bool,
    current: Option<SecretString>,
}

impl PasswdCommand {
    pub fn new() -> Self {
        Self {
            program: OsString::from("passwd"),
            account: None,
            ask_current: false,
            current: None,
        }
    }

    /// Uses another program in place of `passwd`.
    pub fn program<S: Into<OsString>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    /// Targets a named account instead of the invoking user.
    pub fn account<S: Into<String>>(mut self, account: S) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Asks the session for the current password, sent before the new one.
    pub fn ask_current(mut self, ask: bool) -> Self {
        self.ask_current = ask;
        self
    }

    fn stdin_payload(&self, password: &SecretString) -> SecretString {
        let mut input = String::new();
        if let Some(current) = &self.current {
            input.push_str(current.expose_secret());
            input.push('\n');
        }
        for _ in 0..2 {
            input.push_str(password.expose_secret());
            input.push('\n');
        }
        SecretString::new(input.into())
    }
}

impl Default for PasswdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for PasswdCommand {
    fn apply(&self, password: &SecretString) -> Result<String, CredentialError> {
        let mut cmd = Command::new(&self.program);
        if let Some(account) = &self.account {
            cmd.arg(account);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Updating password via {:?} (account: {:?})", self.program, self.account);

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CredentialError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let payload = self.stdin_payload(password);
            // the utility may exit before reading everything
            if let Err(e) = stdin.write_all(payload.expose_secret().as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostics = [stdout.trim(), stderr.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            #[cfg(feature = "tracing")]
            tracing::warn!("Password utility failed with {:?}", output.status.code());

            return Err(CredentialError::Rejected {
                code: output.status.code(),
                diagnostics,
            });
        }

        Ok(stdout)
    }

    fn needs_current_password(&self) -> bool {
        self.ask_current && self.current.is_none()
    }

    fn provide_current_password(&mut self, current: SecretString) {
        self.current = Some(current);
    }
}
