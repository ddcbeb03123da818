//! firstboot-passwd - force a password change on first boot

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Password;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use firstboot_passwd::{
    DEFAULT_MARKER_PATH, FileMarker, PasswdCommand, Prompter, dictionary_paths,
    load_word_set, run_session,
};

/// Prompts for a new account password that passes the first-boot policy
/// and applies it once.
#[derive(Parser)]
#[command(name = "firstboot-passwd", version, about, long_about = None)]
struct Cli {
    /// Dictionary file to check against (repeatable)
    #[arg(long = "dict", value_name = "PATH")]
    dicts: Vec<PathBuf>,

    /// Marker file recording that the password was already changed
    #[arg(long, env = "FIRSTBOOT_MARKER", default_value = DEFAULT_MARKER_PATH)]
    marker: PathBuf,

    /// Account whose password is changed (defaults to the invoking user)
    #[arg(long)]
    account: Option<String>,

    /// Program used to change the password
    #[arg(long, default_value = "passwd")]
    passwd_program: PathBuf,

    /// Do not ask for the current password (e.g. when running as root)
    #[arg(long)]
    no_current: bool,
}

/// Reads passwords from the terminal without echo.
struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn password(&mut self, prompt: &str) -> std::io::Result<SecretString> {
        let p = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(std::io::Error::other)?;
        Ok(SecretString::new(p.into()))
    }

    fn notice(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Builds the log filter from a `RUST_LOG` value, falling back to `warn`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> ExitCode {
    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let marker = FileMarker::new(cli.marker);

    let mut store = PasswdCommand::new()
        .program(cli.passwd_program)
        .ask_current(!cli.no_current);
    if let Some(account) = &cli.account {
        store = store.account(account.clone());
    }

    let paths = if cli.dicts.is_empty() {
        dictionary_paths()
    } else {
        cli.dicts
    };

    let outcome = run_session(
        &mut TerminalPrompter,
        &marker,
        &mut store,
        cli.account.as_deref(),
        || load_word_set(&paths),
    )
    .context("password change did not complete")?;

    tracing::info!("Session finished: {:?}", outcome);

    // an earlier run counts as a completed setup too
    Ok(ExitCode::SUCCESS)
}
