//! Shared entry point of the `update-*` executables

use std::io::{
    self,
    Write,
};
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{
    ConfigError,
    load_settings,
};
use crate::document::PatchError;
use crate::patch::{
    Locale,
    patch_set,
};
use crate::patcher::{
    PatchOutcome,
    Patcher,
};

/// Locales handled by one executable and its closing message.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub locales: &'static [Locale],
    /// Printed after a blank line once every locale succeeded.
    pub closing: Option<&'static str>,
}

/// `update-translations`: English only.
pub const UPDATE_TRANSLATIONS: Script = Script { locales: &[Locale::En], closing: None };

/// `update-all-translations`: Russian and Uzbek.
pub const UPDATE_ALL_TRANSLATIONS: Script = Script {
    locales: &[Locale::Ru, Locale::Uz],
    closing: Some("✅ All translation files updated successfully!"),
};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("Failed to access the console or working directory: {0}")]
    Io(#[from] io::Error),
}

/// Install the stderr log subscriber (`RUST_LOG`, default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Run `script` against the current directory and report the result.
#[must_use]
pub fn main(script: &Script) -> ExitCode {
    init_logging();

    let result = std::env::current_dir()
        .map_err(CliError::from)
        .and_then(|root| run(script, root, &mut io::stdout().lock()));

    match result {
        Ok(outcomes) => {
            tracing::debug!("Patched {} locale file(s)", outcomes.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load settings from `workspace_root`, patch each locale of `script` and
/// write the confirmation lines to `out`.
///
/// # Errors
/// The first configuration, patch or console error.
pub fn run<W: Write>(
    script: &Script,
    workspace_root: PathBuf,
    out: &mut W,
) -> Result<Vec<PatchOutcome>, CliError> {
    let settings = load_settings(&workspace_root)?;
    let patcher = Patcher::new(workspace_root, settings);

    let mut outcomes = Vec::with_capacity(script.locales.len());
    for &locale in script.locales {
        let outcome = patcher.patch(locale)?;
        writeln!(out, "{}", patch_set(locale).confirmation)?;
        outcomes.push(outcome);
    }

    if let Some(closing) = script.closing {
        writeln!(out)?;
        writeln!(out, "{closing}")?;
    }
    Ok(outcomes)
}
