//! Load → patch → write, per locale file

use std::path::{
    Path,
    PathBuf,
};

use crate::config::PatcherSettings;
use crate::document::{
    LocaleDocument,
    PatchError,
    PatchSummary,
};
use crate::patch::{
    Locale,
    PatchSet,
    patch_set,
};

/// Result of patching one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub locale: Locale,
    pub path: PathBuf,
    pub summary: PatchSummary,
}

/// Patch the document at `path` with default settings.
///
/// The file is rewritten unconditionally, even when nothing changed.
///
/// # Errors
/// See [`PatchError`]. Nothing is written unless loading and patching succeed.
pub fn apply_patch(path: &Path, patch: &PatchSet) -> Result<PatchOutcome, PatchError> {
    apply_patch_with(path, patch, &PatcherSettings::default())
}

/// Patch the document at `path` using the given output settings.
///
/// # Errors
/// See [`PatchError`].
pub fn apply_patch_with(
    path: &Path,
    patch: &PatchSet,
    settings: &PatcherSettings,
) -> Result<PatchOutcome, PatchError> {
    let mut document = LocaleDocument::load(path)?;
    let summary = document.apply(patch)?;
    document.save(settings.format(), settings.write_mode)?;

    tracing::info!(
        locale = %patch.locale,
        path = %path.display(),
        changed = summary.changed(),
        "Patched locale document"
    );
    Ok(PatchOutcome { locale: patch.locale, path: path.to_path_buf(), summary })
}

/// Applies the built-in patch table to the locale files of a workspace.
#[derive(Debug, Clone)]
pub struct Patcher {
    /// Directory `localesDir` is resolved against
    workspace_root: PathBuf,
    settings: PatcherSettings,
}

impl Patcher {
    #[must_use]
    pub const fn new(workspace_root: PathBuf, settings: PatcherSettings) -> Self {
        Self { workspace_root, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &PatcherSettings {
        &self.settings
    }

    /// Path of a locale file: `<workspace>/<localesDir>/<code>.json`.
    #[must_use]
    pub fn locale_path(&self, locale: Locale) -> PathBuf {
        self.workspace_root.join(&self.settings.locales_dir).join(locale.file_name())
    }

    /// Patch a single locale file.
    ///
    /// # Errors
    /// See [`PatchError`].
    pub fn patch(&self, locale: Locale) -> Result<PatchOutcome, PatchError> {
        apply_patch_with(&self.locale_path(locale), patch_set(locale), &self.settings)
    }

    /// Patch locale files in order, stopping at the first failure.
    ///
    /// Files patched before the failure stay patched; later ones are not
    /// touched.
    ///
    /// # Errors
    /// The first [`PatchError`] encountered.
    pub fn run(&self, locales: &[Locale]) -> Result<Vec<PatchOutcome>, PatchError> {
        locales.iter().map(|locale| self.patch(*locale)).collect()
    }
}
