//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    PatcherSettings,
};

/// Settings file name, looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".locale-patcher.json";

/// ワークスペースの設定を読み込み、検証する
///
/// 設定ファイルがなければデフォルト値を使う。ファイル内で省略された項目もデフォルト値になる。
///
/// # Errors
/// - `IoError`: 設定ファイルの読み込みエラー
/// - `ParseError`: JSON パースエラー（未知の `writeMode` を含む）
/// - `ValidationErrors`: 検証で見つかった全ての問題
pub fn load_settings(workspace_root: &Path) -> Result<PatcherSettings, ConfigError> {
    let settings = read_settings_file(workspace_root)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    tracing::debug!(?settings, "Using settings");
    Ok(settings)
}

/// `Ok(None)` when the workspace has no settings file.
fn read_settings_file(workspace_root: &Path) -> Result<Option<PatcherSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("No settings file at {:?}, using defaults", config_path);
        return Ok(None);
    }

    tracing::debug!("Reading settings from {:?}", config_path);
    let content = std::fs::read_to_string(&config_path)?;
    Ok(Some(serde_json::from_str(&content)?))
}
