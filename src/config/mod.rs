//! Workspace settings (`.locale-patcher.json`)
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub use types::{
    ConfigError,
    PatcherSettings,
    ValidationError,
};
