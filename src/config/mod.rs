#[cfg(feature = "cli")]
pub mod cli;
pub mod prompt;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use settings::{AuditSettings, SettingsLayer};
