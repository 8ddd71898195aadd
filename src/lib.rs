pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{AuditSettings, SettingsLayer};
pub use core::{dispatcher::Dispatcher, engine::AuditEngine, nmcli::NmcliConnector};
pub use domain::model::{
    Attempt, AttemptOutcome, AttemptStatus, Candidates, MissingFilePolicy, RunReport,
};
pub use utils::error::{AuditError, Result};
