use crate::config::prompt::Prompter;
use crate::config::settings::{AuditSettings, SettingsLayer};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "wifi-passcheck")]
#[command(about = "Check a Wi-Fi network you control against a password wordlist via nmcli")]
pub struct CliConfig {
    /// Target network name (prompted for when omitted)
    #[arg(long)]
    pub ssid: Option<String>,

    /// Wordlist path, one candidate per line (prompted for when omitted)
    #[arg(short, long)]
    pub wordlist: Option<String>,

    /// Number of concurrent connection attempts [default: 4]
    #[arg(long)]
    pub workers: Option<usize>,

    /// Executable used in place of nmcli [default: nmcli]
    #[arg(long)]
    pub program: Option<String>,

    /// Wireless interface to connect with
    #[arg(long)]
    pub ifname: Option<String>,

    /// Fail when the wordlist does not exist instead of attempting nothing
    #[arg(long)]
    pub strict: bool,

    /// Print the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of every attempt to this path
    #[arg(long)]
    pub report: Option<String>,

    /// TOML config file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flags as a settings layer. `--strict` can only switch strict mode on.
    pub fn layer(&self) -> SettingsLayer {
        SettingsLayer {
            ssid: self.ssid.clone(),
            wordlist: self.wordlist.clone(),
            workers: self.workers,
            program: self.program.clone(),
            ifname: self.ifname.clone(),
            strict: self.strict.then_some(true),
            report: self.report.clone(),
        }
    }

    /// Merges flags over the optional config file and prompts for whatever
    /// is still missing.
    pub fn load_settings<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<AuditSettings> {
        let file_layer = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                SettingsLayer::from(config)
            }
            None => SettingsLayer::default(),
        };

        self.layer().merge(file_layer).resolve(prompter)
    }
}
