use crate::config::prompt::Prompter;
use crate::config::toml_config::TomlConfig;
use crate::core::dispatcher::{DEFAULT_WORKERS, MAX_WORKERS};
use crate::core::nmcli::DEFAULT_PROGRAM;
use crate::core::{ConfigProvider, MissingFilePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_ssid, Validate,
};
use std::io::{BufRead, Write};

/// One source of settings (command line, config file). Unset fields fall
/// through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsLayer {
    pub ssid: Option<String>,
    pub wordlist: Option<String>,
    pub workers: Option<usize>,
    pub program: Option<String>,
    pub ifname: Option<String>,
    pub strict: Option<bool>,
    pub report: Option<String>,
}

impl SettingsLayer {
    /// `self` wins over `lower` field by field.
    pub fn merge(self, lower: SettingsLayer) -> SettingsLayer {
        SettingsLayer {
            ssid: self.ssid.or(lower.ssid),
            wordlist: self.wordlist.or(lower.wordlist),
            workers: self.workers.or(lower.workers),
            program: self.program.or(lower.program),
            ifname: self.ifname.or(lower.ifname),
            strict: self.strict.or(lower.strict),
            report: self.report.or(lower.report),
        }
    }

    /// Fills the SSID and wordlist from the prompter when no layer set them,
    /// applies defaults, and validates the result.
    pub fn resolve<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<AuditSettings> {
        let ssid = match self.ssid {
            Some(ssid) => ssid,
            None => prompter.ask_ssid()?,
        };

        let wordlist_path = match self.wordlist {
            Some(path) => path,
            None => prompter.ask_wordlist()?,
        };

        let settings = AuditSettings {
            ssid,
            wordlist_path,
            workers: self.workers.unwrap_or(DEFAULT_WORKERS),
            program: self.program.unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
            ifname: self.ifname,
            policy: MissingFilePolicy::from_strict(self.strict.unwrap_or(false)),
            report_path: self.report,
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl From<TomlConfig> for SettingsLayer {
    fn from(config: TomlConfig) -> Self {
        SettingsLayer {
            ssid: config.target.ssid,
            wordlist: config.wordlist.path,
            workers: config.runner.workers,
            program: config.runner.program,
            ifname: config.target.ifname,
            strict: config.wordlist.strict,
            report: config.report.path,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    pub ssid: String,
    pub wordlist_path: String,
    pub workers: usize,
    pub program: String,
    pub ifname: Option<String>,
    pub policy: MissingFilePolicy,
    pub report_path: Option<String>,
}

impl ConfigProvider for AuditSettings {
    fn ssid(&self) -> &str {
        &self.ssid
    }

    fn wordlist_path(&self) -> &str {
        &self.wordlist_path
    }

    fn missing_file_policy(&self) -> MissingFilePolicy {
        self.policy
    }

    fn workers(&self) -> usize {
        self.workers
    }
}

impl Validate for AuditSettings {
    fn validate(&self) -> Result<()> {
        validate_ssid("ssid", &self.ssid)?;
        validate_path("wordlist", &self.wordlist_path)?;
        validate_range("workers", self.workers, 1, MAX_WORKERS)?;
        validate_non_empty_string("program", &self.program)?;

        if let Some(ifname) = &self.ifname {
            validate_non_empty_string("ifname", ifname)?;
        }
        if let Some(report) = &self.report_path {
            validate_path("report", report)?;
        }

        Ok(())
    }
}
