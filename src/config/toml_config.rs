use crate::core::dispatcher::MAX_WORKERS;
use crate::utils::error::{AuditError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_ssid, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub target: TargetConfig,
    pub wordlist: WordlistConfig,
    pub runner: RunnerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub ssid: Option<String>,
    pub ifname: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordlistConfig {
    pub path: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub workers: Option<usize>,
    pub program: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AuditError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AuditError::TomlError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${WIFI_SSID}), 未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AuditError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(ssid) = &self.target.ssid {
            validate_ssid("target.ssid", ssid)?;
        }

        if let Some(ifname) = &self.target.ifname {
            validate_non_empty_string("target.ifname", ifname)?;
        }

        if let Some(path) = &self.wordlist.path {
            validate_path("wordlist.path", path)?;
        }

        if let Some(workers) = self.runner.workers {
            validate_range("runner.workers", workers, 1, MAX_WORKERS)?;
        }

        if let Some(program) = &self.runner.program {
            validate_non_empty_string("runner.program", program)?;
        }

        if let Some(path) = &self.report.path {
            validate_path("report.path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[target]
ssid = "HomeNet"
ifname = "wlan0"

[wordlist]
path = "lists/common.txt"
strict = true

[runner]
workers = 2
program = "/usr/bin/nmcli"

[report]
path = "./audit.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.target.ssid.as_deref(), Some("HomeNet"));
        assert_eq!(config.target.ifname.as_deref(), Some("wlan0"));
        assert_eq!(config.wordlist.path.as_deref(), Some("lists/common.txt"));
        assert_eq!(config.wordlist.strict, Some(true));
        assert_eq!(config.runner.workers, Some(2));
        assert_eq!(config.report.path.as_deref(), Some("./audit.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[target]\nssid = \"Cafe\"\n").unwrap();
        assert_eq!(config.target.ssid.as_deref(), Some("Cafe"));
        assert!(config.wordlist.path.is_none());
        assert!(config.runner.workers.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WIFI_PASSCHECK_TEST_SSID", "FromEnv");

        let config = TomlConfig::from_toml_str(
            "[target]\n\
             ssid = \"${WIFI_PASSCHECK_TEST_SSID}\"\n\
             ifname = \"${WIFI_PASSCHECK_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(config.target.ssid.as_deref(), Some("FromEnv"));
        assert_eq!(
            config.target.ifname.as_deref(),
            Some("${WIFI_PASSCHECK_UNSET_VAR}")
        );

        std::env::remove_var("WIFI_PASSCHECK_TEST_SSID");
    }

    #[test]
    fn test_invalid_toml_reports_toml_error() {
        let err = TomlConfig::from_toml_str("[runner\nworkers = 2").unwrap_err();
        assert!(matches!(err, AuditError::TomlError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = TomlConfig::from_toml_str("[runner]\nworkers = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[target]\nssid = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[wordlist]\npath = \"rockyou-mini.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.wordlist.path.as_deref(), Some("rockyou-mini.txt"));
    }

    #[test]
    fn test_unreadable_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TomlConfig::from_file(dir.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, AuditError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
