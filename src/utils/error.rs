use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Wordlist not found: {path}")]
    WordlistNotFound { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML error: {message}")]
    TomlError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Prompt error: {message}")]
    PromptError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AuditError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuditError::TomlError { .. }
            | AuditError::ConfigError { .. }
            | AuditError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AuditError::WordlistNotFound { .. } | AuditError::PromptError { .. } => {
                ErrorCategory::Input
            }
            AuditError::IoError(_) | AuditError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AuditError::IoError(_) | AuditError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AuditError::IoError(e) => format!("檔案操作失敗: {}", e),
            AuditError::WordlistNotFound { path } => format!("File {} not found.", path),
            AuditError::SerializationError(e) => format!("無法輸出報告: {}", e),
            AuditError::TomlError { message } => format!("配置檔格式錯誤: {}", message),
            AuditError::ConfigError { message } => format!("配置錯誤: {}", message),
            AuditError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' 的值 '{}' 無效: {}", field, value, reason),
            AuditError::PromptError { message } => format!("無法讀取輸入: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AuditError::IoError(_) => "Check file permissions and free disk space",
            AuditError::WordlistNotFound { .. } => {
                "Pass an existing file with --wordlist, or drop --strict to continue without one"
            }
            AuditError::SerializationError(_) => "Retry without --report or choose another path",
            AuditError::TomlError { .. } => "Make sure the config file is valid TOML",
            AuditError::ConfigError { .. }
            | AuditError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and config file values"
            }
            AuditError::PromptError { .. } => "Provide --ssid and --wordlist on the command line",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
