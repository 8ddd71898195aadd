use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do when the wordlist file does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFilePolicy {
    /// Warn and carry on with nothing to attempt.
    #[default]
    Lenient,
    /// Abort the run before any attempt starts.
    Strict,
}

impl MissingFilePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Ordered candidate passwords, one per wordlist line. Duplicates and empty
/// strings are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates(Vec<String>);

impl Candidates {
    pub fn new(passwords: Vec<String>) -> Self {
        Self(passwords)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Pairs every candidate with the target network.
    pub fn attempts(&self, ssid: &str) -> Vec<Attempt> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, password)| Attempt {
                index,
                ssid: ssid.to_string(),
                password: password.clone(),
            })
            .collect()
    }
}

impl From<Vec<String>> for Candidates {
    fn from(passwords: Vec<String>) -> Self {
        Self::new(passwords)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// 0-based line position in the wordlist.
    pub index: usize,
    pub ssid: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttemptStatus {
    /// The connect command exited with status 0.
    Accepted,
    /// Non-zero exit or killed by a signal.
    Rejected,
    SpawnFailed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub index: usize,
    pub password: String,
    #[serde(flatten)]
    pub status: AttemptStatus,
    pub exit_code: Option<i32>,
    pub elapsed_ms: u64,
    pub stdout: String,
    pub stderr: String,
}

impl AttemptOutcome {
    pub fn spawn_failed(attempt: &Attempt, message: String, elapsed: Duration) -> Self {
        Self {
            index: attempt.index,
            password: attempt.password.clone(),
            status: AttemptStatus::SpawnFailed { message },
            exit_code: None,
            elapsed_ms: elapsed.as_millis() as u64,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == AttemptStatus::Accepted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub ssid: String,
    pub workers: usize,
    pub candidates: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<AttemptOutcome>,
}

impl RunReport {
    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == AttemptStatus::Rejected)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, AttemptStatus::SpawnFailed { .. }))
            .count()
    }

    pub fn accepted_passwords(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_accepted())
            .map(|o| o.password.as_str())
            .collect()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
