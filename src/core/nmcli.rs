use crate::core::{Attempt, AttemptOutcome, AttemptStatus, Connector};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

pub const DEFAULT_PROGRAM: &str = "nmcli";

/// A program plus its argument vector. Arguments go to the child verbatim;
/// no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// `nmcli dev wifi connect <ssid> password <password> [ifname <ifname>]`
    pub fn connect(program: &str, ssid: &str, password: &str, ifname: Option<&str>) -> Self {
        let mut args = vec![
            "dev".to_string(),
            "wifi".to_string(),
            "connect".to_string(),
            ssid.to_string(),
            "password".to_string(),
            password.to_string(),
        ];

        if let Some(ifname) = ifname {
            args.push("ifname".to_string());
            args.push(ifname.to_string());
        }

        Self {
            program: program.to_string(),
            args,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

/// POSIX shell rendering, safe to paste into a terminal.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '-' | '.' | '/' | ',' | ':' | '=' | '+' | '@' | '%')
}

pub fn shell_quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

#[derive(Debug, Clone)]
pub struct NmcliConnector {
    program: String,
    ifname: Option<String>,
}

impl NmcliConnector {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use another executable in place of `nmcli`, e.g. a wrapper script.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ifname: None,
        }
    }

    pub fn ifname(mut self, ifname: Option<String>) -> Self {
        self.ifname = ifname;
        self
    }

    pub fn invocation(&self, attempt: &Attempt) -> Invocation {
        Invocation::connect(
            &self.program,
            &attempt.ssid,
            &attempt.password,
            self.ifname.as_deref(),
        )
    }
}

impl Default for NmcliConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for NmcliConnector {
    async fn attempt(&self, attempt: &Attempt) -> AttemptOutcome {
        let invocation = self.invocation(attempt);
        let started = Instant::now();

        let output = match invocation.command().output().await {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to start {}: {}", invocation.program, e);
                return AttemptOutcome::spawn_failed(
                    attempt,
                    format!("failed to start '{}': {}", invocation.program, e),
                    started.elapsed(),
                );
            }
        };

        let status = if output.status.success() {
            AttemptStatus::Accepted
        } else {
            AttemptStatus::Rejected
        };

        AttemptOutcome {
            index: attempt.index,
            password: attempt.password.clone(),
            status,
            exit_code: output.status.code(),
            elapsed_ms: started.elapsed().as_millis() as u64,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
