use crate::utils::error::{AuditError, Result};
use std::io::{BufRead, Write};

pub const DEFAULT_WORDLIST: &str = "password.txt";

/// Line-oriented question/answer over any reader and writer. The binary
/// wires it to stdin/stdout.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` without a newline and reads one answer line.
    /// The line terminator is removed, other whitespace is kept.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(AuditError::PromptError {
                message: format!("input closed while waiting for: {}", question.trim()),
            });
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    pub fn ask_ssid(&mut self) -> Result<String> {
        self.ask("Enter the SSID of the Wi-Fi network: ")
    }

    /// A blank answer selects [`DEFAULT_WORDLIST`].
    pub fn ask_wordlist(&mut self) -> Result<String> {
        let answer = self.ask(&format!(
            "Enter the path to the password file (default: {}): ",
            DEFAULT_WORDLIST
        ))?;

        if answer.trim().is_empty() {
            Ok(DEFAULT_WORDLIST.to_string())
        } else {
            Ok(answer.trim().to_string())
        }
    }
}
