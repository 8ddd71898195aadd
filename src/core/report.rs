use crate::core::RunReport;
use crate::utils::error::Result;
use std::path::Path;

impl RunReport {
    pub fn summary_lines(&self) -> Vec<String> {
        if self.candidates == 0 {
            return vec!["No passwords to attempt.".to_string()];
        }

        let mut lines = vec![format!(
            "Tried {} of {} candidates against '{}' in {:.1}s ({} workers)",
            self.outcomes.len(),
            self.candidates,
            self.ssid,
            self.duration().num_milliseconds() as f64 / 1000.0,
            self.workers
        )];

        lines.push(format!(
            "Accepted: {}, rejected: {}, failed to start: {}",
            self.accepted_count(),
            self.rejected_count(),
            self.failed_count()
        ));

        for outcome in self.outcomes.iter().filter(|o| o.is_accepted()) {
            lines.push(format!(
                "🔑 Line {}: '{}'",
                outcome.index + 1,
                outcome.password
            ));
        }

        lines
    }
}

/// Writes the report as pretty-printed JSON, creating parent directories.
pub fn write_json_report<P: AsRef<Path>>(report: &RunReport, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;

    tracing::debug!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttemptOutcome, AttemptStatus};
    use chrono::Utc;

    fn report() -> RunReport {
        let now = Utc::now();
        RunReport {
            ssid: "HomeNet".to_string(),
            workers: 2,
            candidates: 2,
            started_at: now,
            finished_at: now,
            outcomes: vec![
                AttemptOutcome {
                    index: 0,
                    password: "wrong".to_string(),
                    status: AttemptStatus::Rejected,
                    exit_code: Some(4),
                    elapsed_ms: 12,
                    stdout: String::new(),
                    stderr: "Error: Secrets were required".to_string(),
                },
                AttemptOutcome {
                    index: 1,
                    password: "right".to_string(),
                    status: AttemptStatus::Accepted,
                    exit_code: Some(0),
                    elapsed_ms: 30,
                    stdout: "Device 'wlan0' successfully activated".to_string(),
                    stderr: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_summary_lists_accepted_candidates() {
        let lines = report().summary_lines();

        assert!(lines[0].contains("Tried 2 of 2 candidates against 'HomeNet'"));
        assert_eq!(lines[1], "Accepted: 1, rejected: 1, failed to start: 0");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("Line 2: 'right'"));
    }

    #[test]
    fn test_summary_for_empty_wordlist() {
        let mut empty = report();
        empty.candidates = 0;
        empty.outcomes.clear();

        assert_eq!(empty.summary_lines(), vec!["No passwords to attempt."]);
    }

    #[test]
    fn test_write_json_report_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.json");

        write_json_report(&report(), &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["ssid"], "HomeNet");
        assert_eq!(json["outcomes"][0]["status"], "rejected");
        assert_eq!(json["outcomes"][1]["status"], "accepted");
        assert_eq!(json["outcomes"][1]["exit_code"], 0);
    }
}
