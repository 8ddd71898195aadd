use crate::core::{Candidates, MissingFilePolicy};
use crate::utils::error::{AuditError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Splits wordlist text into candidates: one per line, trimmed, nothing
/// filtered out. `\n`, `\r\n` and a lone `\r` all end a line. A trailing
/// line break does not add an empty candidate.
pub fn parse_candidates(content: &str) -> Candidates {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(|line| line.trim().to_string())
        .collect::<Vec<_>>()
        .into()
}

/// 讀取密碼清單檔案
pub fn read_candidates<P: AsRef<Path>>(path: P, policy: MissingFilePolicy) -> Result<Candidates> {
    let path = path.as_ref();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return match policy {
                MissingFilePolicy::Lenient => {
                    tracing::warn!(
                        "⚠️ Wordlist {} not found, nothing to attempt",
                        path.display()
                    );
                    println!("File {} not found.", path.display());
                    Ok(Candidates::default())
                }
                MissingFilePolicy::Strict => Err(AuditError::WordlistNotFound {
                    path: path.display().to_string(),
                }),
            };
        }
        Err(e) => return Err(AuditError::IoError(e)),
    };

    // 非 UTF-8 位元組以替代字元處理, 不讓整份清單失敗
    let content = String::from_utf8_lossy(&bytes);
    let candidates = parse_candidates(&content);

    tracing::debug!(
        "Loaded {} candidates from {}",
        candidates.len(),
        path.display()
    );

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_trims_each_line() {
        let candidates = parse_candidates("  hunter2 \nletmein\t\r\npassword\n");
        assert_eq!(candidates.as_slice(), ["hunter2", "letmein", "password"]);
    }

    #[test]
    fn test_parse_keeps_blank_and_whitespace_lines() {
        let candidates = parse_candidates("one\n\n   \ntwo");
        assert_eq!(candidates.as_slice(), ["one", "", "", "two"]);
    }

    #[test]
    fn test_parse_classic_mac_line_endings() {
        let candidates = parse_candidates("alpha\rbeta\r\rgamma\r");
        assert_eq!(candidates.as_slice(), ["alpha", "beta", "", "gamma"]);
    }

    #[test]
    fn test_parse_mixed_line_endings() {
        let candidates = parse_candidates("one\r\ntwo\rthree\nfour");
        assert_eq!(candidates.as_slice(), ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_candidates("").is_empty());
    }

    #[test]
    fn test_read_candidates_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file, "beta ").unwrap();
        writeln!(file, "alpha").unwrap();

        let candidates = read_candidates(file.path(), MissingFilePolicy::Strict).unwrap();
        assert_eq!(candidates.as_slice(), ["alpha", "beta", "alpha"]);
    }

    #[test]
    fn test_read_candidates_tolerates_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ok\n\xff\xfe\nfine\n").unwrap();

        let candidates = read_candidates(file.path(), MissingFilePolicy::Lenient).unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates.as_slice()[0], "ok");
        assert_eq!(candidates.as_slice()[2], "fine");
    }

    #[test]
    fn test_missing_file_lenient_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let candidates = read_candidates(&missing, MissingFilePolicy::Lenient).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_missing_file_strict_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = read_candidates(&missing, MissingFilePolicy::Strict).unwrap_err();
        assert!(matches!(err, AuditError::WordlistNotFound { .. }));
    }

    #[test]
    fn test_directory_is_error_even_when_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_candidates(dir.path(), MissingFilePolicy::Lenient).unwrap_err();
        assert!(matches!(err, AuditError::IoError(_)));
    }
}
