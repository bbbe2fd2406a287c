//! Timestamped error log files
//!
//! Compilation and validation failures are persisted as individual
//! files under a `logs/` directory so a user can inspect the full
//! engine output after the fact.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::BuildError;

/// Writes error reports into `<base>/logs/`
pub struct ErrorLogger {
    logs_dir: PathBuf,
}

impl ErrorLogger {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: base_dir.into().join("logs"),
        }
    }

    /// Persist one error report and return the path it was written to.
    ///
    /// `kind` names the failure category ("LaTeX", "Validation", ...)
    /// and becomes part of the filename, so files sort by category and
    /// then time.
    pub fn log(
        &self,
        kind: &str,
        content: &str,
        additional_info: Option<&str>,
    ) -> Result<PathBuf, BuildError> {
        fs::create_dir_all(&self.logs_dir)?;

        let now = Local::now();
        let filename = format!(
            "{}_error_{}.log",
            kind.to_lowercase(),
            now.format("%Y%m%d_%H%M%S")
        );
        let path = self.logs_dir.join(filename);

        let mut body = format!(
            "=== {} Error ===\nTime: {}\n\n",
            kind,
            now.format("%Y-%m-%d %H:%M:%S")
        );
        if let Some(info) = additional_info {
            body.push_str(&format!("Additional Information:\n{}\n\n", info));
        }
        body.push_str(&format!("Error Content:\n{}\n", content));

        fs::write(&path, body)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ErrorLogger::new(dir.path());
        let path = logger.log("LaTeX", "! Undefined control sequence.", None).unwrap();
        assert!(path.starts_with(dir.path().join("logs")));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("latex_error_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_log_body_contains_header_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ErrorLogger::new(dir.path());
        let path = logger
            .log("Validation", "missing slot", Some("Source: problem.tex\nReturn Code: 1"))
            .unwrap();
        let body = fs::read_to_string(path).unwrap();
        assert!(body.starts_with("=== Validation Error ==="));
        assert!(body.contains("Additional Information:\nSource: problem.tex"));
        assert!(body.contains("Error Content:\nmissing slot"));
    }

    #[test]
    fn test_additional_info_section_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ErrorLogger::new(dir.path());
        let path = logger.log("LaTeX", "boom", None).unwrap();
        let body = fs::read_to_string(path).unwrap();
        assert!(!body.contains("Additional Information:"));
    }
}
