//! Append-only diagnostic log file, written only in debug mode.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use bevy::prelude::*;

use super::config::DayCycleConfig;
use crate::error::StartupError;

/// Line prefix for every record.
const LINE_PREFIX: &str = "INFO: ";

/// Buffered sink for diagnostic lines. Flushed once per frame.
///
/// A disabled sink accepts records and drops them, so callers never need to
/// check the debug flag themselves.
#[derive(Resource, Debug, Default)]
pub struct DiagnosticLog {
    writer: Option<BufWriter<File>>,
}

impl DiagnosticLog {
    /// Opens the sink at `config.log_path` when debug mode is on.
    pub fn from_config(config: &DayCycleConfig) -> Result<Self, StartupError> {
        if config.debug {
            Self::open(&config.log_path)
        } else {
            Ok(Self::disabled())
        }
    }

    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self, StartupError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| StartupError::DiagnosticLog {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Diagnostic log at {:?}", path);
        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn disabled() -> Self {
        Self { writer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Buffers one line. Write failures are logged and otherwise ignored.
    pub fn record(&mut self, message: impl Display) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{LINE_PREFIX}{message}") {
            warn!("Failed to write diagnostic log: {}", e);
        }
    }

    pub fn flush(&mut self) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(e) = writer.flush() {
            warn!("Failed to flush diagnostic log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_drops_records() {
        let mut log = DiagnosticLog::disabled();
        assert!(!log.is_enabled());
        log.record("run");
        log.flush();
    }

    #[test]
    fn test_disabled_without_debug_flag() {
        let dir = tempfile::tempdir().unwrap();
        let config = DayCycleConfig {
            log_path: dir.path().join("daycycle.log"),
            ..Default::default()
        };
        let log = DiagnosticLog::from_config(&config).unwrap();
        assert!(!log.is_enabled());
        assert!(!config.log_path.exists());
    }

    #[test]
    fn test_lines_written_on_flush() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daycycle.log");
        let mut log = DiagnosticLog::open(&path).unwrap();
        log.record("run");
        log.record("dawn -> morning");
        log.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "INFO: run\nINFO: dawn -> morning\n");
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daycycle.log");
        {
            let mut log = DiagnosticLog::open(&path).unwrap();
            log.record("run");
            log.flush();
        }
        let mut log = DiagnosticLog::open(&path).unwrap();
        log.record("run");
        log.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_open_failure_is_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("daycycle.log");
        let err = DiagnosticLog::open(&path).unwrap_err();
        assert!(matches!(err, StartupError::DiagnosticLog { .. }));
        assert!(err.to_string().contains("daycycle.log"));
    }
}
