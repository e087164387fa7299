// src/core/diagnostics.rs

use crate::core::errors::{AutoResult, ErrorKind};
use chrono::{Local, SecondsFormat};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Append-only log of failure events, one `<timestamp>\t<message>` line per event.
///
/// Creating the log truncates any previous file. Every line is flushed before
/// `record` returns, so the file is always current even if the process dies.
#[derive(Debug)]
pub struct DiagnosticLog {
    path: PathBuf,
    writer: Mutex<File>,
}

impl DiagnosticLog {
    /// Creates (or truncates) the log file at `path`, creating parent directories as needed.
    pub fn create(path: &Path) -> AutoResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        log::debug!("Diagnostic log initialized at '{}'", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(file),
        })
    }

    /// The file this log writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one timestamped line for `kind` and flushes it.
    pub fn record(&self, kind: ErrorKind) -> io::Result<()> {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Millis, false);
        // A poisoned writer only means another thread panicked mid-write; the file is still usable.
        let mut file = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(file, "{}\t{}", timestamp, kind.message())?;
        file.flush()
    }

    /// Reads back every line written so far.
    pub fn lines(&self) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_record_writes_timestamped_lines() {
        let dir = tempdir().unwrap();
        let log = DiagnosticLog::create(&dir.path().join("log.txt")).unwrap();

        log.record(ErrorKind::OptionNotFound).unwrap();
        log.record(ErrorKind::SourceNotFound).unwrap();

        let lines = log.lines().unwrap();
        assert_eq!(lines.len(), 2);
        let (stamp, message) = lines[0].split_once('\t').unwrap();
        assert!(!stamp.is_empty());
        assert_eq!(message, "The option name was not found!");
        assert!(lines[1].ends_with("\tThe file was not found!"));
    }

    #[test]
    fn test_create_truncates_previous_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("log.txt");

        let first = DiagnosticLog::create(&path).unwrap();
        first.record(ErrorKind::ModelNameNotFound).unwrap();
        drop(first);

        let second = DiagnosticLog::create(&path).unwrap();
        assert!(second.lines().unwrap().is_empty());
    }
}
