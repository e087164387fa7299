// src/core/settings.rs

use crate::constants::{DEFAULT_LOG_FILENAME, DEFAULT_SNAPSHOT_FILENAME};
use crate::core::diagnostics::DiagnosticLog;
use crate::core::errors::{AutoError, AutoResult};
use crate::core::paths;
use crate::core::recovery::{FailFast, NameResolver, PromptResolver, Recovery};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How lookup misses on option set and option names are resolved.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryMode {
    /// Ask the operator for a replacement name until one resolves.
    #[default]
    Interactive,
    /// Fail the operation on the first miss.
    FailFast,
}

/// The deserialized structure of a `carconf.toml` file.
/// Every key is optional; missing keys keep their defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Where failure events are logged. Relative paths are relative to the working directory.
    pub log_file: PathBuf,
    /// Default snapshot location for `save` and `load`.
    pub snapshot_file: PathBuf,
    /// Recovery policy for name lookups.
    pub recovery: RecoveryMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILENAME),
            snapshot_file: PathBuf::from(DEFAULT_SNAPSHOT_FILENAME),
            recovery: RecoveryMode::default(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> AutoResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings at '{}'; using defaults.", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(AutoError::Io(e)),
        };
        toml::from_str(&content).map_err(|source| AutoError::Settings {
            path: path.display().to_string(),
            source,
        })
    }

    /// Reads settings from the system config directory, falling back to defaults.
    pub fn load_default() -> AutoResult<Self> {
        match paths::get_settings_path() {
            Ok(path) => Self::load(&path),
            Err(e) => {
                log::warn!("{} Using default settings.", e);
                Ok(Self::default())
            }
        }
    }

    /// The resolver matching the configured recovery mode.
    pub fn resolver(&self) -> Box<dyn NameResolver> {
        match self.recovery {
            RecoveryMode::Interactive => Box::new(PromptResolver::default()),
            RecoveryMode::FailFast => Box::new(FailFast),
        }
    }

    /// Creates (truncating) the diagnostic log and wires up the recovery protocol.
    pub fn build_recovery(&self) -> AutoResult<Recovery> {
        let log = DiagnosticLog::create(&self.log_file)?;
        Ok(Recovery::new(self.resolver(), Arc::new(log)))
    }
}
