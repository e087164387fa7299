// src/core/errors.rs

use std::fmt;
use thiserror::Error;

/// The numbered failure conditions that can occur while resolving names or
/// loading an automobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An option group ("option set") name has no match.
    OptionSetNotFound,
    /// The model name of an automobile is missing.
    ModelNameNotFound,
    /// An option name has no match inside its group.
    OptionNotFound,
    /// A group or option collection is unexpectedly empty.
    OptionSizeNotFound,
    /// The parser input source does not exist.
    SourceNotFound,
}

impl ErrorKind {
    /// Every kind, ordered by code.
    pub const ALL: [Self; 5] = [
        Self::OptionSetNotFound,
        Self::ModelNameNotFound,
        Self::OptionNotFound,
        Self::OptionSizeNotFound,
        Self::SourceNotFound,
    ];

    /// The stable numeric code of the kind.
    pub fn code(self) -> u8 {
        match self {
            Self::OptionSetNotFound => 1,
            Self::ModelNameNotFound => 2,
            Self::OptionNotFound => 3,
            Self::OptionSizeNotFound => 4,
            Self::SourceNotFound => 5,
        }
    }

    /// Looks a kind up by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// The fixed, human-readable message written to the console and the diagnostic log.
    pub fn message(self) -> &'static str {
        match self {
            Self::OptionSetNotFound => "The option set name was not found!",
            Self::ModelNameNotFound => "The model name was not found!",
            Self::OptionNotFound => "The option name was not found!",
            Self::OptionSizeNotFound => "The option sizes were not found!",
            Self::SourceNotFound => "The file was not found!",
        }
    }

    /// Whether a replacement name can be requested from a resolver.
    pub fn has_interactive_fix(self) -> bool {
        matches!(self, Self::OptionSetNotFound | Self::OptionNotFound)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

/// A name lookup miss raised by the data model.
///
/// The model never prompts or logs; it hands this back to whoever drives the
/// recovery protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: '{name}'")]
pub struct NotFound {
    /// Which kind of name missed.
    pub kind: ErrorKind,
    /// The name that was looked up.
    pub name: String,
}

impl NotFound {
    pub(crate) fn option_set(name: &str) -> Self {
        Self {
            kind: ErrorKind::OptionSetNotFound,
            name: name.to_string(),
        }
    }

    pub(crate) fn option(name: &str) -> Self {
        Self {
            kind: ErrorKind::OptionNotFound,
            name: name.to_string(),
        }
    }
}

/// Represents every error the catalog, parser and snapshot layers can surface.
#[derive(Error, Debug)]
pub enum AutoError {
    /// A failure of a known kind for which no fix was available or the resolver gave up.
    #[error("{kind}")]
    Unresolved {
        /// The kind that could not be resolved.
        kind: ErrorKind,
    },
    /// The source text is malformed.
    #[error("Parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// A filesystem I/O error occurred.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// An error occurred while serializing a snapshot to `bincode` binary format.
    #[error("Failed to encode snapshot: {0}")]
    SnapshotEncode(#[from] bincode::error::EncodeError),
    /// An error occurred while deserializing a snapshot from `bincode` binary format.
    #[error("Failed to decode snapshot: {0}")]
    SnapshotDecode(#[from] bincode::error::DecodeError),
    /// The snapshot file could not be decompressed or carries an unknown version.
    #[error("Snapshot '{path}' is corrupt: {reason}")]
    SnapshotCorrupt {
        /// The offending file.
        path: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {source}")]
    Settings {
        /// The settings file path.
        path: String,
        /// The underlying parsing error from the `toml` crate.
        #[source]
        source: toml::de::Error,
    },
    /// The interactive input source failed.
    #[error("Could not read a replacement name: {0}")]
    Prompt(String),
    /// Another thread panicked while holding the automobile's lock.
    #[error("The lock of automobile '{name}' is poisoned.")]
    Poisoned {
        /// The automobile name.
        name: String,
    },
}

impl AutoError {
    /// The taxonomy kind of the error, if it has one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Unresolved { kind } => Some(*kind),
            _ => None,
        }
    }
}

/// Shorthand result type for the crate.
pub type AutoResult<T> = Result<T, AutoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(0), None);
        assert_eq!(ErrorKind::from_code(6), None);
    }

    #[test]
    fn test_only_name_kinds_have_a_fix() {
        assert!(ErrorKind::OptionSetNotFound.has_interactive_fix());
        assert!(ErrorKind::OptionNotFound.has_interactive_fix());
        assert!(!ErrorKind::ModelNameNotFound.has_interactive_fix());
        assert!(!ErrorKind::OptionSizeNotFound.has_interactive_fix());
        assert!(!ErrorKind::SourceNotFound.has_interactive_fix());
    }

    #[test]
    fn test_unresolved_display_carries_message() {
        let err = AutoError::Unresolved {
            kind: ErrorKind::SourceNotFound,
        };
        assert_eq!(err.to_string(), "[5] The file was not found!");
        assert_eq!(err.kind(), Some(ErrorKind::SourceNotFound));
    }
}
