// src/constants.rs

/// Width of the name column when an option is rendered.
pub const OPTION_COLUMN_WIDTH: usize = 46;

/// Spaces between the `Option` and `Price($)` column headers.
pub const PRICE_HEADER_GAP: usize = 40;

/// The model value that marks a missing model name in a source file.
pub const BLANK_MODEL: &str = " ";

/// Field separator of the source text format.
pub const FIELD_SEPARATOR: char = '\t';

/// The name of the settings directory (in the system config directory).
pub const CONFIG_DIR_NAME: &str = "carconf";

/// The name of the settings file.
pub const SETTINGS_FILENAME: &str = "carconf.toml";

/// Default diagnostic log file name.
pub const DEFAULT_LOG_FILENAME: &str = "log.txt";

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILENAME: &str = "auto.snapshot.bin";

/// Version tag written into every snapshot envelope.
pub const SNAPSHOT_VERSION: u32 = 1;
