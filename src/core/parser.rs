//! # Text Parser
//!
//! Builds an [`Automobile`] from the line-oriented, tab-separated source format:
//!
//! ```text
//! Focus<TAB>Wagon ZTW<TAB>18445
//! Color
//! Fort Knox Gold Clearcoat Metallic<TAB>0
//! Transmission
//! automatic<TAB>0
//! standard<TAB>-815
//! ```
//!
//! The first line holds make, model and base price. Every later line with a
//! single field opens a new option group; a line with two fields adds an option
//! to the group opened last. An empty line or the end of input ends the scan.

use crate::constants::{BLANK_MODEL, FIELD_SEPARATOR};
use crate::core::errors::{AutoError, AutoResult, ErrorKind};
use crate::core::recovery::Recovery;
use crate::models::Automobile;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, ErrorKind as IoErrorKind};
use std::path::Path;

/// Parses source text into automobiles, reporting failures through the recovery protocol.
#[derive(Debug)]
pub struct TextParser<'a> {
    recovery: &'a Recovery,
}

impl<'a> TextParser<'a> {
    /// Creates a parser that reports failures to `recovery`.
    pub fn new(recovery: &'a Recovery) -> Self {
        Self { recovery }
    }

    /// Parses the file at `path`.
    ///
    /// # Errors
    /// A missing file is reported as [`ErrorKind::SourceNotFound`]; any other
    /// open or read failure is returned as [`AutoError::Io`].
    pub fn parse_file(&self, path: &Path) -> AutoResult<Automobile> {
        log::debug!("Parsing automobile source '{}'", path.display());
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                return Err(self.recovery.fail(ErrorKind::SourceNotFound));
            }
            Err(e) => return Err(AutoError::Io(e)),
        };
        self.parse_reader(BufReader::new(file))
    }

    /// Parses in-memory source text.
    pub fn parse_str(&self, text: &str) -> AutoResult<Automobile> {
        self.parse_reader(Cursor::new(text))
    }

    /// Parses any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> AutoResult<Automobile> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(AutoError::Parse {
                    line: 1,
                    reason: "the source is empty".to_string(),
                });
            }
        };
        let mut automobile = self.parse_header(strip_cr(&header))?;

        let mut current_group: Option<usize> = None;
        for (offset, line) in lines.enumerate() {
            let line_number = offset + 2;
            let line = line?;
            let line = strip_cr(&line);
            if line.is_empty() {
                log::trace!("Blank line {} ends the scan.", line_number);
                break;
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            match fields.as_slice() {
                [group_name] => {
                    automobile.add_empty_group(*group_name);
                    current_group = Some(automobile.groups().len() - 1);
                }
                [option_name, price, rest @ ..] => {
                    if !rest.is_empty() {
                        log::warn!(
                            "Line {}: ignoring {} extra field(s) after the option price.",
                            line_number,
                            rest.len()
                        );
                    }
                    let price = parse_price(price, line_number)?;
                    let group = current_group
                        .and_then(|index| automobile.group_mut(index))
                        .ok_or_else(|| self.recovery.fail(ErrorKind::OptionSizeNotFound))?;
                    group.add_option(*option_name, price);
                }
                [] => {}
            }
        }

        log::debug!(
            "Parsed '{}' with {} option group(s).",
            automobile.name(),
            automobile.groups().len()
        );
        Ok(automobile)
    }

    fn parse_header(&self, line: &str) -> AutoResult<Automobile> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let (make, model, price) = match fields.as_slice() {
            [make, model, price, ..] => (*make, *model, *price),
            _ => {
                return Err(AutoError::Parse {
                    line: 1,
                    reason: format!(
                        "expected make, model and base price separated by tabs, found {} field(s)",
                        fields.len()
                    ),
                });
            }
        };

        if model == BLANK_MODEL {
            return Err(self.recovery.fail(ErrorKind::ModelNameNotFound));
        }

        let base_price = parse_price(price, 1)?;
        Ok(Automobile::new(make, model, base_price))
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Prices are written as integers in the source format.
fn parse_price(raw: &str, line: usize) -> AutoResult<f32> {
    raw.trim()
        .parse::<i64>()
        .map(|value| value as f32)
        .map_err(|e| AutoError::Parse {
            line,
            reason: format!("'{}' is not an integer price ({})", raw, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::DiagnosticLog;
    use crate::core::recovery::FailFast;
    use std::sync::Arc;
    use tempfile::{TempDir, tempdir};

    fn recovery(dir: &TempDir) -> Recovery {
        let log = DiagnosticLog::create(&dir.path().join("log.txt")).unwrap();
        Recovery::new(Box::new(FailFast), Arc::new(log)).quiet()
    }

    #[test]
    fn test_parse_example_and_price_selection() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let parser = TextParser::new(&recovery);

        let mut auto = parser
            .parse_str("Focus\tWagon ZTW\t20000\nColor\nRed\t0\nBlue\t500\n")
            .unwrap();

        assert_eq!(auto.name(), "Focus Wagon ZTW");
        assert_eq!(auto.base_price(), 20000.0);
        assert_eq!(auto.groups().len(), 1);
        let color = auto.group_by_name("Color").unwrap();
        assert_eq!(color.len(), 2);
        assert_eq!(color.option(0).unwrap().name(), "Red");
        assert_eq!(color.option(0).unwrap().price(), 0.0);
        assert_eq!(color.option(1).unwrap().name(), "Blue");
        assert_eq!(color.option(1).unwrap().price(), 500.0);

        auto.set_selection("Color", "Blue").unwrap();
        assert_eq!(auto.total_price(), 20500.0);
    }

    #[test]
    fn test_blank_model_is_rejected_and_logged() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let parser = TextParser::new(&recovery);

        let err = parser.parse_str("Focus\t \t20000\nColor\nRed\t0\n").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::ModelNameNotFound));

        let lines = recovery.log().lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("\tThe model name was not found!"));
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let parser = TextParser::new(&recovery);

        let err = parser.parse_file(&dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::SourceNotFound));
        assert!(recovery.log().lines().unwrap()[0].ends_with("The file was not found!"));
    }

    #[test]
    fn test_parse_file_with_crlf_and_blank_line_terminator() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let path = dir.path().join("focus.txt");
        std::fs::write(
            &path,
            "Focus\tWagon ZTW\t18445\r\nColor\r\nRed\t0\r\n\r\nIgnored\r\nGhost\t1\r\n",
        )
        .unwrap();

        let auto = TextParser::new(&recovery).parse_file(&path).unwrap();
        assert_eq!(auto.model(), "Wagon ZTW");
        assert_eq!(auto.groups().len(), 1);
        assert_eq!(auto.group(0).unwrap().options().len(), 1);
    }

    #[test]
    fn test_options_go_to_the_current_group_even_with_duplicate_names() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let auto = TextParser::new(&recovery)
            .parse_str("A\tB\t1\nColor\nRed\t0\nColor\nBlue\t5\textra\n")
            .unwrap();

        assert_eq!(auto.groups().len(), 2);
        assert_eq!(auto.group(0).unwrap().options().len(), 1);
        assert_eq!(auto.group(1).unwrap().option(0).unwrap().name(), "Blue");
        // Name lookups still see only the first "Color".
        assert_eq!(auto.find_group_by_name("Color"), Some(0));
    }

    #[test]
    fn test_option_before_any_group_is_option_size_not_found() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let err = TextParser::new(&recovery)
            .parse_str("A\tB\t1\nRed\t0\n")
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::OptionSizeNotFound));
    }

    #[test]
    fn test_malformed_input_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let recovery = recovery(&dir);
        let parser = TextParser::new(&recovery);

        assert!(matches!(
            parser.parse_str("Focus\tWagon\n"),
            Err(AutoError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parser.parse_str("Focus\tWagon\tcheap\n"),
            Err(AutoError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parser.parse_str("Focus\tWagon\t1\nColor\nRed\t1.5\n"),
            Err(AutoError::Parse { line: 3, .. })
        ));
        assert!(matches!(parser.parse_str(""), Err(AutoError::Parse { line: 1, .. })));
        // Malformed input is not part of the failure taxonomy, so nothing is logged.
        assert!(recovery.log().lines().unwrap().is_empty());
    }
}
