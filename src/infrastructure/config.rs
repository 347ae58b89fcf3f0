//! Run configuration built from the command line

use crate::cli::Cli;
use crate::domain::calendar::{MAX_YEAR, MIN_YEAR};
use crate::error::{CalendarError, Result};
use std::path::PathBuf;

/// Year generated when no positional arguments are given
pub const DEFAULT_YEAR: i32 = 2024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub year: i32,
    pub debug: bool,
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl GeneratorConfig {
    /// Config with default year and debug off
    pub fn new(output_dir: PathBuf, templates_dir: PathBuf) -> Self {
        GeneratorConfig {
            year: DEFAULT_YEAR,
            debug: false,
            output_dir,
            templates_dir,
        }
    }

    /// Build the config from parsed command-line arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Self::new(cli.output_dir.clone(), cli.templates_dir.clone());
        let (year, debug) = parse_positionals(cli.year.as_deref(), cli.debug.as_deref())?;
        config.year = year;
        config.debug = debug;
        Ok(config)
    }
}

/// Validate the `<year> <debug>` pair. Both are absent or both are present.
pub fn parse_positionals(year: Option<&str>, debug: Option<&str>) -> Result<(i32, bool)> {
    match (year, debug) {
        (None, None) => Ok((DEFAULT_YEAR, false)),
        (Some(year), Some(debug)) => Ok((parse_year(year)?, parse_debug_flag(debug)?)),
        _ => Err(CalendarError::InvalidArguments(
            "expected either no arguments or both <YEAR> and <DEBUG>, got 1".to_string(),
        )),
    }
}

/// Parse a year; the sign is dropped, and the result must be 1..=9999
pub fn parse_year(value: &str) -> Result<i32> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| CalendarError::InvalidYear(format!("'{}' is not an integer", value)))?;

    let year = parsed.unsigned_abs();
    if year < MIN_YEAR as u64 || year > MAX_YEAR as u64 {
        return Err(CalendarError::InvalidYear(format!(
            "{} is outside {}..={}",
            value, MIN_YEAR, MAX_YEAR
        )));
    }

    Ok(year as i32)
}

/// Parse `true`/`false` in any letter case
pub fn parse_debug_flag(value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CalendarError::InvalidDebugFlag(format!(
            "'{}' (expected true or false)",
            value
        )))
    }
}
