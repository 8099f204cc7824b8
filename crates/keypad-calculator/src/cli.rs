//! CLI definitions using clap

use std::path::PathBuf;

use clap::Parser;

use crate::config::CalcConfig;
use crate::error::AppResult;

/// Keypad calculator: terminal keypad, or headless key scripts with --press
#[derive(Parser, Debug)]
#[command(name = "keypad-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "KEYPAD_CALCULATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Text shown when evaluation fails (overrides the config file)
    #[arg(long)]
    pub error_marker: Option<String>,

    /// Fraction digits kept in results (overrides the config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Run headless: press each character as a key ("=" evaluates) and
    /// print the final display
    #[arg(short, long, value_name = "KEYS")]
    pub press: Option<String>,

    /// With --press, print every step as `key<TAB>display`
    #[arg(long, requires = "press", conflicts_with = "json")]
    pub steps: bool,

    /// With --press, print every step as JSON
    #[arg(long, requires = "press")]
    pub json: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the effective configuration: file (if any), then flags
    pub fn load_config(&self) -> AppResult<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::load(path)?,
            None => CalcConfig::default(),
        };

        if let Some(marker) = &self.error_marker {
            config = config.with_error_marker(marker.clone());
        }
        if let Some(precision) = self.precision {
            config = config.with_max_fraction_digits(precision);
        }
        if self.log_json {
            config = config.with_log_json(true);
        }
        if let Some(filter) = self.verbosity_filter() {
            config = config.with_log_filter(filter);
        }

        config.validate()?;
        Ok(config)
    }

    /// Log filter implied by `-v` flags, if any
    #[must_use]
    pub const fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Returns true when running without the terminal UI
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.press.is_some()
    }
}
