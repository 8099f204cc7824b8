//! Headless key-script runs (`--press`)

use std::io::Write;

use tracing::info;

use crate::calculator::KeypadCalculator;
use crate::config::CalcConfig;
use crate::driver::KeypadDriver;
use crate::error::AppResult;

/// How a scripted run is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Final display only
    #[default]
    Display,
    /// One `key<TAB>display` line per key
    Steps,
    /// Pretty JSON array of steps
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--steps`/`--json` flags
    #[must_use]
    pub const fn from_flags(steps: bool, json: bool) -> Self {
        match (steps, json) {
            (_, true) => Self::Json,
            (true, false) => Self::Steps,
            (false, false) => Self::Display,
        }
    }
}

/// Presses every key of `script` on a fresh calculator and writes the report.
/// An unknown key aborts the run before anything is written.
pub fn run<W: Write>(
    config: &CalcConfig,
    script: &str,
    format: OutputFormat,
    out: &mut W,
) -> AppResult<()> {
    let mut calc = KeypadCalculator::with_config(config);
    let steps = calc.run_script(script)?;
    info!(keys = steps.len(), display = %calc.display(), "script finished");

    match format {
        OutputFormat::Display => writeln!(out, "{}", calc.display())?,
        OutputFormat::Steps => {
            for step in &steps {
                writeln!(out, "{}\t{}", step.key, step.display)?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&steps)?)?,
    }
    Ok(())
}
