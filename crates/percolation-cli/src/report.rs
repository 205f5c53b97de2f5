//! Rendering of the final statistics to stdout.
//!
//! Text output is three lines using the default `f64` formatting:
//!
//! ```text
//! mean = 0.5929
//! stddev = 0.0087
//! 95% confidence interval = [0.5912, 0.5946]
//! ```
//!
//! JSON output is the [`StatsSummary`] object on a single line. JSON has no
//! NaN, so the undefined statistics of a single-trial run become `null`.

use std::io::Write;

use percolation_core::StatsSummary;
use percolation_core::config::OutputFormat;

use crate::error::CliError;

/// Write `summary` to `out` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &StatsSummary,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "mean = {}", summary.mean)?;
            writeln!(out, "stddev = {}", summary.stddev)?;
            writeln!(
                out,
                "95% confidence interval = [{}, {}]",
                summary.confidence_lo, summary.confidence_hi
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
