//! Writing a [`SubnetReport`] to the terminal.

use super::report::SubnetReport;
use crate::config::OutputFormat;
use crate::error::Result;
use std::io::Write;

/// Write `report` in the chosen format, one trailing newline.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SubnetReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
