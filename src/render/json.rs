use std::io::Write;

use super::Report;
use crate::errors::CliError;

pub fn write_json_report<W: Write>(w: &mut W, report: &Report) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
