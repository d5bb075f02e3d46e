//! Report of the operating-point gmin check
//!
//! The check solves the operating point with and without gmin and lists the
//! variables whose values moved by more than the configured tolerances.

use super::diagnostics::{emit, Stream};
use super::format::format_real;
use std::fmt::Display;
use std::io::{self, Write};
use voltaic_core::config::ToleranceConfig;
use voltaic_core::active_config;

/// Verbosity used when the caller has no opinion
pub const DEFAULT_CHECK_VERBOSITY: u8 = 2;

pub fn write_result_check<W, V>(
    writer: &mut W,
    badvars: &[V],
    verbose: u8,
    tolerances: &ToleranceConfig,
) -> io::Result<()>
where
    W: Write + ?Sized,
    V: Display,
{
    if !badvars.is_empty() {
        writeln!(writer, "Warning: solution is heavily dependent on gmin.")?;
        writeln!(writer, "Affected variables:")?;
        for var in badvars {
            writeln!(writer, "{}", var)?;
        }
    } else if verbose > 0 {
        writeln!(writer, "Difference check is within margins.")?;
        writeln!(
            writer,
            "(Voltage: er={}, ea={}, Current: er={}, ea={})",
            format_real(tolerances.ver),
            format_real(tolerances.vea),
            format_real(tolerances.ier),
            format_real(tolerances.iea)
        )?;
    }
    Ok(())
}

/// Print the gmin check outcome to stdout using the configured tolerances
pub fn print_result_check<V: Display>(badvars: &[V], verbose: u8) {
    let tolerances = active_config().tolerances;
    if !badvars.is_empty() {
        tracing::info!(count = badvars.len(), "Solution depends on gmin");
    }
    emit(Stream::Stdout, |w, _| {
        write_result_check(w, badvars, verbose, &tolerances)
    });
}
