//! Error, warning and informational messages
//!
//! Every `print_*` function has a `write_*` twin that targets any
//! [`io::Write`], so callers can capture the exact text. The `print_*`
//! variants never fail: a closed stdout or stderr is not worth aborting a
//! simulation over.

use super::numeric::{printoptions, PrintOptions};
use colored::*;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use voltaic_core::{active_config, Locale};

pub const ERROR_PREFIX: &str = "E:";
pub const WARNING_PREFIX: &str = "W:";

/// Standard stream a message is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Diagnostics go to stderr unless stdout is explicitly requested
    pub fn select(print_to_stdout: bool) -> Self {
        if print_to_stdout {
            Stream::Stdout
        } else {
            Stream::Stderr
        }
    }
}

/// Run `write` against the locked stream, telling it whether to colour
pub(crate) fn emit<F>(stream: Stream, write: F)
where
    F: FnOnce(&mut dyn Write, bool) -> io::Result<()>,
{
    let color_enabled = active_config().output.color;
    let result = match stream {
        Stream::Stdout => {
            let stdout = io::stdout();
            let color = color_enabled && stdout.is_terminal();
            let mut lock = stdout.lock();
            write(&mut lock, color)
        }
        Stream::Stderr => {
            let stderr = io::stderr();
            let color = color_enabled && stderr.is_terminal();
            let mut lock = stderr.lock();
            write(&mut lock, color)
        }
    };
    if let Err(e) = result {
        tracing::debug!("Dropped console output on {:?}: {}", stream, e);
    }
}

fn error_prefix(color: bool) -> String {
    if color {
        ERROR_PREFIX.red().bold().to_string()
    } else {
        ERROR_PREFIX.to_string()
    }
}

fn warning_prefix(color: bool) -> String {
    if color {
        WARNING_PREFIX.yellow().bold().to_string()
    } else {
        WARNING_PREFIX.to_string()
    }
}

pub fn write_general_error<W: Write + ?Sized>(
    writer: &mut W,
    description: &str,
    color: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", error_prefix(color), description)
}

pub fn write_warning<W: Write + ?Sized>(
    writer: &mut W,
    description: &str,
    color: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", warning_prefix(color), description)
}

/// The general error naming the line, then the offending line verbatim
pub fn write_parse_error<W: Write + ?Sized>(
    writer: &mut W,
    nline: usize,
    line: &str,
    color: bool,
) -> io::Result<()> {
    write_general_error(writer, &format!("Parse error on line {}:", nline), color)?;
    writeln!(writer, "{}", line)
}

/// Print `E: <description>` to stderr, or to stdout when asked
pub fn print_general_error(description: &str, print_to_stdout: bool) {
    emit(Stream::select(print_to_stdout), |w, color| {
        write_general_error(w, description, color)
    });
}

/// Print `W: <description>` to stderr, or to stdout when asked
pub fn print_warning(description: &str, print_to_stdout: bool) {
    emit(Stream::select(print_to_stdout), |w, color| {
        write_warning(w, description, color)
    });
}

/// Report a netlist line that could not be parsed
pub fn print_parse_error(nline: usize, line: &str, print_to_stdout: bool) {
    emit(Stream::select(print_to_stdout), |w, color| {
        write_parse_error(w, nline, line, color)
    });
}

/// Write `msg` if `verbose` reaches `relevance`; returns whether anything was written
///
/// With `print_nl` unset the message ends in a single space instead of a
/// newline and the writer is flushed, so a later message continues the line.
pub fn write_info_line<W, M>(
    writer: &mut W,
    (msg, relevance): (M, u8),
    verbose: u8,
    print_nl: bool,
) -> io::Result<bool>
where
    W: Write + ?Sized,
    M: Display,
{
    if verbose < relevance {
        tracing::trace!(relevance, verbose, "Suppressed info line");
        return Ok(false);
    }

    let config = active_config();
    let _scope = printoptions(PrintOptions::from(&config.printing));
    if print_nl {
        writeln!(writer, "{}", msg)?;
    } else {
        write!(writer, "{} ", msg)?;
        writer.flush()?;
    }
    Ok(true)
}

/// Print an informational message to stdout, honouring the verbosity level
///
/// Numbers inside `msg` rendered through [`Num`](super::numeric::Num) and
/// friends use the configured precision while the message is written.
pub fn print_info_line<M: Display>(msg_relevance: (M, u8), verbose: u8, print_nl: bool) {
    emit(Stream::Stdout, |w, _| {
        write_info_line(w, msg_relevance, verbose, print_nl).map(|_| ())
    });
}

/// Write the locale warnings for `locale`; returns whether any were written
pub fn write_locale_warnings<W: Write + ?Sized>(
    writer: &mut W,
    locale: &Locale,
    color: bool,
) -> io::Result<bool> {
    let warnings = locale.warnings();
    for warning in &warnings {
        write_warning(writer, warning, color)?;
    }
    Ok(!warnings.is_empty())
}

/// Warn when `LANG` is unset, as unicode output cannot be trusted then
pub fn warn_if_locale_unset(locale: &Locale, print_to_stdout: bool) -> bool {
    let warnings = locale.warnings();
    for warning in &warnings {
        print_warning(warning, print_to_stdout);
    }
    !warnings.is_empty()
}
