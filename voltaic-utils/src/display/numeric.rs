//! Process-wide numeric print options
//!
//! Solver output (node voltages, Jacobians, residuals) is rendered through
//! the [`Num`], [`NumVec`] and [`NumMatrix`] wrappers, which read the current
//! [`PrintOptions`]. [`printoptions`] changes them for the lifetime of a
//! guard and puts the previous options back when the guard drops, including
//! during unwinding.

use super::format::{format_fixed, format_scientific};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use voltaic_core::config::PrintingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Digits after the decimal point
    pub precision: usize,
    /// Keep small magnitudes in fixed notation
    pub suppress: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 8,
            suppress: false,
        }
    }
}

impl From<&PrintingConfig> for PrintOptions {
    fn from(config: &PrintingConfig) -> Self {
        Self {
            precision: config.precision,
            suppress: config.suppress,
        }
    }
}

static CURRENT: Lazy<RwLock<PrintOptions>> = Lazy::new(|| RwLock::new(PrintOptions::default()));

pub fn get_printoptions() -> PrintOptions {
    *CURRENT.read()
}

pub fn set_printoptions(options: PrintOptions) {
    *CURRENT.write() = options;
}

/// Install `options` until the returned guard is dropped
pub fn printoptions(options: PrintOptions) -> PrintOptionsGuard {
    let previous = std::mem::replace(&mut *CURRENT.write(), options);
    tracing::trace!(?previous, ?options, "Entering print options scope");
    PrintOptionsGuard { previous }
}

#[must_use = "the previous print options are restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PrintOptionsGuard {
    previous: PrintOptions,
}

impl Drop for PrintOptionsGuard {
    fn drop(&mut self) {
        *CURRENT.write() = self.previous;
    }
}

/// Render `values` with one notation shared by the whole set
///
/// Scientific notation is used when the largest magnitude reaches 1e8, or,
/// unless `suppress` is set, when the smallest non-zero magnitude is below
/// 1e-4 or the largest and smallest differ by more than three decades.
pub fn format_reals(values: &[f64], options: &PrintOptions) -> Vec<String> {
    let magnitudes: Vec<f64> = values
        .iter()
        .filter(|v| v.is_finite() && **v != 0.0)
        .map(|v| v.abs())
        .collect();

    let scientific = match (
        magnitudes.iter().cloned().reduce(f64::min),
        magnitudes.iter().cloned().reduce(f64::max),
    ) {
        (Some(min), Some(max)) => {
            max >= 1e8 || (!options.suppress && (min < 1e-4 || max / min > 1e3))
        }
        _ => false,
    };

    values
        .iter()
        .map(|&v| {
            if scientific {
                format_scientific(v, options.precision)
            } else {
                format_fixed(v, options.precision)
            }
        })
        .collect()
}

fn pad_to_common_width(cells: &[String]) -> Vec<String> {
    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    cells.iter().map(|c| format!("{:>width$}", c, width = width)).collect()
}

/// A real rendered with the current print options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format_reals(&[self.0], &get_printoptions());
        f.write_str(&rendered[0])
    }
}

/// A vector rendered as `[a b c]` with the current print options
#[derive(Debug, Clone, Copy)]
pub struct NumVec<'a>(pub &'a [f64]);

impl fmt::Display for NumVec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = pad_to_common_width(&format_reals(self.0, &get_printoptions()));
        write!(f, "[{}]", cells.join(" "))
    }
}

/// A matrix rendered one row per line, columns aligned across rows
#[derive(Debug, Clone, Copy)]
pub struct NumMatrix<'a>(pub &'a [Vec<f64>]);

impl fmt::Display for NumMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flat: Vec<f64> = self.0.iter().flatten().copied().collect();
        let cells = pad_to_common_width(&format_reals(&flat, &get_printoptions()));

        write!(f, "[")?;
        let mut offset = 0;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[{}]", cells[offset..offset + row.len()].join(" "))?;
            offset += row.len();
        }
        write!(f, "]")
    }
}
