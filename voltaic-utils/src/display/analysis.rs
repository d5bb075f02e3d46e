//! Analysis directives in netlist syntax

use super::diagnostics::{emit, Stream};
use super::format::{format_g, format_real};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// Keys of an operating-point descriptor that configure the run rather than the analysis
pub const OP_HIDDEN_KEYS: &[&str] = &["type", "outfile", "verbose"];

/// An analysis descriptor, tagged by `type` in serialized form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Analysis {
    /// Operating point; parameters are kept in the order they were given
    Op {
        #[serde(flatten)]
        params: IndexMap<String, serde_json::Value>,
    },
    Dc {
        source: String,
        start: f64,
        stop: f64,
        step: f64,
        sweep_type: String,
    },
    Tran {
        tstep: f64,
        tstop: f64,
        #[serde(default)]
        tstart: f64,
        #[serde(default)]
        method: Option<String>,
    },
    /// Periodic steady state by the shooting method
    Shooting {
        period: f64,
        method: String,
        #[serde(default)]
        points: Option<u64>,
        #[serde(default)]
        step: Option<f64>,
        #[serde(default)]
        autonomous: bool,
    },
    Ac {
        start: f64,
        stop: f64,
        nsteps: u64,
        sweep_type: String,
    },
}

impl Analysis {
    /// The directive keyword without the leading dot
    pub fn kind(&self) -> &'static str {
        match self {
            Analysis::Op { .. } => "op",
            Analysis::Dc { .. } => "dc",
            Analysis::Tran { .. } => "tran",
            Analysis::Shooting { .. } => "shooting",
            Analysis::Ac { .. } => "ac",
        }
    }
}

// Strings print bare; everything else as its JSON text
fn param_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format_real(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Op { params } => {
                write!(f, ".op")?;
                for (key, value) in params {
                    if OP_HIDDEN_KEYS.contains(&key.as_str()) {
                        continue;
                    }
                    write!(f, " {}={}", key, param_value(value))?;
                }
                Ok(())
            }
            Analysis::Dc {
                source,
                start,
                stop,
                step,
                sweep_type,
            } => write!(
                f,
                ".dc {} start={} stop={} step={} type={}",
                source,
                format_g(*start),
                format_g(*stop),
                format_g(*step),
                sweep_type
            ),
            Analysis::Tran {
                tstep,
                tstop,
                tstart,
                method,
            } => {
                write!(
                    f,
                    ".tran tstep={} tstop={} tstart={}",
                    format_real(*tstep),
                    format_real(*tstop),
                    format_real(*tstart)
                )?;
                if let Some(method) = method {
                    write!(f, " method={}", method)?;
                }
                Ok(())
            }
            Analysis::Shooting {
                period,
                method,
                points,
                step,
                autonomous,
            } => {
                write!(f, ".shooting period={} method={}", format_real(*period), method)?;
                if let Some(points) = points {
                    write!(f, " points={}", points)?;
                }
                if let Some(step) = step {
                    write!(f, " step={}", format_real(*step))?;
                }
                write!(f, " autonomous= {}", autonomous)
            }
            Analysis::Ac {
                start,
                stop,
                nsteps,
                sweep_type,
            } => write!(
                f,
                ".ac start={} stop={} nsteps={} sweep_type={}",
                format_g(*start),
                format_g(*stop),
                nsteps,
                sweep_type
            ),
        }
    }
}

/// Render the directive for `an` without a trailing newline
pub fn format_analysis(an: &Analysis) -> String {
    an.to_string()
}

pub fn write_analysis<W: Write + ?Sized>(writer: &mut W, an: &Analysis) -> io::Result<()> {
    writeln!(writer, "{}", an)
}

/// Print the directive for `an` to stdout
pub fn print_analysis(an: &Analysis) {
    tracing::debug!(kind = an.kind(), "Printing analysis directive");
    emit(Stream::Stdout, |w, _| write_analysis(w, an));
}
