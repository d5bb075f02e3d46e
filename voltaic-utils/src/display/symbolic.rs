//! Symbolic analysis results

use super::diagnostics::{emit, Stream};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::{self, Write};

/// A symbolic transfer function with its factored form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction<T> {
    pub gain: T,
    /// Gain at DC
    pub gain0: T,
    #[serde(default)]
    pub poles: Vec<T>,
    #[serde(default)]
    pub zeros: Vec<T>,
}

fn sorted_by_key_text<K: Display, V>(entries: impl IntoIterator<Item = (K, V)>) -> Vec<(String, V)> {
    let mut sorted: Vec<(String, V)> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}

/// Write `key\t = value` lines ordered by the text of each key
pub fn write_symbolic_results<W, K, V, I>(writer: &mut W, results: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    for (key, value) in sorted_by_key_text(results) {
        writeln!(writer, "{}\t = {}", key, value)?;
    }
    Ok(())
}

pub fn print_symbolic_results<K, V, I>(results: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    emit(Stream::Stdout, |w, _| write_symbolic_results(w, results));
}

pub fn write_symbolic_transfer_functions<'a, W, K, T, I>(writer: &mut W, tfs: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (K, &'a TransferFunction<T>)>,
    K: Display,
    T: Display + 'a,
{
    for (key, tf) in sorted_by_key_text(tfs) {
        writeln!(writer, "{} = {}", key, tf.gain)?;
        writeln!(writer, "\tDC: {}", tf.gain0)?;
        for (index, pole) in tf.poles.iter().enumerate() {
            writeln!(writer, "\tP{}: {}", index, pole)?;
        }
        for (index, zero) in tf.zeros.iter().enumerate() {
            writeln!(writer, "\tZ{}: {}", index, zero)?;
        }
    }
    Ok(())
}

/// Print gain, DC gain, poles and zeros of each transfer function
pub fn print_symbolic_transfer_functions<'a, K, T, I>(tfs: I)
where
    I: IntoIterator<Item = (K, &'a TransferFunction<T>)>,
    K: Display,
    T: Display + 'a,
{
    emit(Stream::Stdout, |w, _| write_symbolic_transfer_functions(w, tfs));
}

pub fn write_symbolic_equations<W, E, I>(writer: &mut W, equations: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = E>,
    E: Display,
{
    writeln!(writer, "+--")?;
    for eq in equations {
        writeln!(writer, "| {}", eq)?;
    }
    writeln!(writer, "+--")
}

/// Print the circuit equations inside a bracket
pub fn print_symbolic_equations<E, I>(equations: I)
where
    I: IntoIterator<Item = E>,
    E: Display,
{
    emit(Stream::Stdout, |w, _| write_symbolic_equations(w, equations));
}
