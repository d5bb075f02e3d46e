//! Loading descriptors and results handed over by the numeric engine

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use voltaic_core::{VoltaicError, VoltaicResult};
use voltaic_utils::{Analysis, TransferFunction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// `.json` files are JSON, anything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnalysisFile {
    #[serde(default)]
    analysis: Vec<Analysis>,
}

fn read(path: &Path) -> VoltaicResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        VoltaicError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

/// Read the `analysis` list of a TOML or JSON file
pub fn load_analyses(path: &Path) -> VoltaicResult<Vec<Analysis>> {
    let contents = read(path)?;
    let file: AnalysisFile = match InputFormat::from_path(path) {
        InputFormat::Json => serde_json::from_str(&contents)
            .map_err(|e| VoltaicError::Parse(format!("{}: {}", path.display(), e)))?,
        InputFormat::Toml => toml::from_str(&contents)
            .map_err(|e| VoltaicError::Parse(format!("{}: {}", path.display(), e)))?,
    };
    tracing::debug!("Loaded {} analyses from {}", file.analysis.len(), path.display());
    Ok(file.analysis)
}

// Expressions usually arrive as strings; numbers are accepted as-is
fn expression_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Read a JSON object mapping variable names to symbolic expressions
pub fn load_symbolic_results(path: &Path) -> VoltaicResult<IndexMap<String, String>> {
    let contents = read(path)?;
    let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(&contents)
        .map_err(|e| VoltaicError::Parse(format!("{}: {}", path.display(), e)))?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| (k, expression_text(v)))
        .collect())
}

/// Read a JSON object mapping transfer function names to gain, DC gain, poles and zeros
pub fn load_transfer_functions(
    path: &Path,
) -> VoltaicResult<IndexMap<String, TransferFunction<String>>> {
    let contents = read(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| VoltaicError::Parse(format!("{}: {}", path.display(), e)))
}

/// Read a JSON array of equations
pub fn load_equations(path: &Path) -> VoltaicResult<Vec<String>> {
    let contents = read(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&contents)
        .map_err(|e| VoltaicError::Parse(format!("{}: {}", path.display(), e)))?;
    Ok(raw.into_iter().map(expression_text).collect())
}

/// A table row that does not match the width of the first row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaggedRow {
    /// 1-based line number in the input
    pub nline: usize,
    pub line: String,
    pub expected: usize,
    pub found: usize,
}

impl RaggedRow {
    pub fn into_error(self) -> VoltaicError {
        VoltaicError::Parse(format!(
            "line {}: expected {} columns, found {}",
            self.nline, self.expected, self.found
        ))
    }
}

/// Split whitespace-separated columns; blank lines and `#` comments are skipped
pub fn parse_table(text: &str) -> Result<Vec<Vec<String>>, RaggedRow> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(RaggedRow {
                    nline: index + 1,
                    line: line.to_string(),
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

pub fn read_table_file(path: &Path) -> VoltaicResult<String> {
    read(path)
}
