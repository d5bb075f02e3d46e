//! UTF-8 text files for simulation results

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use voltaic_core::{VoltaicError, VoltaicResult};

/// Open `path` for writing text, truncating any existing file
///
/// Rust strings are always UTF-8, so the returned writer needs no
/// transcoding layer; this exists so every result file is opened the same way.
pub fn open_utf8<P: AsRef<Path>>(path: P) -> VoltaicResult<BufWriter<File>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        VoltaicError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open {}: {}", path.display(), e),
        ))
    })?;
    tracing::debug!("Opened {} for UTF-8 output", path.display());
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_utf8_writes_unicode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.txt");

        let mut fp = open_utf8(&path).unwrap();
        writeln!(fp, "Ω = 1kΩ, µ = 1e-6, τ = RC").unwrap();
        fp.flush().unwrap();
        drop(fp);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Ω = 1kΩ, µ = 1e-6, τ = RC\n");
    }

    #[test]
    fn test_open_utf8_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.txt");
        std::fs::write(&path, "stale contents that are long").unwrap();

        let mut fp = open_utf8(&path).unwrap();
        write!(fp, "new").unwrap();
        drop(fp);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_open_utf8_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = open_utf8(dir.path().join("missing").join("out.txt"));
        match result {
            Err(VoltaicError::Io(e)) => assert!(e.to_string().contains("Failed to open")),
            other => panic!("Expected Io error, got {:?}", other.map(|_| ())),
        }
    }
}
