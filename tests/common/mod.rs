/// Common test utilities for Voltaic CLI tests
///
/// Every command runs with an isolated `VOLTAIC_HOME` and a UTF-8 locale
/// unless a test overrides them.
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment that manages temporary directories and cleanup
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write an input file and return its path
    pub fn create_input_file(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `voltaic` with this environment's home and a UTF-8 locale
    pub fn cmd(&self) -> Command {
        let mut cmd = voltaic_cmd();
        cmd.env("VOLTAIC_HOME", self.home())
            .env("LANG", "en_US.UTF-8")
            .env_remove("VOLTAIC_CONFIG")
            .env_remove("VOLTAIC_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn voltaic_cmd() -> Command {
    Command::cargo_bin("voltaic").expect("voltaic binary is built for integration tests")
}
