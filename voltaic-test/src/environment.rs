//! Test environment management
//!
//! Provides isolated test environments with automatic cleanup using RAII.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Roots of live environments; only one may own `VOLTAIC_HOME` at a time
static ENV_REGISTRY: Lazy<Mutex<HashSet<PathBuf>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Sets (or removes) one environment variable and restores the previous value on drop
#[must_use = "the variable is restored as soon as the guard is dropped"]
pub struct EnvGuard {
    key: String,
    saved: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &str, value: impl AsRef<str>) -> Self {
        let saved = std::env::var(key).ok();
        std::env::set_var(key, value.as_ref());
        Self {
            key: key.to_string(),
            saved,
        }
    }

    pub fn unset(key: &str) -> Self {
        let saved = std::env::var(key).ok();
        std::env::remove_var(key);
        Self {
            key: key.to_string(),
            saved,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.saved {
            Some(v) => std::env::set_var(&self.key, v),
            None => std::env::remove_var(&self.key),
        }
    }
}

/// Configuration for test environment
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Value for `LANG`; `None` removes the variable
    pub lang: Option<String>,
    /// Enable verbose logging
    pub verbose: bool,
    /// Contents of `config.toml` written into the home directory
    pub config_toml: Option<String>,
    /// Custom prefix for test directories
    pub prefix: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            lang: Some("en_US.UTF-8".to_string()),
            verbose: false,
            config_toml: None,
            prefix: None,
        }
    }
}

/// Isolated test environment with automatic cleanup
pub struct TestEnvironment {
    temp_dir: TempDir,
    guards: Vec<EnvGuard>,
}

impl TestEnvironment {
    /// Create a new test environment with default config
    pub fn new() -> Result<Self> {
        Self::with_config(TestConfig::default())
    }

    /// Create a new test environment with custom config
    pub fn with_config(config: TestConfig) -> Result<Self> {
        // Held until the new root is registered
        let mut registry = ENV_REGISTRY.lock();
        if let Some(live) = registry.iter().next() {
            anyhow::bail!(
                "Test environment at {} is still live; tests sharing VOLTAIC_HOME must be #[serial]",
                live.display()
            );
        }

        let prefix = config.prefix.as_deref().unwrap_or("voltaic-test");
        let temp_dir =
            TempDir::with_prefix(prefix).context("Failed to create temporary directory")?;

        if let Some(contents) = &config.config_toml {
            std::fs::write(temp_dir.path().join("config.toml"), contents)
                .context("Failed to write test config")?;
        }

        let mut guards = vec![EnvGuard::set(
            "VOLTAIC_HOME",
            temp_dir.path().to_string_lossy(),
        )];
        guards.push(match &config.lang {
            Some(lang) => EnvGuard::set("LANG", lang),
            None => EnvGuard::unset("LANG"),
        });
        if config.verbose {
            guards.push(EnvGuard::set("VOLTAIC_LOG", "debug"));
        }

        registry.insert(temp_dir.path().to_path_buf());
        drop(registry);

        Ok(Self { temp_dir, guards })
    }

    /// Root of the environment, also exported as `VOLTAIC_HOME`
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.toml")
    }

    /// Write a file in the test environment and return its full path
    pub fn write_file(&self, path: impl AsRef<Path>, content: &[u8]) -> Result<PathBuf> {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// Read a file from the test environment
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.root().join(path);
        std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read {}", full_path.display()))
    }

    /// Number of environments currently alive in this process
    pub fn active_count() -> usize {
        ENV_REGISTRY.lock().len()
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        // Restore in reverse order of installation
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
        ENV_REGISTRY.lock().remove(self.temp_dir.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_sets_home() {
        let env = TestEnvironment::new().unwrap();
        assert_eq!(
            std::env::var("VOLTAIC_HOME").unwrap(),
            env.root().to_string_lossy()
        );
        assert_eq!(std::env::var("LANG").unwrap(), "en_US.UTF-8");
    }

    #[test]
    #[serial]
    fn test_environment_restores_variables() {
        let _outer = EnvGuard::set("VOLTAIC_HOME", "/outer");
        {
            let _env = TestEnvironment::new().unwrap();
            assert_ne!(std::env::var("VOLTAIC_HOME").unwrap(), "/outer");
        }
        assert_eq!(std::env::var("VOLTAIC_HOME").unwrap(), "/outer");
    }

    #[test]
    #[serial]
    fn test_environment_cleanup() {
        let path = {
            let env = TestEnvironment::new().unwrap();
            let path = env.root().to_path_buf();
            assert!(path.exists());
            path
        };
        assert!(!path.exists());
    }

    #[test]
    #[serial]
    fn test_environment_writes_config() {
        let config = TestConfig {
            config_toml: Some("[printing]\nprecision = 2\n".to_string()),
            ..Default::default()
        };
        let env = TestEnvironment::with_config(config).unwrap();
        assert!(env.config_path().exists());
        assert!(env.read_file("config.toml").unwrap().contains("precision = 2"));
    }

    #[test]
    #[serial]
    fn test_second_live_environment_is_rejected() {
        let first = TestEnvironment::new().unwrap();
        assert_eq!(TestEnvironment::active_count(), 1);

        let err = TestEnvironment::new().err().unwrap();
        assert!(err.to_string().contains("still live"), "{}", err);
        assert_eq!(
            std::env::var("VOLTAIC_HOME").unwrap(),
            first.root().to_string_lossy()
        );

        drop(first);
        assert_eq!(TestEnvironment::active_count(), 0);
        let second = TestEnvironment::new().unwrap();
        assert_eq!(TestEnvironment::active_count(), 1);
        drop(second);
    }

    #[test]
    #[serial]
    fn test_verbose_environment_enables_debug_logging() {
        let _outer = EnvGuard::unset("VOLTAIC_LOG");
        {
            let _env = TestEnvironment::with_config(TestConfig {
                verbose: true,
                ..Default::default()
            })
            .unwrap();
            assert_eq!(std::env::var("VOLTAIC_LOG").unwrap(), "debug");
        }
        assert!(std::env::var("VOLTAIC_LOG").is_err());
    }

    #[test]
    #[serial]
    fn test_env_guard_unset() {
        let _outer = EnvGuard::set("VOLTAIC_GUARD_TEST", "1");
        {
            let _g = EnvGuard::unset("VOLTAIC_GUARD_TEST");
            assert!(std::env::var("VOLTAIC_GUARD_TEST").is_err());
        }
        assert_eq!(std::env::var("VOLTAIC_GUARD_TEST").unwrap(), "1");
    }
}
