//! Test utilities for the Voltaic workspace
//!
//! Common helpers shared by the unit and integration tests of every crate:
//!
//! - **Environment**: isolated `VOLTAIC_HOME` and env-var guards restored on drop
//! - **Fixtures**: analysis descriptors and symbolic results in file form

pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use environment::{EnvGuard, TestConfig, TestEnvironment};
pub use fixtures::{
    analyses_json, analyses_toml, symbolic_results_json, transfer_functions_json, whitespace_table,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Run a test with a clean environment
///
/// # Example
/// ```rust
/// use voltaic_test::with_test_env;
///
/// with_test_env(|env| {
///     env.write_file("config.toml", b"[printing]\nprecision = 3\n")?;
///     Ok(())
/// })
/// .unwrap();
/// ```
pub fn with_test_env<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&TestEnvironment) -> Result<R>,
{
    let env = TestEnvironment::new()?;
    f(&env)
}
