//! Core types shared across all Voltaic crates

pub mod config;
pub mod error;
pub mod system;

// Re-export commonly used types
pub use config::{active_config, install_config, load_config, save_config, Config, TableStyle};
pub use error::{VoltaicError, VoltaicResult};

// Re-export system utilities
pub use system::{config_path, voltaic_home, Locale};
