pub mod locale;
pub mod paths;

// Re-export commonly used functions
pub use locale::{Locale, LOCALE_UNSET_WARNINGS};
pub use paths::{config_path, voltaic_home};
