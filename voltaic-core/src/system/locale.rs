//! Locale detection
//!
//! Unicode output (box drawing, Greek letters in symbolic results) is only
//! reliable when the terminal locale advertises UTF-8.

/// Emitted, one per line, when `LANG` is unset or empty
pub const LOCALE_UNSET_WARNINGS: [&str; 2] = [
    "Locale appears not set! please export LANG=\"en_US.UTF-8\" or equivalent, ",
    "or voltaic's unicode support is broken.",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    lang: Option<String>,
}

impl Locale {
    /// Read the locale from the `LANG` environment variable
    pub fn detect() -> Self {
        let locale = Self::from_lang(std::env::var("LANG").ok());
        tracing::debug!(lang = ?locale.lang, utf8 = locale.is_utf8(), "Detected locale");
        locale
    }

    pub fn from_lang(lang: Option<String>) -> Self {
        Self {
            lang: lang.filter(|l| !l.trim().is_empty()),
        }
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.lang.is_some()
    }

    /// True when the codeset part of the locale is UTF-8 (`en_US.UTF-8`, `C.utf8`)
    pub fn is_utf8(&self) -> bool {
        match &self.lang {
            Some(lang) => {
                let lower = lang.to_ascii_lowercase();
                lower.contains("utf-8") || lower.contains("utf8")
            }
            None => false,
        }
    }

    /// Warnings to show the user at start-up, empty when the locale is set
    pub fn warnings(&self) -> Vec<&'static str> {
        if self.is_set() {
            Vec::new()
        } else {
            LOCALE_UNSET_WARNINGS.to_vec()
        }
    }
}
