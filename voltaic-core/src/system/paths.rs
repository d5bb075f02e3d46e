use std::path::PathBuf;

/// Get the Voltaic home directory
/// Checks VOLTAIC_HOME environment variable, falls back to ${HOME}/.voltaic
pub fn voltaic_home() -> PathBuf {
    if let Ok(path) = std::env::var("VOLTAIC_HOME") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    let home = std::env::var("HOME")
        .unwrap_or_else(|_| std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string()));
    PathBuf::from(home).join(".voltaic")
}

/// Default configuration file, `${VOLTAIC_HOME}/config.toml`
pub fn config_path() -> PathBuf {
    voltaic_home().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use voltaic_test::EnvGuard;

    #[test]
    #[serial]
    fn test_voltaic_home_from_env() {
        let _guard = EnvGuard::set("VOLTAIC_HOME", "/tmp/voltaic-home-test");
        assert_eq!(voltaic_home(), PathBuf::from("/tmp/voltaic-home-test"));
        assert_eq!(
            config_path(),
            PathBuf::from("/tmp/voltaic-home-test/config.toml")
        );
    }

    #[test]
    #[serial]
    fn test_voltaic_home_falls_back_to_home() {
        let _home = EnvGuard::set("HOME", "/home/tester");
        let _guard = EnvGuard::unset("VOLTAIC_HOME");
        assert_eq!(voltaic_home(), PathBuf::from("/home/tester/.voltaic"));
    }

    #[test]
    #[serial]
    fn test_empty_voltaic_home_is_ignored() {
        let _home = EnvGuard::set("HOME", "/home/tester");
        let _guard = EnvGuard::set("VOLTAIC_HOME", "");
        assert_eq!(voltaic_home(), PathBuf::from("/home/tester/.voltaic"));
    }
}
