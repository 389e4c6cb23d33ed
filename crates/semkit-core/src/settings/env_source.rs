//! Process environment settings source

use std::env;

use super::traits::SettingsSource;

/// Reads settings from the process environment
///
/// Useful on CI, where credentials are exported rather than written to a
/// dotenv file. Values that are not valid UTF-8 are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettingsSource;

impl EnvSettingsSource {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for EnvSettingsSource {
    fn name(&self) -> &str {
        "env"
    }

    fn describe(&self) -> String {
        "process environment".to_string()
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_reads_variable() {
        env::set_var("SEMKIT_TEST_ENV_SOURCE_READ", "value-1");

        let source = EnvSettingsSource::new();
        assert_eq!(source.get("SEMKIT_TEST_ENV_SOURCE_READ"), Some("value-1".to_string()));
        assert!(source.has("SEMKIT_TEST_ENV_SOURCE_READ"));

        env::remove_var("SEMKIT_TEST_ENV_SOURCE_READ");
    }

    #[test]
    fn test_env_source_empty_value_is_not_present() {
        env::set_var("SEMKIT_TEST_ENV_SOURCE_EMPTY", "");

        let source = EnvSettingsSource::new();
        assert_eq!(source.get("SEMKIT_TEST_ENV_SOURCE_EMPTY"), Some(String::new()));
        assert!(!source.has("SEMKIT_TEST_ENV_SOURCE_EMPTY"));

        env::remove_var("SEMKIT_TEST_ENV_SOURCE_EMPTY");
    }

    #[test]
    fn test_env_source_describe() {
        let source = EnvSettingsSource::new();
        assert_eq!(source.name(), "env");
        assert_eq!(source.describe(), "process environment");
        assert_eq!(source.get("SEMKIT_TEST_ENV_SOURCE_UNSET_XYZ"), None);
    }
}
