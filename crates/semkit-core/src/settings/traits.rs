//! Core traits and errors for settings sources

use std::path::PathBuf;

use thiserror::Error;

use crate::types::CredentialKey;

/// Errors raised while reading settings or validating resolved credentials
#[derive(Error, Debug)]
pub enum SettingsError {
    /// One or more required keys were absent or empty
    #[error("{} not found in {location}", join_labels(.missing))]
    MissingCredential {
        missing: Vec<CredentialKey>,
        /// Description of the source that was searched, e.g. `.env file`
        location: String,
    },

    #[error("Failed to parse settings file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SettingsError {
    pub fn missing(missing: Vec<CredentialKey>, location: impl Into<String>) -> Self {
        Self::MissingCredential {
            missing,
            location: location.into(),
        }
    }

    /// Keys reported missing, empty for other error kinds
    pub fn missing_keys(&self) -> &[CredentialKey] {
        match self {
            Self::MissingCredential { missing, .. } => missing,
            _ => &[],
        }
    }
}

fn join_labels(keys: &[CredentialKey]) -> String {
    keys.iter().map(|k| k.label()).collect::<Vec<_>>().join(", ")
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// A read-only, flat key-value settings source
///
/// Implementations:
/// - `DotenvSource`: a parsed `KEY=VALUE` file
/// - `EnvSettingsSource`: the process environment
/// - `MemorySettingsSource`: fixed values, for tests and hosts
/// - `ChainSettingsSource`: first source with a value wins
pub trait SettingsSource: Send + Sync {
    /// Short identifier of the source kind
    fn name(&self) -> &str;

    /// Where values come from, used in error messages
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Raw value for `key`; may be an empty string
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key`, treating an empty string as absent
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }

    fn has(&self, key: &str) -> bool {
        self.get_non_empty(key).is_some()
    }
}
