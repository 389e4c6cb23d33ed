//! In-memory settings source

use std::collections::HashMap;

use super::traits::SettingsSource;

/// Fixed set of settings held in memory
///
/// Mostly used by tests and by hosts that already hold their settings in a
/// map. The values never change after construction.
///
/// # Example
///
/// ```
/// use semkit_core::settings::{MemorySettingsSource, SettingsSource};
///
/// let source = MemorySettingsSource::from_pairs([("OPENAI_API_KEY", "sk-test")]);
/// assert_eq!(source.get("OPENAI_API_KEY"), Some("sk-test".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsSource {
    values: HashMap<String, String>,
}

impl MemorySettingsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySettingsSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl SettingsSource for MemorySettingsSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn describe(&self) -> String {
        "in-memory settings".to_string()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_builder() {
        let source = MemorySettingsSource::new()
            .with("A", "1")
            .with("B", "");

        assert_eq!(source.len(), 2);
        assert_eq!(source.get("A"), Some("1".to_string()));
        assert!(!source.has("B"));
        assert_eq!(source.get("C"), None);
    }

    #[test]
    fn test_memory_source_empty() {
        let source = MemorySettingsSource::new();
        assert!(source.is_empty());
        assert_eq!(source.name(), "memory");
    }
}
