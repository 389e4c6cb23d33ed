//! Chained settings source with fallback behavior

use std::sync::Arc;

use super::traits::SettingsSource;

/// Looks a key up in several sources, in order
///
/// The first source holding a non-empty value wins, so an empty
/// assignment in an earlier source does not mask a real value further
/// down the chain.
///
/// # Example
///
/// ```
/// use semkit_core::settings::{ChainSettingsSource, MemorySettingsSource, SettingsSource};
/// use std::sync::Arc;
///
/// let overrides: Arc<dyn SettingsSource> =
///     Arc::new(MemorySettingsSource::from_pairs([("OPENAI_API_KEY", "sk-override")]));
/// let defaults: Arc<dyn SettingsSource> =
///     Arc::new(MemorySettingsSource::from_pairs([("OPENAI_API_KEY", "sk-default")]));
///
/// let chain = ChainSettingsSource::new(vec![overrides, defaults]);
/// assert_eq!(chain.get("OPENAI_API_KEY"), Some("sk-override".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct ChainSettingsSource {
    sources: Vec<Arc<dyn SettingsSource>>,
}

impl ChainSettingsSource {
    pub fn new(sources: Vec<Arc<dyn SettingsSource>>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[Arc<dyn SettingsSource>] {
        &self.sources
    }

    /// First source holding a non-empty value for `key`
    pub fn find_source(&self, key: &str) -> Option<&Arc<dyn SettingsSource>> {
        self.sources.iter().find(|s| s.has(key))
    }
}

impl std::fmt::Debug for ChainSettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainSettingsSource")
            .field("sources", &self.sources.iter().map(|s| s.describe()).collect::<Vec<_>>())
            .finish()
    }
}

impl SettingsSource for ChainSettingsSource {
    fn name(&self) -> &str {
        "chain"
    }

    fn describe(&self) -> String {
        if self.sources.is_empty() {
            return "empty settings chain".to_string();
        }
        self.sources
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }

    fn get(&self, key: &str) -> Option<String> {
        let mut empty = None;
        for source in &self.sources {
            match source.get(key) {
                Some(value) if !value.is_empty() => return Some(value),
                Some(value) => empty = empty.or(Some(value)),
                None => {}
            }
        }
        empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsSource;

    fn memory(pairs: &[(&str, &str)]) -> Arc<dyn SettingsSource> {
        Arc::new(MemorySettingsSource::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn test_chain_first_value_wins() {
        let chain = ChainSettingsSource::new(vec![
            memory(&[("A", "first")]),
            memory(&[("A", "second"), ("B", "only-second")]),
        ]);

        assert_eq!(chain.get("A"), Some("first".to_string()));
        assert_eq!(chain.get("B"), Some("only-second".to_string()));
        assert_eq!(chain.get("C"), None);
    }

    #[test]
    fn test_chain_skips_empty_values() {
        let chain = ChainSettingsSource::new(vec![
            memory(&[("A", "")]),
            memory(&[("A", "fallback")]),
        ]);
        assert_eq!(chain.get("A"), Some("fallback".to_string()));
        assert_eq!(chain.find_source("A").unwrap().get("A"), Some("fallback".to_string()));
    }

    #[test]
    fn test_chain_reports_empty_when_nothing_better() {
        let chain = ChainSettingsSource::new(vec![memory(&[("A", "")]), memory(&[])]);
        assert_eq!(chain.get("A"), Some(String::new()));
        assert!(!chain.has("A"));
        assert!(chain.find_source("A").is_none());
    }

    #[test]
    fn test_chain_describe() {
        let chain = ChainSettingsSource::new(vec![memory(&[]), memory(&[])]);
        assert_eq!(chain.describe(), "in-memory settings or in-memory settings");
        assert_eq!(ChainSettingsSource::default().describe(), "empty settings chain");
        assert_eq!(ChainSettingsSource::default().get("A"), None);
    }
}
