pub mod mock;
pub mod openrouter;

use std::collections::HashMap;
use std::sync::Arc;

use mindtrace_core::InsightProvider;

/// Registry of analysis providers, looked up by name.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn InsightProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider by name.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn InsightProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get a provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn InsightProvider>> {
        self.providers.get(name).cloned()
    }

    /// Get providers matching the given names (in order).
    /// Unknown names are silently skipped.
    pub fn get_providers(&self, names: &[String]) -> Vec<Arc<dyn InsightProvider>> {
        names
            .iter()
            .filter_map(|name| self.providers.get(name).cloned())
            .collect()
    }

    /// All registered provider names.
    pub fn list(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockProvider;

    #[test]
    fn registry_lookup_skips_unknown_names() {
        let mut registry = ProviderRegistry::new();
        registry.register("demo", Arc::new(MockProvider::new("demo")));
        registry.register("other", Arc::new(MockProvider::new("other")));

        let providers =
            registry.get_providers(&["demo".into(), "missing".into(), "other".into()]);
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].name(), "demo");
        assert!(registry.get("missing").is_none());
    }
}
