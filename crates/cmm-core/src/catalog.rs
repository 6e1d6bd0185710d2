//! Read-only provider lookup

use crate::types::Provider;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
}

/// Hit from [`ProviderCatalog::search`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHits<'a> {
    pub providers: Vec<&'a Provider>,
    /// (provider, model) pairs in catalog order
    pub models: Vec<(&'a Provider, &'a str)>,
}

/// Provider and model counts over the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_providers: usize,
    pub active_providers: usize,
    pub deprecated_providers: usize,
    /// Sum of model list lengths, deprecated providers included
    pub total_models: usize,
}

impl SearchHits<'_> {
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty() && self.models.is_empty()
    }
}

impl ProviderCatalog {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Exact, case-sensitive match. The first provider wins on duplicate names.
    pub fn find_by_name(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name == name)
    }

    pub fn all(&self) -> &[Provider] {
        &self.providers
    }

    pub fn active(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter().filter(|p| !p.is_deprecated())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let deprecated_providers = self.providers.iter().filter(|p| p.is_deprecated()).count();
        CatalogStats {
            total_providers: self.providers.len(),
            active_providers: self.providers.len() - deprecated_providers,
            deprecated_providers,
            total_models: self.providers.iter().map(|p| p.models().len()).sum(),
        }
    }

    /// Case-insensitive substring search over provider and model names
    pub fn search(&self, query: &str) -> SearchHits<'_> {
        let needle = query.to_lowercase();

        let providers = self
            .providers
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();

        let models = self
            .providers
            .iter()
            .flat_map(|p| p.models().iter().map(move |m| (p, m.as_str())))
            .filter(|(_, m)| m.to_lowercase().contains(&needle))
            .collect();

        SearchHits { providers, models }
    }
}

impl From<Vec<Provider>> for ProviderCatalog {
    fn from(providers: Vec<Provider>) -> Self {
        Self::new(providers)
    }
}
