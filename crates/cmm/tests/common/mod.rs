#![allow(dead_code)]

use cmm_core::{Provider, ProviderCatalog, RouteTable};

/// `acme` offering gpt-4 and gpt-3.5
pub fn acme_catalog() -> ProviderCatalog {
    ProviderCatalog::new(vec![Provider::new("acme", &["gpt-4", "gpt-3.5"])])
}

pub fn deprecated_acme_catalog() -> ProviderCatalog {
    ProviderCatalog::new(vec![Provider::new("acme", &["gpt-4", "gpt-3.5"]).deprecated()])
}

pub fn mixed_catalog() -> ProviderCatalog {
    ProviderCatalog::new(vec![
        Provider::new("acme", &["gpt-4", "gpt-3.5"]),
        Provider::new("beta", &["b-large", "b-small"]),
        Provider::new("legacy", &["old-1"]).deprecated(),
    ])
}

pub fn all_routes(value: &str) -> RouteTable {
    RouteTable::uniform(value)
}

pub const SAMPLE_CONFIG: &str = r#"{
  "LOG": false,
  "HOST": "127.0.0.1",
  "PORT": 3456,
  "APIKEY": "",
  "transformers": [],
  "Providers": [
    {
      "name": "acme",
      "api_base_url": "https://api.acme.test/v1/chat/completions",
      "api_key": "sk-acme",
      "models": ["gpt-4", "gpt-3.5"]
    },
    {
      "name": "legacy",
      "api_base_url": "https://legacy.test/v1",
      "api_key": "sk-legacy",
      "models": ["old-1"],
      "deprecated": true
    }
  ],
  "Router": {
    "default": "acme,gpt-4",
    "background": "acme,gpt-3.5",
    "think": "legacy,old-1",
    "longContext": "acme,gpt-9",
    "longContextThreshold": 60000
  }
}"#;
