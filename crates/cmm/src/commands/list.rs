use cmm_config::{CcrConfig, Paths};
use cmm_core::{parser, ProviderCatalog, RouteSlot};

const MODEL_PREVIEW: usize = 3;

pub fn run(paths: &Paths, stats: bool) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    if stats {
        println!("{}", build_stats(&config.catalog()));
    } else {
        println!("{}", build_listing(&config));
    }
    Ok(())
}

/// Counts plus one block per provider, deprecated ones included
fn build_stats(catalog: &ProviderCatalog) -> String {
    if catalog.is_empty() {
        return "No providers configured.".to_string();
    }

    let stats = catalog.stats();
    let mut lines = vec![
        "Provider statistics".to_string(),
        "===================".to_string(),
        format!("  Total providers: {}", stats.total_providers),
        format!("  Active:          {}", stats.active_providers),
        format!("  Deprecated:      {}", stats.deprecated_providers),
        format!("  Total models:    {}", stats.total_models),
    ];

    for (i, provider) in catalog.all().iter().enumerate() {
        let status = if provider.is_deprecated() {
            "deprecated"
        } else {
            "active"
        };
        let models = provider.models();

        lines.push(String::new());
        lines.push(format!("{}. {} [{status}]", i + 1, provider.name));
        lines.push(format!("   Models: {}", models.len()));
        if !models.is_empty() {
            let preview = models[..models.len().min(MODEL_PREVIEW)].join(", ");
            let more = if models.len() > MODEL_PREVIEW { ", ..." } else { "" };
            lines.push(format!("   Available: {preview}{more}"));
        }
        if let Some(url) = &provider.api_base_url {
            lines.push(format!("   API: {url}"));
        }
    }

    lines.join("\n")
}

fn build_listing(config: &CcrConfig) -> String {
    let catalog = config.catalog();
    let mut lines = Vec::new();

    if catalog.active().next().is_none() {
        return "No active providers configured.".to_string();
    }

    lines.push("Available providers and models:".to_string());
    for provider in catalog.active() {
        lines.push(String::new());
        lines.push(format!("Provider: {}", provider.name));
        if provider.models().is_empty() {
            lines.push("  (no models)".to_string());
        }
        for model in provider.models() {
            lines.push(format!("  - {model}"));
        }
    }

    let deprecated = catalog.len() - catalog.active().count();
    if deprecated > 0 {
        lines.push(String::new());
        lines.push(format!("({deprecated} deprecated providers hidden)"));
    }

    if let Some(current) = config
        .route_table()
        .get(RouteSlot::Default)
        .and_then(|v| parser::parse(v).ok())
    {
        lines.push(String::new());
        lines.push(format!(
            "Current selection: {} - {}",
            current.provider_name, current.model_name
        ));
    }

    lines.join("\n")
}
