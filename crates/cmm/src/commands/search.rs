use cmm_config::Paths;
use cmm_core::{Provider, ProviderCatalog};

pub fn run(paths: &Paths, query: &str) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    println!("{}", build_results(&config.catalog(), query));
    Ok(())
}

fn tag(provider: &Provider) -> &'static str {
    if provider.is_deprecated() {
        "deprecated"
    } else {
        "active"
    }
}

fn build_results(catalog: &ProviderCatalog, query: &str) -> String {
    let hits = catalog.search(query);
    if hits.is_empty() {
        return format!("No providers or models match \"{query}\"");
    }

    let mut lines = vec![format!("Results for \"{query}\":")];

    if !hits.providers.is_empty() {
        lines.push(String::new());
        lines.push(format!("Matching providers ({}):", hits.providers.len()));
        for provider in &hits.providers {
            lines.push(format!("  - {} [{}]", provider.name, tag(provider)));
        }
    }

    if !hits.models.is_empty() {
        lines.push(String::new());
        lines.push(format!("Matching models ({}):", hits.models.len()));

        // Group consecutive hits by provider; hits arrive in catalog order
        let mut current: Option<&str> = None;
        for (provider, model) in &hits.models {
            if current != Some(provider.name.as_str()) {
                lines.push(format!("  {} [{}]:", provider.name, tag(provider)));
                current = Some(provider.name.as_str());
            }
            lines.push(format!("    - {model}"));
        }
    }

    lines.join("\n")
}
