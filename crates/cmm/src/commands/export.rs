use chrono::{DateTime, Utc};
use cmm_config::Paths;
use cmm_core::{HealthReport, Provider, ProviderCatalog};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    exported_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a HealthReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProvidersDocument<'a> {
    exported_at: DateTime<Utc>,
    total_providers: usize,
    active_providers: usize,
    providers: Vec<ProviderEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderEntry<'a> {
    name: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_base_url: Option<&'a str>,
    models: &'a [String],
    model_count: usize,
}

impl<'a> From<&'a Provider> for ProviderEntry<'a> {
    fn from(provider: &'a Provider) -> Self {
        Self {
            name: &provider.name,
            status: if provider.is_deprecated() {
                "deprecated"
            } else {
                "active"
            },
            api_base_url: provider.api_base_url.as_deref(),
            models: provider.models(),
            model_count: provider.models().len(),
        }
    }
}

pub fn run(paths: &Paths, output: Option<&Path>, providers: bool) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    let (json, what) = if providers {
        (render_providers(&config.catalog(), Utc::now())?, "Provider list")
    } else {
        (render(&super::evaluate(&config), Utc::now())?, "Health report")
    };

    match output {
        Some(path) => {
            cmm_config::atomic_write(path, json.as_bytes())?;
            println!("{what} exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn render_providers(
    catalog: &ProviderCatalog,
    exported_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let stats = catalog.stats();
    let doc = ProvidersDocument {
        exported_at,
        total_providers: stats.total_providers,
        active_providers: stats.active_providers,
        providers: catalog.all().iter().map(ProviderEntry::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn render(report: &HealthReport, exported_at: DateTime<Utc>) -> anyhow::Result<String> {
    let doc = ExportDocument {
        exported_at,
        report,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
