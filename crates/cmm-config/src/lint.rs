//! Structural checks on the config document

use crate::types::CcrConfig;
use cmm_core::{parser, Provider, RouteSlot};
use serde_json::Value;
use std::collections::HashMap;

/// Problems found in a config document. Errors make the document unusable,
/// warnings do not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl LintReport {
    pub fn is_usable(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn lint(config: &CcrConfig) -> LintReport {
    let mut report = LintReport::default();

    match &config.providers {
        Some(_) => lint_providers(config, &mut report),
        None => report.errors.push("Providers is missing".to_string()),
    }

    match &config.router {
        Some(router) => {
            for slot in RouteSlot::ALL {
                match router.value(slot.key()) {
                    None | Some(Value::Null) => report
                        .warnings
                        .push(format!("Router.{slot}: not configured")),
                    Some(Value::String(value)) if value.is_empty() => report
                        .warnings
                        .push(format!("Router.{slot}: not configured")),
                    Some(Value::String(value)) => {
                        if let Err(e) = parser::parse(value) {
                            report.errors.push(format!("Router.{slot}: {e}"));
                        }
                    }
                    Some(_) => report
                        .errors
                        .push(format!("Router.{slot}: expected a \"provider,model\" string")),
                }
            }
        }
        None => report.errors.push("Router is missing".to_string()),
    }

    report
}

fn lint_providers(config: &CcrConfig, report: &mut LintReport) {
    let providers = config.providers();

    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for p in providers {
        *name_counts.entry(p.name.as_str()).or_default() += 1;
    }

    for (index, provider) in providers.iter().enumerate() {
        let prefix = format!("Providers[{index}]");

        if provider.name.is_empty() {
            report.errors.push(format!("{prefix}: name is missing"));
        }
        if is_blank(&provider.api_base_url) {
            report.errors.push(format!("{prefix}: api_base_url is missing"));
        }
        if is_blank(&provider.api_key) {
            report.errors.push(format!("{prefix}: api_key is missing"));
        }
        match &provider.models {
            None => report.errors.push(format!("{prefix}: models is missing")),
            Some(models) if models.is_empty() => {
                report.warnings.push(format!("{prefix}: models list is empty"))
            }
            Some(_) => {}
        }
        if !provider.name.is_empty() && name_counts[provider.name.as_str()] > 1 {
            report.errors.push(format!(
                "{prefix}: provider name '{}' is duplicated",
                provider.name
            ));
        }
    }

    if providers.iter().all(Provider::is_deprecated) {
        report
            .warnings
            .push("no active providers (all providers are deprecated)".to_string());
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
