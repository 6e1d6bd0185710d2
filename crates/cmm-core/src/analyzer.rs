//! Aggregate route statistics

use crate::catalog::ProviderCatalog;
use crate::types::{RouteSlot, RouteStatus, RouteTable};
use crate::validator::{self, RouteCheck};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Summary counters across all route slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_slots: usize,
    pub configured_slots: usize,
    /// Distinct non-deprecated providers referenced by configured slots
    pub active_provider_count: usize,
    pub deprecated_provider_hits: usize,
    pub unknown_model_hits: usize,
    /// Malformed routes plus routes naming a missing provider
    pub format_error_hits: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            total_slots: RouteSlot::COUNT,
            configured_slots: 0,
            active_provider_count: 0,
            deprecated_provider_hits: 0,
            unknown_model_hits: 0,
            format_error_hits: 0,
        }
    }
}

/// Classify every slot in slot order
pub fn classify(table: &RouteTable, catalog: &ProviderCatalog) -> Vec<RouteCheck> {
    table
        .iter()
        .map(|raw| {
            let check = validator::validate(&raw, catalog);
            tracing::debug!(slot = %check.slot, status = ?check.status, "classified route");
            check
        })
        .collect()
}

/// Fold precomputed checks into counters
pub fn summarize(checks: &[RouteCheck]) -> AggregateStats {
    let mut stats = AggregateStats::default();
    let mut active_providers = BTreeSet::new();

    for check in checks {
        if check.status.is_configured() {
            stats.configured_slots += 1;
        }

        match check.status {
            RouteStatus::FormatError | RouteStatus::ProviderNotFound => {
                stats.format_error_hits += 1
            }
            RouteStatus::DeprecatedProvider => stats.deprecated_provider_hits += 1,
            RouteStatus::UnknownModel => stats.unknown_model_hits += 1,
            RouteStatus::NotConfigured | RouteStatus::Active => {}
        }

        if check.status.has_active_provider() {
            if let Some(name) = &check.provider_name {
                active_providers.insert(name.as_str());
            }
        }
    }

    stats.active_provider_count = active_providers.len();
    stats
}

pub fn analyze(table: &RouteTable, catalog: &ProviderCatalog) -> AggregateStats {
    summarize(&classify(table, catalog))
}
