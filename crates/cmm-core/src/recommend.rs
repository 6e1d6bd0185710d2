//! Recommendation rules

use crate::analyzer::AggregateStats;
use crate::types::HealthStatus;

pub const CONFIGURE_ALL_SLOTS: &str =
    "Configure every route slot (default, background, think, longContext, webSearch).";
pub const REPLACE_DEPRECATED: &str =
    "Replace deprecated providers with active ones.";
pub const FIX_UNKNOWN_MODELS: &str =
    "Fix routes that reference models their provider does not list.";
pub const FIX_MALFORMED: &str =
    "Fix malformed routes and routes naming providers that do not exist.";
pub const ADD_ACTIVE_PROVIDER: &str =
    "Add at least one active (non-deprecated) provider to your routes.";
pub const ADD_REDUNDANCY: &str =
    "All routes rely on a single provider; consider spreading them across providers for redundancy.";

/// Ordered suggestions. Rules fire independently in declaration order; the
/// closing message for the score tier is always last.
///
/// "No active provider" is judged from `active_provider_count`, i.e. the
/// distinct non-deprecated providers the routes reference, not the catalog:
/// a catalog with active providers that no route uses still fires it.
pub fn recommend(stats: &AggregateStats, score: u8) -> Vec<String> {
    let rules: [(bool, &str); 6] = [
        (stats.configured_slots < stats.total_slots, CONFIGURE_ALL_SLOTS),
        (stats.deprecated_provider_hits > 0, REPLACE_DEPRECATED),
        (stats.unknown_model_hits > 0, FIX_UNKNOWN_MODELS),
        (stats.format_error_hits > 0, FIX_MALFORMED),
        (stats.active_provider_count == 0, ADD_ACTIVE_PROVIDER),
        (
            stats.active_provider_count == 1 && stats.configured_slots > 2,
            ADD_REDUNDANCY,
        ),
    ];

    let mut out: Vec<String> = rules
        .iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, msg)| msg.to_string())
        .collect();

    out.push(HealthStatus::from_score(score).closing_message().to_string());
    out
}
