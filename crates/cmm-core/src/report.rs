//! Machine-readable health report

use crate::analyzer::{self, AggregateStats};
use crate::catalog::ProviderCatalog;
use crate::config::ScoringWeights;
use crate::recommend;
use crate::scorer::HealthScorer;
use crate::types::{HealthStatus, RouteTable};
use crate::validator::RouteCheck;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_routers: usize,
    pub configured_routers: usize,
    pub active_providers: usize,
    pub health_score: u8,
    pub health_status: HealthStatus,
}

/// Everything the presentation layer needs for one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub summary: Summary,
    pub routers: Vec<RouteCheck>,
    pub statistics: AggregateStats,
    pub recommendations: Vec<String>,
}

impl HealthReport {
    /// Classify, aggregate, score and recommend in one pass
    pub fn evaluate(
        table: &RouteTable,
        catalog: &ProviderCatalog,
        weights: &ScoringWeights,
    ) -> Self {
        let routers = analyzer::classify(table, catalog);
        let statistics = analyzer::summarize(&routers);
        let health_score = HealthScorer::new(weights.clone()).score(&statistics);
        let recommendations = recommend::recommend(&statistics, health_score);

        tracing::debug!(
            health_score,
            configured = statistics.configured_slots,
            "evaluated route health"
        );

        Self {
            summary: Summary {
                total_routers: statistics.total_slots,
                configured_routers: statistics.configured_slots,
                active_providers: statistics.active_provider_count,
                health_score,
                health_status: HealthStatus::from_score(health_score),
            },
            routers,
            statistics,
            recommendations,
        }
    }

    pub fn score(&self) -> u8 {
        self.summary.health_score
    }
}
