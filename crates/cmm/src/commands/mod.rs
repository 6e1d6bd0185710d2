pub mod check;
pub mod export;
pub mod health;
pub mod list;
pub mod routers;
pub mod search;
pub mod set;
pub mod version;

use cmm_config::{CcrConfig, ConfigStore, Paths};
use cmm_core::{HealthReport, ScoringWeights};

fn load_config(paths: &Paths) -> anyhow::Result<CcrConfig> {
    Ok(ConfigStore::new(paths.clone()).load()?)
}

fn evaluate(config: &CcrConfig) -> HealthReport {
    HealthReport::evaluate(
        &config.route_table(),
        &config.catalog(),
        &ScoringWeights::default(),
    )
}
