//! Route validation and health scoring for model-proxy routing configs

pub mod analyzer;
mod catalog;
mod config;
pub mod parser;
pub mod recommend;
mod report;
pub mod scorer;
mod types;
pub mod validator;

pub use analyzer::{analyze, AggregateStats};
pub use catalog::{CatalogStats, ProviderCatalog, SearchHits};
pub use config::ScoringWeights;
pub use parser::{parse, ParsedRoute, RouteFormatError};
pub use recommend::recommend;
pub use report::{HealthReport, Summary};
pub use scorer::HealthScorer;
pub use types::{
    HealthStatus, Provider, RawRoute, RouteSlot, RouteStatus, RouteTable, UnknownSlot,
    HEALTH_THRESHOLDS,
};
pub use validator::{validate, RouteCheck};
