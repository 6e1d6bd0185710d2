//! Scoring configuration

use serde::{Deserialize, Serialize};

/// Weights and penalties used by the health scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points for having every slot configured
    pub config_weight: f64,

    /// Points for distinct active providers relative to configured slots
    pub provider_weight: f64,

    /// Points for valid models among well-formed routes
    pub model_weight: f64,

    /// Deduction per slot routed to a deprecated provider
    pub deprecated_penalty: f64,

    /// Deduction per malformed or dangling route
    pub format_error_penalty: f64,

    /// Deduction per route naming a model its provider does not list
    pub unknown_model_penalty: f64,
}

impl ScoringWeights {
    pub fn new() -> Self {
        Self {
            config_weight: 50.0,
            provider_weight: 30.0,
            model_weight: 20.0,
            deprecated_penalty: 5.0,
            format_error_penalty: 10.0,
            unknown_model_penalty: 3.0,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new()
    }
}
