//! Health score computation

use crate::analyzer::AggregateStats;
use crate::config::ScoringWeights;

#[derive(Debug, Clone, Default)]
pub struct HealthScorer {
    weights: ScoringWeights,
}

impl HealthScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score in `[0, 100]`: completeness, provider spread and model validity,
    /// minus per-slot penalties. Rounded half up, clamped last.
    pub fn score(&self, stats: &AggregateStats) -> u8 {
        if stats.total_slots == 0 {
            return 0;
        }

        let w = &self.weights;
        let configured = stats.configured_slots as f64;
        let valid_configs = stats
            .configured_slots
            .saturating_sub(stats.format_error_hits);

        let config_score = configured / stats.total_slots as f64 * w.config_weight;

        let provider_score = if stats.configured_slots > 0 {
            stats.active_provider_count as f64 / configured * w.provider_weight
        } else {
            0.0
        };

        let model_score = if valid_configs > 0 {
            let valid_models = valid_configs.saturating_sub(stats.unknown_model_hits);
            valid_models as f64 / valid_configs as f64 * w.model_weight
        } else {
            0.0
        };

        let penalties = stats.deprecated_provider_hits as f64 * w.deprecated_penalty
            + stats.format_error_hits as f64 * w.format_error_penalty
            + stats.unknown_model_hits as f64 * w.unknown_model_penalty;

        let raw = config_score + provider_score + model_score - penalties;

        tracing::debug!(
            config_score,
            provider_score,
            model_score,
            penalties,
            raw,
            "computed health score"
        );

        (raw + 0.5).floor().clamp(0.0, 100.0) as u8
    }
}

/// Score with the default weights
pub fn score(stats: &AggregateStats) -> u8 {
    HealthScorer::default().score(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(
        configured: usize,
        active: usize,
        deprecated: usize,
        unknown: usize,
        format: usize,
    ) -> AggregateStats {
        AggregateStats {
            total_slots: 5,
            configured_slots: configured,
            active_provider_count: active,
            deprecated_provider_hits: deprecated,
            unknown_model_hits: unknown,
            format_error_hits: format,
        }
    }

    #[test]
    fn test_perfect_score() {
        assert_eq!(score(&stats(5, 1, 0, 0, 0)), 100);
    }

    #[test]
    fn test_nothing_configured() {
        assert_eq!(score(&stats(0, 0, 0, 0, 0)), 0);
    }

    #[test]
    fn test_zero_total_slots() {
        let mut s = stats(3, 1, 0, 0, 0);
        s.total_slots = 0;
        assert_eq!(score(&s), 0);
    }

    #[test]
    fn test_deprecated_everywhere() {
        assert_eq!(score(&stats(5, 0, 5, 0, 0)), 45);
    }

    #[test]
    fn test_unknown_models_everywhere() {
        assert_eq!(score(&stats(5, 1, 0, 5, 0)), 65);
    }

    #[test]
    fn test_single_format_error() {
        assert_eq!(score(&stats(1, 0, 0, 0, 1)), 0);
    }

    #[test]
    fn test_rounds_half_up() {
        // 3/5*50 = 30, 1/3*30 = 10, 20 -> 60 exactly
        assert_eq!(score(&stats(3, 1, 0, 0, 0)), 60);

        let scorer = HealthScorer::new(ScoringWeights {
            unknown_model_penalty: 2.5,
            ..ScoringWeights::default()
        });
        // 30 + 10 + (2/3)*20 - 2.5 = 50.83 -> 51
        assert_eq!(scorer.score(&stats(3, 1, 0, 1, 0)), 51);

        let scorer = HealthScorer::new(ScoringWeights {
            deprecated_penalty: 0.5,
            ..ScoringWeights::default()
        });
        // 50 + 30 + 20 - 0.5 = 99.5 -> 100
        assert_eq!(scorer.score(&stats(5, 5, 1, 0, 0)), 100);
    }

    #[test]
    fn test_clamped_to_range() {
        assert_eq!(score(&stats(5, 0, 0, 0, 5)), 0);
        // Nonsensical counters still stay in range
        assert_eq!(score(&stats(5, 50, 0, 0, 0)), 100);
        assert_eq!(score(&stats(2, 0, 0, 9, 0)), 0);
    }

    #[test]
    fn test_bounds_over_all_small_stats() {
        for configured in 0..=5 {
            for active in 0..=configured {
                for deprecated in 0..=configured {
                    for unknown in 0..=configured {
                        for format in 0..=configured {
                            let s = score(&stats(configured, active, deprecated, unknown, format));
                            assert!(s <= 100);
                        }
                    }
                }
            }
        }
    }
}
