use cmm_config::Paths;
use cmm_core::HealthReport;

pub fn run(paths: &Paths, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    let report = super::evaluate(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", build_health(&report));
    }
    Ok(())
}

fn build_health(report: &HealthReport) -> String {
    let mut sections = Vec::new();
    let stats = &report.statistics;

    sections.push(format!(
        "Route Health\n============\nScore: {}/100 ({})",
        report.summary.health_score, report.summary.health_status
    ));

    sections.push(format!(
        "\nStatistics\n----------\n\
         Configured routes: {}/{}\n\
         Active providers: {}\n\
         Deprecated provider routes: {}\n\
         Unknown model routes: {}\n\
         Configuration errors: {}",
        stats.configured_slots,
        stats.total_slots,
        stats.active_provider_count,
        stats.deprecated_provider_hits,
        stats.unknown_model_hits,
        stats.format_error_hits,
    ));

    let recommendations = report
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, r)| format!("  {}. {}", i + 1, r))
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!(
        "\nRecommendations\n---------------\n{}",
        recommendations
    ));

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmm_core::{Provider, ProviderCatalog, RouteTable, ScoringWeights};

    fn sample_report(route: &str) -> HealthReport {
        let catalog = ProviderCatalog::new(vec![Provider::new("acme", &["gpt-4", "gpt-3.5"])]);
        HealthReport::evaluate(
            &RouteTable::uniform(route),
            &catalog,
            &ScoringWeights::default(),
        )
    }

    #[test]
    fn test_build_health_has_sections() {
        let text = build_health(&sample_report("acme,gpt-4"));
        assert!(text.contains("Route Health"));
        assert!(text.contains("Score: 100/100 (excellent)"));
        assert!(text.contains("Statistics"));
        assert!(text.contains("Recommendations"));
        assert!(text.contains("  1. "));
    }

    #[test]
    fn test_build_health_unknown_models() {
        let text = build_health(&sample_report("acme,gpt-9"));
        assert!(text.contains("Score: 65/100 (fair)"));
        assert!(text.contains("Unknown model routes: 5"));
    }
}
