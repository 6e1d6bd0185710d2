use cmm_config::Paths;
use cmm_core::{HealthReport, RouteStatus};

use crate::display::{cell, status_label, status_meaning};

const SLOT_WIDTH: usize = 12;
const PROVIDER_WIDTH: usize = 20;
const MODEL_WIDTH: usize = 32;
const STATUS_WIDTH: usize = 14;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    let report = super::evaluate(&config);
    println!("{}", build_table(&report));
    Ok(())
}

fn build_table(report: &HealthReport) -> String {
    let mut lines = Vec::new();

    lines.push("Current Router Configuration".to_string());
    lines.push(String::new());
    lines.push(format!(
        "{} {} {} {}",
        cell("Slot", SLOT_WIDTH),
        cell("Provider", PROVIDER_WIDTH),
        cell("Model", MODEL_WIDTH),
        cell("Status", STATUS_WIDTH),
    ));
    lines.push("-".repeat(SLOT_WIDTH + PROVIDER_WIDTH + MODEL_WIDTH + STATUS_WIDTH + 3));

    for check in &report.routers {
        lines.push(
            format!(
                "{} {} {} {}",
                cell(check.slot.display_name(), SLOT_WIDTH),
                cell(check.provider_name.as_deref().unwrap_or("-"), PROVIDER_WIDTH),
                cell(check.model_name.as_deref().unwrap_or("-"), MODEL_WIDTH),
                cell(status_label(check.status), STATUS_WIDTH),
            )
            .trim_end()
            .to_string(),
        );
    }

    // Explain anything that is configured but not clean
    let problems: Vec<_> = report
        .routers
        .iter()
        .filter(|c| c.status.is_configured() && c.status != RouteStatus::Active)
        .collect();
    if !problems.is_empty() {
        lines.push(String::new());
        for check in problems {
            lines.push(format!(
                "  {} ({}): {} ({})",
                check.slot.display_name(),
                check.slot.description(),
                status_meaning(check.status),
                check.error.as_deref().unwrap_or_default()
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Total: {}/{} routes configured, {} active providers",
        report.summary.configured_routers,
        report.summary.total_routers,
        report.summary.active_providers
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmm_core::{Provider, ProviderCatalog, RouteSlot, RouteTable, ScoringWeights};

    fn report(table: RouteTable) -> HealthReport {
        let catalog = ProviderCatalog::new(vec![
            Provider::new("acme", &["gpt-4"]),
            Provider::new("old", &["m"]).deprecated(),
        ]);
        HealthReport::evaluate(&table, &catalog, &ScoringWeights::default())
    }

    #[test]
    fn test_table_lists_every_slot() {
        let table = build_table(&report(RouteTable::new()));
        for slot in RouteSlot::ALL {
            assert!(table.contains(slot.display_name()), "missing {}", slot);
        }
        assert!(table.contains("Total: 0/5 routes configured, 0 active providers"));
    }

    #[test]
    fn test_table_shows_statuses_and_problems() {
        let table = build_table(&report(
            RouteTable::new()
                .with(RouteSlot::Default, "acme,gpt-4")
                .with(RouteSlot::Think, "old,m")
                .with(RouteSlot::WebSearch, "acme"),
        ));

        assert!(table.contains("active"));
        assert!(table.contains("deprecated"));
        assert!(table.contains("format error"));
        assert!(table.contains("  Think (deep reasoning route): provider is deprecated but usable"));
        assert!(table.contains("Long context"));
        assert!(table.contains("Total: 3/5 routes configured, 1 active providers"));
    }
}
