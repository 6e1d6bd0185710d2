use anyhow::Context;
use cmm_config::{CcrConfig, CommandRestarter, ConfigStore, Paths, Restarter};
use cmm_core::RouteSlot;

pub fn run(
    paths: &Paths,
    provider: &str,
    model: &str,
    routes: &[RouteSlot],
    restarter: Option<CommandRestarter>,
) -> anyhow::Result<()> {
    let store = ConfigStore::new(paths.clone());
    let restarter = restarter.as_ref().map(|r| r as &dyn Restarter);
    apply(&store, restarter, provider, model, routes)
}

/// Check the selection against the catalog before touching the file
fn check_selection(config: &CcrConfig, provider: &str, model: &str) -> anyhow::Result<()> {
    let catalog = config.catalog();
    let Some(found) = catalog.find_by_name(provider) else {
        let known: Vec<_> = catalog.active().map(|p| p.name.as_str()).collect();
        anyhow::bail!(
            "provider '{provider}' not found (active providers: {})",
            known.join(", ")
        );
    };
    if found.is_deprecated() {
        anyhow::bail!("provider '{provider}' is deprecated; pick an active provider");
    }
    if !found.offers(model) {
        anyhow::bail!(
            "provider '{provider}' does not offer model '{model}' (models: {})",
            found.models().join(", ")
        );
    }
    Ok(())
}

fn apply(
    store: &ConfigStore,
    restarter: Option<&dyn Restarter>,
    provider: &str,
    model: &str,
    routes: &[RouteSlot],
) -> anyhow::Result<()> {
    let mut config = store.load()?;
    check_selection(&config, provider, model)?;

    let all = RouteSlot::ALL;
    let slots = if routes.is_empty() {
        &all[..]
    } else {
        routes
    };
    config.assign(slots, provider, model);
    store
        .save(&config)
        .with_context(|| format!("failed to update {}", store.path().display()))?;

    let names: Vec<_> = slots.iter().map(|s| s.key()).collect();
    println!("Routed {} to {provider},{model}", names.join(", "));

    if let Some(restarter) = restarter {
        let outcome = restarter.restart();
        if outcome.success {
            println!("{}", outcome.message);
        } else {
            eprintln!("{}", outcome.message);
            if let Some(error) = &outcome.error {
                eprintln!("  cause: {error}");
            }
            eprintln!("  run manually: {}", outcome.manual_command);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmm_config::RestartOutcome;
    use std::cell::Cell;

    const DOC: &str = r#"{
        "PORT": 3456,
        "Providers": [
            {"name": "acme", "api_base_url": "u", "api_key": "k", "models": ["gpt-4", "gpt-3.5"]},
            {"name": "old", "api_base_url": "u", "api_key": "k", "models": ["m"], "deprecated": true}
        ],
        "Router": {"default": "old,m", "think": "old,m"}
    }"#;

    struct FakeRestarter {
        calls: Cell<usize>,
    }

    impl Restarter for FakeRestarter {
        fn restart(&self) -> RestartOutcome {
            self.calls.set(self.calls.get() + 1);
            RestartOutcome {
                success: true,
                message: "restarted".to_string(),
                error: None,
                manual_command: "ccr restart".to_string(),
            }
        }
    }

    fn store_with_doc(temp: &tempfile::TempDir) -> ConfigStore {
        let path = temp.path().join("config.json");
        std::fs::write(&path, DOC).unwrap();
        ConfigStore::new(Paths::with_config_file(path))
    }

    #[test]
    fn test_apply_selected_routes() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = store_with_doc(&temp);
        let restarter = FakeRestarter { calls: Cell::new(0) };

        apply(&store, Some(&restarter), "acme", "gpt-3.5", &[RouteSlot::Think]).unwrap();

        let table = store.load().unwrap().route_table();
        assert_eq!(table.get(RouteSlot::Think), Some("acme,gpt-3.5"));
        assert_eq!(table.get(RouteSlot::Default), Some("old,m"));
        assert_eq!(restarter.calls.get(), 1);
    }

    #[test]
    fn test_apply_all_routes_without_restart() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = store_with_doc(&temp);

        apply(&store, None, "acme", "gpt-4", &[]).unwrap();

        let config = store.load().unwrap();
        for slot in RouteSlot::ALL {
            assert_eq!(config.route_table().get(slot), Some("acme,gpt-4"));
        }
        assert_eq!(config.extra["PORT"], 3456);
    }

    #[test]
    fn test_apply_rejects_bad_selection() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = store_with_doc(&temp);
        let before = std::fs::read_to_string(store.path()).unwrap();

        assert!(apply(&store, None, "nobody", "gpt-4", &[]).is_err());
        assert!(apply(&store, None, "old", "m", &[]).is_err());
        let err = apply(&store, None, "acme", "gpt-9", &[]).unwrap_err();
        assert!(err.to_string().contains("gpt-9"));

        // Rejected selections leave the file untouched
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }
}
