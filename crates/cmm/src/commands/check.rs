use cmm_config::{lint, ConfigStore, LintReport, Paths};

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let store = ConfigStore::new(paths.clone());
    let config = store.load()?;
    let report = lint(&config);

    println!("{}", build_check(&store.path().display().to_string(), &report));

    if !report.is_usable() {
        anyhow::bail!("config has {} error(s)", report.errors.len());
    }
    Ok(())
}

fn build_check(path: &str, report: &LintReport) -> String {
    let mut sections = Vec::new();

    sections.push(format!("Config Check\n============\n  File: {path}"));

    if !report.errors.is_empty() {
        sections.push("\nErrors\n------".to_string());
        for e in &report.errors {
            sections.push(format!("  ERR  {e}"));
        }
    }

    if !report.warnings.is_empty() {
        sections.push("\nWarnings\n--------".to_string());
        for w in &report.warnings {
            sections.push(format!("  WARN {w}"));
        }
    }

    sections.push(format!(
        "\n{} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    ));

    sections.join("\n")
}
