use cmm_config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

pub fn run() -> anyhow::Result<()> {
    println!("{}", build_version());
    Ok(())
}

fn build_version() -> String {
    format!(
        "cmm {}\nRoute health and model selection for claude-code-router\nDefault config: ~/{CONFIG_DIR_NAME}/{CONFIG_FILE_NAME}",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mentions_config_location() {
        let text = build_version();
        assert!(text.starts_with(&format!("cmm {}", env!("CARGO_PKG_VERSION"))));
        assert!(text.ends_with("~/.claude-code-router/config.json"));
    }
}
