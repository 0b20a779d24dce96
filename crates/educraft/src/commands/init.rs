//! Write a starter configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Set API_KEY and run 'educraft studio' to get started.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# EduCraft Configuration

[school]
# Defaults for `educraft generate`; flags take precedence
# name = "Springfield Academy"
# elementary | high-school | university | academy | online
type = "high-school"
# motto = "Excellence in Education"
# location = "Boston, MA"
primary_color = "#1e40af"
secondary_color = "#eab308"

[generator]
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"

# Environment variable holding the API key (never stored here)
api_key_env = "API_KEY"

# Request timeout in seconds
timeout_secs = 60

[build]
# Output directory for generated sites
output = "dist"

# Enable minification
minify = true

[studio]
host = "127.0.0.1"
port = 7878
open = true
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_loadable_default_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("educraft.toml");

        run(&path, false).await.unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.studio.port, 7878);
        assert_eq!(config.generator.api_key_env, "API_KEY");
        assert_eq!(config.school.school_type.as_deref(), Some("high-school"));
        assert!(config.school.name.is_none());
    }

    #[tokio::test]
    async fn keeps_existing_file_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("educraft.toml");
        fs::write(&path, "[studio]\nport = 9000\n").unwrap();

        run(&path, false).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[studio]\nport = 9000\n");

        run(&path, true).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
