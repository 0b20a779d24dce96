//! Configuration file structure (educraft.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use educraft_core::{ConfigForm, FieldUpdate};
use educraft_genai::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub school: SchoolFields,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub studio: StudioSettings,
}

/// School fields as given in the `[school]` table or as `generate` flags.
#[derive(Debug, Deserialize, Default, Args)]
pub struct SchoolFields {
    /// School name
    #[arg(long)]
    pub name: Option<String>,

    /// Institution type (elementary, high-school, university, academy, online)
    #[serde(rename = "type")]
    #[arg(long = "type", value_name = "TYPE")]
    pub school_type: Option<String>,

    /// Motto or slogan
    #[arg(long)]
    pub motto: Option<String>,

    /// City and region
    #[arg(long)]
    pub location: Option<String>,

    /// Primary brand color (#rgb or #rrggbb)
    #[arg(long)]
    pub primary_color: Option<String>,

    /// Secondary accent color (#rgb or #rrggbb)
    #[arg(long)]
    pub secondary_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub model: String,
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub output: PathBuf,
    pub minify: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StudioSettings {
    pub host: String,
    pub port: u16,
    pub open: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            minify: true,
        }
    }
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            open: true,
        }
    }
}

impl SchoolFields {
    /// Field updates for every value present.
    pub fn updates(&self) -> Vec<FieldUpdate> {
        let fields: [(&Option<String>, fn(String) -> FieldUpdate); 6] = [
            (&self.name, FieldUpdate::Name),
            (&self.school_type, FieldUpdate::SchoolType),
            (&self.motto, FieldUpdate::Motto),
            (&self.location, FieldUpdate::Location),
            (&self.primary_color, FieldUpdate::PrimaryColor),
            (&self.secondary_color, FieldUpdate::SecondaryColor),
        ];

        fields
            .into_iter()
            .filter_map(|(value, update)| value.clone().map(update))
            .collect()
    }

    /// Overwrite the form with every value present.
    pub fn apply_to(&self, form: &mut ConfigForm) {
        for update in self.updates() {
            form.apply(update);
        }
    }

    /// A form prefilled with these values.
    pub fn form(&self) -> ConfigForm {
        let mut form = ConfigForm::new();
        self.apply_to(&mut form);
        form
    }
}

impl ConfigFile {
    /// Provider settings, with the key read from the configured variable.
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            model: self.generator.model.clone(),
            base_url: self.generator.base_url.clone(),
            timeout: Duration::from_secs(self.generator.timeout_secs),
            ..GeminiConfig::from_env_var(&self.generator.api_key_env)
        }
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use educraft_core::SchoolType;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("educraft.toml")).unwrap();

        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert_eq!(config.generator.api_key_env, "API_KEY");
        assert_eq!(config.generator.timeout_secs, 60);
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.minify);
        assert_eq!(config.studio.port, 7878);
        assert!(config.school.updates().is_empty());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("educraft.toml");
        fs::write(
            &path,
            "[studio]\nport = 9000\n\n[generator]\nmodel = \"gemini-2.0-flash\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.studio.port, 9000);
        assert_eq!(config.studio.host, "127.0.0.1");
        assert_eq!(config.generator.model, "gemini-2.0-flash");
        assert_eq!(config.generator.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("educraft.toml");
        fs::write(&path, "[studio\nport = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn school_section_prefills_form() {
        let config: ConfigFile = toml::from_str(
            r##"
[school]
name = "Lakeside Online"
type = "online"
motto = "Learn Anywhere"
location = "Portland, OR"
primary_color = "#0F766E"
"##,
        )
        .unwrap();

        let school = config.school.form().submit().unwrap();

        assert_eq!(school.name, "Lakeside Online");
        assert_eq!(school.school_type, SchoolType::Online);
        assert_eq!(school.primary_color.as_str(), "#0f766e");
        assert_eq!(school.secondary_color.as_str(), "#eab308");
    }

    #[test]
    fn generator_settings_flow_into_client_config() {
        let config: ConfigFile = toml::from_str(
            "[generator]\nbase_url = \"http://127.0.0.1:9999\"\ntimeout_secs = 5\napi_key_env = \"EDUCRAFT_TEST_UNSET_KEY\"\n",
        )
        .unwrap();

        let gemini = config.gemini_config();

        assert_eq!(gemini.base_url, "http://127.0.0.1:9999");
        assert_eq!(gemini.timeout, Duration::from_secs(5));
        assert_eq!(gemini.model, DEFAULT_MODEL);
    }
}
