//! One-shot site generation command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use educraft_core::{ConfigForm, Session, GENERATION_FAILED_MESSAGE};
use educraft_genai::GeminiClient;
use educraft_server::Controller;
use educraft_static::{BuildConfig, SiteBuilder};

use crate::config::{load_config, ConfigFile, SchoolFields};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub school: SchoolFields,

    /// Output directory (defaults to config or "dist")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip minification
    #[arg(long)]
    pub no_minify: bool,

    /// Open the generated page in a browser
    #[arg(long)]
    pub open: bool,
}

/// Flags layered over the `[school]` defaults.
fn collect_form(file_config: &ConfigFile, args: &GenerateArgs) -> ConfigForm {
    let mut form = file_config.school.form();
    args.school.apply_to(&mut form);
    form
}

/// Run the generate command.
pub async fn run(config_path: &Path, args: GenerateArgs) -> Result<()> {
    let file_config = load_config(config_path)?;

    let school = collect_form(&file_config, &args).submit()?;

    let client = GeminiClient::new(file_config.gemini_config())
        .context("Failed to create content provider client")?;
    tracing::info!(
        "Generating website for {} with {}...",
        school.name,
        client.config().model
    );
    let controller = Controller::new(Arc::new(client));

    controller.run_to_completion(school).await?;

    let Session::Previewing { config, content } = controller.snapshot().await else {
        anyhow::bail!(GENERATION_FAILED_MESSAGE);
    };

    let build_config = BuildConfig {
        output_dir: args.output.unwrap_or(file_config.build.output),
        minify: !args.no_minify && file_config.build.minify,
        ..Default::default()
    };

    let result = SiteBuilder::new(build_config)
        .build(&config, &content)
        .await?;

    tracing::info!(
        "Rendered {} sections with {} testimonials in {}ms",
        result.sections,
        result.testimonials,
        result.duration_ms
    );

    let index = result.output_dir.join("index.html");
    tracing::info!("Output: {}", index.display());

    if args.open {
        if let Err(e) = open::that(&index) {
            tracing::warn!("Could not open browser: {}", e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use educraft_core::SchoolType;
    use pretty_assertions::assert_eq;

    fn args() -> GenerateArgs {
        GenerateArgs {
            school: SchoolFields::default(),
            output: None,
            no_minify: false,
            open: false,
        }
    }

    #[test]
    fn flags_override_file_defaults() {
        let file_config: ConfigFile = toml::from_str(
            r##"
[school]
name = "Springfield Academy"
type = "academy"
motto = "Excellence in Education"
location = "Boston, MA"
primary_color = "#123456"
"##,
        )
        .unwrap();

        let school = collect_form(
            &file_config,
            &GenerateArgs {
                school: SchoolFields {
                    name: Some("Riverside Prep".to_string()),
                    school_type: Some("University".to_string()),
                    ..Default::default()
                },
                ..args()
            },
        )
        .submit()
        .unwrap();

        assert_eq!(school.name, "Riverside Prep");
        assert_eq!(school.school_type, SchoolType::University);
        assert_eq!(school.motto, "Excellence in Education");
        assert_eq!(school.primary_color.as_str(), "#123456");
    }

    #[test]
    fn parses_school_flags() {
        #[derive(clap::Parser)]
        struct Cli {
            #[command(flatten)]
            args: GenerateArgs,
        }

        let cli = <Cli as clap::Parser>::try_parse_from([
            "generate",
            "--name",
            "Riverside Prep",
            "--type",
            "online",
            "--secondary-color",
            "#ABC",
            "--no-minify",
        ])
        .unwrap();

        assert_eq!(cli.args.school.name.as_deref(), Some("Riverside Prep"));
        assert_eq!(cli.args.school.school_type.as_deref(), Some("online"));
        assert!(cli.args.school.motto.is_none());
        assert!(cli.args.no_minify);
        assert_eq!(cli.args.school.updates().len(), 3);
    }

    #[test]
    fn reports_missing_fields() {
        let errors = collect_form(&ConfigFile::default(), &args())
            .submit()
            .unwrap_err();

        assert_eq!(errors.get("name"), Some("School name is required"));
        assert_eq!(errors.get("motto"), Some("Motto is required"));
        assert_eq!(errors.get("location"), Some("Location is required"));
    }

    #[test]
    fn rejects_bad_color_flag() {
        let errors = collect_form(
            &ConfigFile::default(),
            &GenerateArgs {
                school: SchoolFields {
                    name: Some("A".to_string()),
                    motto: Some("B".to_string()),
                    location: Some("C".to_string()),
                    secondary_color: Some("gold".to_string()),
                    ..Default::default()
                },
                ..args()
            },
        )
        .submit()
        .unwrap_err();

        assert!(errors.get("secondaryColor").is_some());
        assert!(errors.get("primaryColor").is_none());
    }
}
