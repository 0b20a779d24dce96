//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use educraft_core::{GeneratedContent, SchoolConfig};

use crate::assets::AssetPipeline;
use crate::templates::{PageOptions, TemplateEngine};

/// Sections every page renders, testimonials aside.
const FIXED_SECTIONS: usize = 6;

/// Configuration for writing a generated site to disk.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Prefix for asset links; empty keeps them relative to the page
    pub base_url: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: String::new(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of page sections rendered
    pub sections: usize,

    /// Number of testimonials in the carousel
    pub testimonials: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to process assets: {0}")]
    AssetError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Renders one school's page and writes it with its assets.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Render the standalone page without touching the filesystem.
    pub fn render(
        &self,
        school: &SchoolConfig,
        content: &GeneratedContent,
    ) -> Result<String, BuildError> {
        let options = PageOptions {
            base_url: self.config.base_url.clone(),
            ..Default::default()
        };

        self.templates
            .render_preview(school, content, &options)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    /// Build the site into the output directory.
    pub async fn build(
        &self,
        school: &SchoolConfig,
        content: &GeneratedContent,
    ) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let html = self.render(school, content)?;
        let index = self.config.output_dir.join("index.html");
        fs::write(&index, html).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", index.display());

        self.generate_assets()?;

        let testimonials = content.testimonials.len();
        let sections = FIXED_SECTIONS + usize::from(testimonials > 0);

        Ok(BuildResult {
            sections,
            testimonials,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Stylesheet as served, minified when configured.
    pub fn stylesheet(&self) -> Result<String, BuildError> {
        let css = AssetPipeline::generate_css();
        if self.config.minify {
            AssetPipeline::minify_css(&css).map_err(BuildError::AssetError)
        } else {
            Ok(css)
        }
    }

    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("main.css"), self.stylesheet()?)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("main.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use educraft_core::{BrandColor, SchoolType};
    use tempfile::tempdir;

    fn school() -> SchoolConfig {
        SchoolConfig {
            name: "Springfield Academy".to_string(),
            school_type: SchoolType::HighSchool,
            motto: "Excellence in Education".to_string(),
            location: "Boston, MA".to_string(),
            primary_color: BrandColor::parse("#0f766e").unwrap(),
            secondary_color: BrandColor::secondary(),
        }
    }

    fn content() -> GeneratedContent {
        GeneratedContent::from_json(include_str!(
            "../../educraft-core/testdata/springfield.json"
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn builds_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        });
        let result = builder.build(&school(), &content()).await.unwrap();

        assert_eq!(result.sections, 7);
        assert_eq!(result.testimonials, 6);
        assert_eq!(result.output_dir, out);

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("--brand-primary: #0f766e;"));
        assert!(!html.contains("EduCraft Preview Mode"));

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert!(css.contains(".bg-primary"));
        assert!(!css.contains("\n  "));

        assert!(out.join("assets/main.js").exists());
    }

    #[tokio::test]
    async fn links_assets_relative_to_page() {
        let temp = tempdir().unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: temp.path().to_path_buf(),
            ..Default::default()
        });
        builder.build(&school(), &content()).await.unwrap();

        let html = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(html.contains(r#"href="assets/main.css""#));
        assert!(html.contains(r#"src="assets/main.js""#));
        assert!(!html.contains("&#x2f;assets"));
        assert!(!html.contains(r#"="/assets"#));
    }

    #[tokio::test]
    async fn counts_sections_without_testimonials() {
        let temp = tempdir().unwrap();
        let mut content = content();
        content.testimonials.clear();

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: temp.path().to_path_buf(),
            minify: false,
            ..Default::default()
        });
        let result = builder.build(&school(), &content).await.unwrap();

        assert_eq!(result.sections, 6);
        assert_eq!(result.testimonials, 0);

        let css = fs::read_to_string(temp.path().join("assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
    }

    #[tokio::test]
    async fn reports_unwritable_output() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: blocker.join("dist"),
            ..Default::default()
        });
        let err = builder.build(&school(), &content()).await.unwrap_err();

        assert!(matches!(err, BuildError::WriteError(_)));
    }
}
