//! Presentation layer for EduCraft.
//!
//! Renders a school configuration plus its generated content into a single
//! marketing page, along with the wizard and loading pages used by the studio.

pub mod assets;
pub mod builder;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use templates::{PageOptions, TemplateEngine};
