//! Content generation for EduCraft.
//!
//! Turns a [`SchoolConfig`](educraft_core::SchoolConfig) into a prompt plus a
//! fixed response schema, issues one call to the generative provider, and
//! parses the reply into [`GeneratedContent`](educraft_core::GeneratedContent).

pub mod gemini;
pub mod prompt;
pub mod traits;

pub use gemini::{GeminiClient, GeminiConfig, API_KEY_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompt::{build_prompt, response_schema, SYSTEM_INSTRUCTION};
pub use traits::{ContentGenerator, GenerationError};
