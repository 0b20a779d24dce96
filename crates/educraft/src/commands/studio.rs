//! Interactive studio command.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use educraft_genai::GeminiClient;
use educraft_server::{Controller, StudioConfig, StudioServer};

use crate::config::load_config;

/// Run the studio.
pub async fn run(config_path: &Path, port: Option<u16>, open: Option<bool>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let gemini = file_config.gemini_config();
    if gemini.api_key.is_none() {
        tracing::warn!(
            "No API key found in ${}; generation will fail until one is set",
            file_config.generator.api_key_env
        );
    }

    let client = GeminiClient::new(gemini)?;
    tracing::debug!("Using model {}", client.config().model);
    let controller = Controller::new(Arc::new(client));

    let config = StudioConfig {
        host: file_config.studio.host,
        port: port.unwrap_or(file_config.studio.port),
        open: open.unwrap_or(file_config.studio.open),
    };

    tracing::info!("Starting studio on port {}", config.port);

    StudioServer::new(config, controller).start().await?;

    Ok(())
}
