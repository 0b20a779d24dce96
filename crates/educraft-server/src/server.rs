//! Studio server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tokio::sync::RwLock;

use educraft_core::{ConfigForm, FieldUpdate, Session};
use educraft_static::{AssetPipeline, PageOptions, TemplateEngine};

use crate::controller::Controller;
use crate::websocket::{events_client_script, StudioMessage};

const EVENTS_PATH: &str = "/__events";
const EVENTS_SCRIPT_PATH: &str = "/__events.js";

/// Configuration for the studio server.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Open browser on start
    pub open: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),
}

/// Shared server state.
struct StudioState {
    controller: Controller,
    templates: TemplateEngine,

    /// Last form the user posted, kept so a failed attempt can be edited
    draft: RwLock<ConfigForm>,
}

/// Interactive studio server.
pub struct StudioServer {
    config: StudioConfig,
    controller: Controller,
}

impl StudioServer {
    /// Create a new studio server around a controller.
    pub fn new(config: StudioConfig, controller: Controller) -> Self {
        Self { config, controller }
    }

    /// Build the studio router.
    pub fn router(&self) -> Router {
        let state = Arc::new(StudioState {
            controller: self.controller.clone(),
            templates: TemplateEngine::new(),
            draft: RwLock::new(ConfigForm::new()),
        });

        Router::new()
            .route("/", get(index_handler))
            .route("/generate", post(generate_handler))
            .route("/reset", post(reset_handler))
            .route("/assets/main.css", get(css_handler))
            .route("/assets/main.js", get(js_handler))
            .route(EVENTS_PATH, get(ws_handler))
            .route(EVENTS_SCRIPT_PATH, get(events_script_handler))
            .with_state(state)
    }

    /// Start the studio server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        tracing::info!("Studio running at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Could not open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}

fn render_failure(e: minijinja::Error) -> Response {
    tracing::error!("Failed to render page: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}

/// Handler for the index page: whatever the session currently shows.
async fn index_handler(State(state): State<Arc<StudioState>>) -> Response {
    let session = state.controller.snapshot().await;

    let rendered = match &session {
        Session::Collecting { error } => {
            let draft = state.draft.read().await;
            state
                .templates
                .render_wizard(&draft, None, error.as_deref(), &PageOptions::default())
        }
        Session::Generating { config } => state.templates.render_loading(
            config,
            &PageOptions {
                live_events: Some(EVENTS_SCRIPT_PATH.to_string()),
                ..Default::default()
            },
        ),
        Session::Previewing { config, content } => state.templates.render_preview(
            config,
            content,
            &PageOptions {
                studio: true,
                ..Default::default()
            },
        ),
    };

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(e),
    }
}

/// Handler for wizard submissions.
async fn generate_handler(
    State(state): State<Arc<StudioState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let mut form = ConfigForm::new();
    for (name, value) in fields {
        match FieldUpdate::from_field(&name, value) {
            Ok(update) => form.apply(update),
            Err(e) => tracing::debug!("Ignoring form input: {}", e),
        }
    }

    let config = match form.submit() {
        Ok(config) => config,
        Err(errors) => {
            tracing::debug!("{}", errors);
            let rendered = state.templates.render_wizard(
                &form,
                Some(&errors),
                None,
                &PageOptions::default(),
            );
            *state.draft.write().await = form;
            return match rendered {
                Ok(html) => (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response(),
                Err(e) => render_failure(e),
            };
        }
    };

    // Held across the submit so a quick failure cannot render the old draft.
    let mut draft = state.draft.write().await;
    match state.controller.submit(config).await {
        // The task outlives this request.
        Ok(_task) => {
            *draft = form;
            Redirect::to("/").into_response()
        }
        // A rejected post leaves the draft of the running attempt alone.
        Err(e) => (StatusCode::CONFLICT, e.to_string()).into_response(),
    }
}

/// Handler for "Start Over".
async fn reset_handler(State(state): State<Arc<StudioState>>) -> Response {
    match state.controller.reset().await {
        Ok(()) => {
            *state.draft.write().await = ConfigForm::new();
            Redirect::to("/").into_response()
        }
        Err(e) => (StatusCode::CONFLICT, e.to_string()).into_response(),
    }
}

async fn css_handler() -> impl IntoResponse {
    let css = AssetPipeline::generate_css();
    let css = AssetPipeline::minify_css(&css).unwrap_or(css);
    ([(header::CONTENT_TYPE, "text/css")], css)
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Handler for the state notification WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<StudioState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<StudioState>) {
    let mut rx = state.controller.events().subscribe();
    tracing::debug!(
        "Studio client connected ({} listening)",
        state.controller.events().subscriber_count()
    );

    if !send_message(&mut socket, &StudioMessage::Connected).await {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if !send_message(&mut socket, &msg).await {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &StudioMessage) -> bool {
    let Ok(json) = serde_json::to_string(msg) else {
        return false;
    };
    socket.send(Message::Text(json.into())).await.is_ok()
}

/// Handler for the notification client script.
async fn events_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        events_client_script(EVENTS_PATH),
    )
}
