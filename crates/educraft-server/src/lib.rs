//! Interactive studio for EduCraft.
//!
//! Serves the configuration wizard, runs generation on a background task and
//! pushes state changes to the browser over a WebSocket.

pub mod controller;
pub mod server;
pub mod websocket;

pub use controller::Controller;
pub use server::{ServerError, StudioConfig, StudioServer};
pub use websocket::{events_client_script, EventHub, StudioMessage};
