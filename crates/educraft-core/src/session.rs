//! Session state machine: collecting → generating → previewing.
//!
//! Each state carries exactly the data that may exist in it, so content can
//! only be observed while previewing and nothing survives a reset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SchoolConfig;
use crate::content::GeneratedContent;

/// The single message shown for any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate content. Please check your API key or try again.";

/// State of one user session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Editing the configuration form, optionally after a failed attempt
    Collecting { error: Option<String> },

    /// Waiting on the provider
    Generating { config: SchoolConfig },

    /// Showing the rendered preview
    Previewing {
        config: SchoolConfig,
        content: GeneratedContent,
    },
}

/// Data-free view of a [`Session`] state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Collecting,
    Generating,
    Previewing,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionPhase::Collecting => "collecting",
            SessionPhase::Generating => "generating",
            SessionPhase::Previewing => "previewing",
        })
    }
}

/// Rejected transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: SessionPhase,
        action: &'static str,
    },
}

impl Default for Session {
    fn default() -> Self {
        Session::Collecting { error: None }
    }
}

impl Session {
    /// Start a fresh session in the collecting state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match self {
            Session::Collecting { .. } => SessionPhase::Collecting,
            Session::Generating { .. } => SessionPhase::Generating,
            Session::Previewing { .. } => SessionPhase::Previewing,
        }
    }

    pub fn config(&self) -> Option<&SchoolConfig> {
        match self {
            Session::Collecting { .. } => None,
            Session::Generating { config } | Session::Previewing { config, .. } => Some(config),
        }
    }

    pub fn content(&self) -> Option<&GeneratedContent> {
        match self {
            Session::Previewing { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Error message from the last failed attempt, while collecting.
    pub fn error(&self) -> Option<&str> {
        match self {
            Session::Collecting { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Collecting → Generating. Clears any previous error.
    pub fn submit(&mut self, config: SchoolConfig) -> Result<(), SessionError> {
        self.expect(SessionPhase::Collecting, "submit a configuration")?;
        *self = Session::Generating { config };
        Ok(())
    }

    /// Generating → Previewing, keeping the submitted configuration.
    pub fn succeed(&mut self, content: GeneratedContent) -> Result<(), SessionError> {
        match std::mem::take(self) {
            Session::Generating { config } => {
                *self = Session::Previewing { config, content };
                Ok(())
            }
            other => {
                let from = other.phase();
                *self = other;
                Err(SessionError::InvalidTransition {
                    from,
                    action: "accept generated content",
                })
            }
        }
    }

    /// Generating → Collecting with the failure message. The configuration is dropped.
    pub fn fail(&mut self) -> Result<(), SessionError> {
        self.expect(SessionPhase::Generating, "report a generation failure")?;
        *self = Session::Collecting {
            error: Some(GENERATION_FAILED_MESSAGE.to_string()),
        };
        Ok(())
    }

    /// Previewing → Collecting, discarding both configuration and content.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.expect(SessionPhase::Previewing, "start over")?;
        *self = Session::Collecting { error: None };
        Ok(())
    }

    fn expect(&self, phase: SessionPhase, action: &'static str) -> Result<(), SessionError> {
        if self.phase() == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.phase(),
                action,
            })
        }
    }
}
