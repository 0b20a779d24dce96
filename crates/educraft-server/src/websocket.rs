//! WebSocket notifications for session state changes.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use educraft_core::SessionPhase;

/// Messages sent to connected browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioMessage {
    /// The session moved to a new state
    StateChanged { phase: SessionPhase },

    /// Connection established
    Connected,
}

/// Hub for broadcasting studio messages to all connected clients.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<StudioMessage>,
}

impl EventHub {
    /// Create a new event hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: StudioMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Subscribe to studio messages.
    pub fn subscribe(&self) -> broadcast::Receiver<StudioMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side script that reloads the page on state changes.
///
/// The socket URL is resolved against the page's own host, so the script
/// works on whatever port the studio is bound to.
pub fn events_client_script(path: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
  const ws = new WebSocket(scheme + location.host + '{}');

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);

    switch (msg.type) {{
      case 'state_changed':
        location.reload();
        break;

      case 'connected':
        console.log('[EduCraft] Studio connected');
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[EduCraft] Studio disconnected');
  }};
}})();
"#,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = EventHub::new();
        let mut rx = hub.subscribe();

        hub.send(StudioMessage::StateChanged {
            phase: SessionPhase::Previewing,
        });

        match rx.try_recv() {
            Ok(StudioMessage::StateChanged { phase }) => {
                assert_eq!(phase, SessionPhase::Previewing)
            }
            other => panic!("Expected StateChanged message, got {:?}", other),
        }
    }

    #[test]
    fn send_without_subscribers_is_silent() {
        let hub = EventHub::new();
        assert_eq!(hub.subscriber_count(), 0);
        hub.send(StudioMessage::Connected);
    }

    #[test]
    fn counts_live_subscribers() {
        let hub = EventHub::new();
        let first = hub.subscribe();
        let second = hub.clone().subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        drop(first);
        assert_eq!(hub.subscriber_count(), 1);
        drop(second);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn serializes_messages() {
        let json = serde_json::to_string(&StudioMessage::StateChanged {
            phase: SessionPhase::Collecting,
        })
        .unwrap();

        assert_eq!(json, r#"{"type":"state_changed","phase":"collecting"}"#);
    }

    #[test]
    fn script_targets_given_path() {
        let script = events_client_script("/__events");
        assert!(script.contains("location.host + '/__events'"));
        assert!(script.contains("'state_changed'"));
    }
}
