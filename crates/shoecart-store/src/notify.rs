//! # Notifications
//!
//! Fire-and-forget sink for the user-facing failure messages.
//!
//! ```text
//! CartStore ──report_error("Erro na remoção do produto")──► Notifier
//!                                                             │
//!                      ┌──────────────────────────────────────┼──────────┐
//!                      ▼                                      ▼          ▼
//!              TracingNotifier                       ChannelNotifier   (UI)
//!              warn! log line                        mpsc → UI loop
//! ```

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Receives messages the user should see.
pub trait Notifier: Send + Sync {
    /// Reports an error message. Never blocks, never fails.
    fn report_error(&self, message: &str);
}

/// Notifier that writes each message to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report_error(&self, message: &str) {
        warn!(notice = message, "cart notice");
    }
}

/// Notifier that forwards messages to a UI loop over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Creates the notifier and the receiver the UI drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelNotifier { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn report_error(&self, message: &str) {
        // A closed receiver means nobody is showing toasts any more
        if self.tx.send(message.to_string()).is_err() {
            debug!(notice = message, "notice dropped, receiver closed");
        }
    }
}
