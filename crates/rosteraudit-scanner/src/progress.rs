//! Fire-and-forget progress reporting.

use tokio::sync::mpsc::UnboundedSender;

/// Receives human-readable status lines during a run.
///
/// Implementations must not fail the run; a missing listener is fine.
pub trait ProgressSink: Send + Sync {
    /// Deliver one status line.
    fn report(&self, message: &str);
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _message: &str) {}
}

/// Logs progress at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&self, message: &str) {
        tracing::info!("{message}");
    }
}

impl ProgressSink for UnboundedSender<String> {
    fn report(&self, message: &str) {
        // Receiver may be gone
        let _ = self.send(message.to_string());
    }
}
