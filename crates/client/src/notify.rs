//! Non-blocking user notifications
//!
//! The original UI surfaced connectivity problems as transient,
//! dismissable toasts. The client keeps that contract behind a trait
//! so embedders can wire their own sink; the default routes messages
//! through the log stream.

use tracing::warn;

/// Sink for transient, user-facing messages
pub trait Notifier: Send + Sync {
	fn notify(&self, message: &str);
}

/// Default notifier that logs messages at warn level
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
	fn notify(&self, message: &str) {
		warn!(notification = message, "user notification");
	}
}
