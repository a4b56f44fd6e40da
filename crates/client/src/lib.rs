//! Disaster Gateway Client
//!
//! Typed, purpose-specific fetch helpers over the proxy gateway.
//! Every helper degrades gracefully: when the gateway itself is
//! unreachable or replies with anything unusable, the helper
//! substitutes a local fixture and surfaces a non-blocking user
//! notification, so callers always receive a renderable value. This
//! fallback layer is independent of the gateway's own fixture
//! substitution - the system stays usable with zero live
//! connectivity.

pub mod classify;
pub mod client;
pub mod errors;
pub mod events;
pub mod fixtures;
pub mod notify;
pub mod risk;

pub use classify::{classify_severity, classify_type};
pub use client::{ClientOptions, DisasterClient};
pub use errors::ClientError;
pub use events::{events_from_news, events_from_weather, Region, REGIONS};
pub use notify::{Notifier, TracingNotifier};
