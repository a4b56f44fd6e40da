//! Disaster Gateway API
//!
//! REST surface for the proxy gateway: one proxy endpoint plus a
//! health check, with open CORS for the browser client.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
