//! Disaster Gateway Core
//!
//! Translates logical `{service, endpoint, params}` requests into
//! concrete upstream provider calls and relays the result, shielding
//! callers from upstream credentials and per-provider quirks. Upstream
//! failures are masked by per-service fixture substitution so the
//! caller always has something to render.

pub mod fixtures;
pub mod routes;
pub mod service;

pub use routes::{EndpointMode, ParamsMode, ProviderRoute, RouteTable};
pub use service::GatewayService;
