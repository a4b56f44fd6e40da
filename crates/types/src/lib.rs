//! Disaster Gateway Types
//!
//! Shared models for the disaster-information gateway and client.
//! This crate contains the wire shapes, the domain entities synthesized
//! from provider data, and the error taxonomy both sides agree on.

pub mod events;
pub mod news;
pub mod proxy;
pub mod risk;
pub mod secret_string;
pub mod weather;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use proxy::{
	CredentialPlacement, DataSource, GatewayError, HttpMethod, ProxyRequest, Service,
	ServiceRequest, ServiceResponse, UpstreamCall,
};

pub use events::{Coordinates, DisasterEvent, DisasterType, Severity};

pub use risk::{DisasterForecast, DisasterRisk, RiskParseError};

pub use news::{NewsArticle, NewsFeed};
pub use weather::{CurrentConditions, WeatherAlert, WeatherReport};

pub use secret_string::SecretString;
