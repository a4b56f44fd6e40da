//! Disaster Gateway Library
//!
//! A proxy gateway for disaster-information providers (weather,
//! news, satellite imagery, generative risk analysis) plus a typed
//! client with independent fixture fallback. The gateway shields the
//! browser from upstream credentials and per-provider quirks; both
//! layers degrade gracefully so the UI always has data to render.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core wire and domain types
pub use dgw_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	Coordinates,
	DataSource,
	DisasterEvent,
	DisasterForecast,
	DisasterRisk,
	DisasterType,
	GatewayError,
	NewsArticle,
	NewsFeed,
	ProxyRequest,
	RiskParseError,
	SecretString,
	Service,
	ServiceRequest,
	ServiceResponse,
	Severity,
	WeatherAlert,
	WeatherReport,
};

// Gateway layer
pub use dgw_gateway::{
	fixtures, EndpointMode, GatewayService, ParamsMode, ProviderRoute, RouteTable,
};

// API layer
pub use dgw_api::{create_router, AppState};

// Client layer
pub use dgw_client::{
	ClientOptions, DisasterClient, Notifier, Region, TracingNotifier, REGIONS,
};

// Config
pub use dgw_config::{
	load_config, log_credential_status, log_service_info, log_service_shutdown,
	log_startup_complete, LogFormat, Settings,
};

// Module aliases for direct access to the member crates
pub mod types {
	pub use dgw_types::*;
}

pub mod gateway {
	pub use dgw_gateway::*;
}

pub mod api {
	pub use dgw_api::*;
}

pub mod client {
	pub use dgw_client::*;
}

pub mod config {
	pub use dgw_config::*;
}

/// Builder for configuring and starting the gateway server
#[derive(Default)]
pub struct GatewayBuilder {
	settings: Option<Settings>,
	routes: Option<RouteTable>,
}

impl GatewayBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the provider route table (tests aim it at stubs)
	pub fn with_routes(mut self, routes: RouteTable) -> Self {
		self.routes = Some(routes);
		self
	}

	/// Build the router and shared state without binding a socket
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let mut gateway = GatewayService::new(&settings)?;
		if let Some(routes) = self.routes {
			gateway = gateway.with_routes(routes);
		}

		let state = AppState {
			gateway: Arc::new(gateway),
		};
		let router = create_router().with_state(state.clone());

		Ok((router, state))
	}

	/// Start the complete server: load .env and configuration,
	/// initialize tracing, then bind and serve.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		init_tracing(&settings);
		log_service_info();
		log_credential_status(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("invalid bind address '{bind_addr}': {e}"))?;

		self.settings = Some(settings);
		let (app, _) = self.start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;
		log_startup_complete(&bind_addr);
		info!("📡 Proxy endpoint: POST /api/v1/proxy");

		axum::serve(listener, app)
			.with_graceful_shutdown(async {
				// Serve until interrupted; a failed signal registration
				// falls through to an immediate shutdown.
				if let Err(e) = tokio::signal::ctrl_c().await {
					tracing::error!("failed to listen for shutdown signal: {e}");
				}
			})
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

fn init_tracing(settings: &Settings) {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

	match settings.logging.format {
		LogFormat::Json => {
			tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.init();
		}
	}
}
