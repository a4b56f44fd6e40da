//! Service startup logging for the disaster gateway

use std::env;

use tracing::{info, warn};

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "disaster-gateway";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Disaster Gateway Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Warns once per provider whose credential is absent
///
/// A missing credential is a configuration warning, not a startup
/// failure: requests for that provider are still attempted and fall
/// back to fixture data when the upstream rejects them.
pub fn log_credential_status(settings: &Settings) {
	let missing = settings.providers.missing();
	if missing.is_empty() {
		info!("🔑 All provider credentials configured");
		return;
	}

	for service in missing {
		warn!(
			"🔑 No credential configured for provider '{}'; live calls will likely fail and serve fixture data",
			service
		);
	}
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Disaster Gateway Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Disaster Gateway Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
