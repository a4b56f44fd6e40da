use std::sync::Arc;

use dgw_gateway::GatewayService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub gateway: Arc<GatewayService>,
}
