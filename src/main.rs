//! Disaster Gateway Server
//!
//! Main entry point for the proxy gateway server

use disaster_gateway::GatewayBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	GatewayBuilder::new().start_server().await
}
