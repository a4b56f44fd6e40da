//! Gateway test server
//!
//! Spawns the real gateway (builder, router, state) on an ephemeral
//! port so client round trips exercise the full HTTP path.

use disaster_gateway::{GatewayBuilder, RouteTable};
use tokio::task::JoinHandle;

pub struct TestServer {
	pub base_url: String,
	handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a gateway whose providers resolve through `routes`
	#[allow(dead_code)]
	pub async fn spawn(routes: RouteTable) -> Self {
		let (app, _state) = GatewayBuilder::new()
			.with_settings(super::test_settings())
			.with_routes(routes)
			.start()
			.expect("build gateway");

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind gateway listener");
		let addr = listener.local_addr().expect("gateway local addr");
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("serve gateway");
		});

		Self {
			base_url: format!("http://{addr}"),
			handle,
		}
	}

	#[allow(dead_code)]
	pub fn abort(&self) {
		self.handle.abort();
	}
}
