//! Stub upstream providers
//!
//! Each stub is a real axum server on an ephemeral port that answers
//! every request with one fixed status/body pair and counts how often
//! it was hit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::Value;
use tokio::task::JoinHandle;

pub struct UpstreamStub {
	pub base_url: String,
	hits: Arc<AtomicUsize>,
	paths: Arc<Mutex<Vec<String>>>,
	handle: JoinHandle<()>,
}

impl UpstreamStub {
	/// Stub answering with the given status and a JSON body
	#[allow(dead_code)]
	pub async fn json(status: StatusCode, body: Value) -> Self {
		Self::spawn(status, "application/json", body.to_string()).await
	}

	/// Stub answering with a non-JSON content type
	#[allow(dead_code)]
	pub async fn text(status: StatusCode, body: &str) -> Self {
		Self::spawn(status, "text/plain", body.to_string()).await
	}

	async fn spawn(status: StatusCode, content_type: &'static str, body: String) -> Self {
		let hits = Arc::new(AtomicUsize::new(0));
		let paths = Arc::new(Mutex::new(Vec::new()));
		let counter = Arc::clone(&hits);
		let recorder = Arc::clone(&paths);

		let app = Router::new().fallback(move |uri: Uri| {
			let body = body.clone();
			let counter = Arc::clone(&counter);
			let recorder = Arc::clone(&recorder);
			async move {
				counter.fetch_add(1, Ordering::SeqCst);
				recorder.lock().unwrap().push(uri.path().to_string());
				(status, [(header::CONTENT_TYPE, content_type)], body).into_response()
			}
		});

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind stub listener");
		let addr = listener.local_addr().expect("stub local addr");
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("serve stub");
		});

		Self {
			base_url: format!("http://{addr}"),
			hits,
			paths,
			handle,
		}
	}

	/// Number of requests the stub has served
	#[allow(dead_code)]
	pub fn hits(&self) -> usize {
		self.hits.load(Ordering::SeqCst)
	}

	/// Request paths the stub has served, in arrival order
	#[allow(dead_code)]
	pub fn paths(&self) -> Vec<String> {
		self.paths.lock().unwrap().clone()
	}

	#[allow(dead_code)]
	pub fn abort(&self) {
		self.handle.abort();
	}
}
