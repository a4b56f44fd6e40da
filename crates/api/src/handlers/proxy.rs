use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use tracing::info;

use dgw_types::{ProxyRequest, ServiceRequest, ServiceResponse};

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

/// POST /api/v1/proxy - resolve and relay one provider request
///
/// The body is parsed by hand so a malformed payload still gets the
/// documented `{error}` shape instead of a bare rejection. Unknown
/// services are rejected here, before any upstream call is issued.
pub async fn post_proxy(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<ServiceResponse>, (StatusCode, Json<ErrorResponse>)> {
	let wire: ProxyRequest = serde_json::from_slice(&body)
		.map_err(|e| bad_request(format!("malformed request: {e}")))?;

	let request = ServiceRequest::try_from(wire).map_err(|e| bad_request(e.to_string()))?;

	info!(
		service = %request.service,
		endpoint = %request.endpoint,
		"processing proxy request"
	);

	let response = state.gateway.dispatch(&request).await;
	if let Some(error) = &response.error {
		return Err(bad_request(error.clone()));
	}

	Ok(Json(response))
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
	(StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}
