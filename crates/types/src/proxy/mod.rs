//! Wire shapes shared by the proxy gateway and the client

pub mod errors;
pub mod request;
pub mod response;
pub mod upstream;

pub use errors::GatewayError;
pub use request::{ProxyRequest, Service, ServiceRequest};
pub use response::{DataSource, ServiceResponse};
pub use upstream::{CredentialPlacement, HttpMethod, UpstreamCall};
