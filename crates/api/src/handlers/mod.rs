//! Request handlers

pub mod common;
pub mod health;
pub mod proxy;

pub use health::health;
pub use proxy::post_proxy;
