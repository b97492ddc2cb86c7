//! Boundary to the remote evaluation endpoints.

mod client;
mod endpoint;
mod http;
pub mod wire;

pub use client::EvaluationClient;
pub use endpoint::{DEFAULT_ENDPOINT, EvaluationEndpoint};
pub use http::HttpEvaluationClient;

pub use crate::error::{EndpointError, EvaluationError};
