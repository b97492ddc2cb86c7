//! HTTP endpoints the quiz UI calls to have answers scored.
//!
//! `POST {prefix}/evaluate-answer` and `POST {prefix}/evaluate-overall` forward to a hosted
//! generative-text model and reply with `{"feedback": ..}` / `{"evaluation": ..}`, or
//! `{"error": ..}` on failure.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use tracing::info;

pub use services::init_tracing;
use services::TextGenerator;

pub use config::{ArgsError, ProxyConfig};
pub use error::ApiError;
pub use routes::{ProxyState, router};

/// Binds `config.bind` and serves until the process is stopped.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(config: ProxyConfig, generator: Arc<dyn TextGenerator>) -> std::io::Result<()> {
    let app = router(&config, ProxyState::new(generator));
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        prefix = %config.prefix,
        "evaluation proxy listening"
    );
    axum::serve(listener, app).await
}
