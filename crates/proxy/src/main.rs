use std::sync::Arc;

use proxy::config::print_usage;
use proxy::{ArgsError, ProxyConfig, init_tracing, serve};
use services::TextGenerationService;
use tracing::warn;

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = match ProxyConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ArgsError::HelpRequested) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing()?;

    let generator = TextGenerationService::from_env();
    if let Err(err) = generator.config().checked_api_key() {
        // Requests will fail with this message until the key is fixed.
        warn!(%err, "upstream key not usable");
    }

    serve(config, Arc::new(generator)).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
