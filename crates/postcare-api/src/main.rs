use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod router;
mod routes;
mod state;

use config::{Config, StorageBackend};
use postcare_auth::TokenKeys;
use postcare_storage::DocumentStore;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let store = match config.storage {
        StorageBackend::S3 => {
            let client = postcare_storage::client::build_client_with_region(&config.region).await;
            DocumentStore::s3(client, &config.bucket)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory document store; data is lost on exit");
            DocumentStore::in_memory()
        }
    };

    tracing::info!(
        backend = store.backend(),
        bucket = %config.bucket,
        lambda = config.lambda,
        "starting postcare api"
    );

    let state = AppState {
        store,
        keys: TokenKeys::from_secret(config.jwt_secret.as_bytes()),
    };
    let app = router::build_router(state);

    if config.lambda {
        lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
    } else {
        let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
        tracing::info!(addr = %config.bind_addr, "listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
