use journey_link::config::ServerConfig;
use journey_link::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "journey_link=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    // Build app state
    let state = AppState::new(config.rows.clone(), config.link.clone());

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.addr;
    tracing::info!(
        host = %config.link.host,
        variant = %config.link.variant,
        "Journey Link Builder listening on http://{addr}"
    );
    tracing::info!("API Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  POST /api/rows/reconcile  - Reconcile station rows");
    tracing::info!("  POST /api/link            - Generate a link");
    tracing::info!("  POST /api/form/input      - Reconcile rows and generate a link");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
