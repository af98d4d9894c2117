use std::net::SocketAddr;
use std::sync::Arc;

use blockcopy_api::config::ServerConfig;
use blockcopy_api::router::build_app_router;
use blockcopy_api::state::AppState;
use blockcopy_cloudinary::CloudinaryClient;
use blockcopy_core::provider::{LanguageModel, MediaStore};
use blockcopy_openrouter::OpenRouterClient;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = blockcopy_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    blockcopy_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    blockcopy_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    let state = AppState {
        pool,
        llm: language_model(&config),
        media: media_store(&config),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "BlockCopy API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

/// `RUST_LOG` filtering; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blockcopy_api=debug,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn language_model(config: &ServerConfig) -> Option<Arc<dyn LanguageModel>> {
    let Some(openrouter) = config.openrouter.clone() else {
        tracing::warn!("OPENROUTER_API_KEY not set, AI endpoints will answer 503");
        return None;
    };
    tracing::info!(model = %openrouter.default_model, "OpenRouter enabled");
    let client = OpenRouterClient::new(openrouter).expect("Failed to build OpenRouter client");
    Some(Arc::new(client))
}

fn media_store(config: &ServerConfig) -> Option<Arc<dyn MediaStore>> {
    let Some(cloudinary) = config.cloudinary.clone() else {
        tracing::warn!("Cloudinary credentials not set, uploads will answer 503");
        return None;
    };
    tracing::info!(cloud = %cloudinary.cloud_name, "Cloudinary enabled");
    let client = CloudinaryClient::new(cloudinary).expect("Failed to build Cloudinary client");
    Some(Arc::new(client))
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl-C");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("Ctrl-C received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
