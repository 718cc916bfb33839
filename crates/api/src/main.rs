use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ouch_api::config::Settings;
use ouch_api::router::build_app_router;
use ouch_api::state::AppState;
use ouch_weather::{OpenWeatherClient, RetryConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ouch_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let settings = Settings::from_env().expect("Invalid configuration");
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        db_path = %settings.db_path,
        "Loaded settings"
    );

    // --- Database ---
    let pool = ouch_db::create_pool(&settings.db_path)
        .await
        .expect("Failed to open database");
    tracing::info!("Database connection pool created");

    ouch_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    ouch_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Weather client ---
    let weather = OpenWeatherClient::new(settings.ow_api_key.clone(), RetryConfig::default())
        .expect("Failed to build weather client");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(settings.clone()),
        weather: Arc::new(weather),
    };

    // --- Router ---
    let app = build_app_router(state, &settings);

    // --- Start server ---
    let addr = SocketAddr::new(
        settings.host.parse().expect("Invalid HOST address"),
        settings.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
