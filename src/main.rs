use pavilion::server::{config::Config, model::app::AppState, router, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    let app = router::routes()
        .with_state(AppState::new(db, config.default_max_overs))
        .layer(startup::cors_layer(&config))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = match TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind port {}: {}", config.port, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on port {}", config.port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
    }
}
