mod analytics;
mod config;
mod errors;
mod ingest;
mod record;
mod server;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("hedgeboard starting");

    // Load config
    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    // Seed the demo dataset so every view renders before the first upload
    let demo = ingest::demo::demo_dataset();
    tracing::info!(rows = demo.len(), "seeded demo dataset");

    let app_state = AppState::new(cfg.clone(), demo);

    // Axum HTTP + WS server
    let app = axum::Router::new()
        .route("/api/story", axum::routing::get(server::routes::get_story))
        .route("/api/monthly", axum::routing::get(server::routes::get_monthly))
        .route("/api/histogram", axum::routing::get(server::routes::get_histogram))
        .route("/api/correlation", axum::routing::get(server::routes::get_correlation))
        .route("/api/equity", axum::routing::get(server::routes::get_equity))
        .route("/api/beta", axum::routing::get(server::routes::get_beta))
        .route("/api/kpis", axum::routing::get(server::routes::get_kpis))
        .route("/api/sensitivity", axum::routing::get(server::routes::get_sensitivity))
        .route("/api/stress", axum::routing::get(server::routes::get_stress))
        .route("/api/drawdown", axum::routing::get(server::routes::get_drawdown))
        .route("/api/upload", axum::routing::post(server::routes::post_upload))
        .route("/api/counters", axum::routing::get(server::routes::get_counters))
        .route("/ws", axum::routing::get(server::ws::ws_handler))
        .fallback_service(
            tower_http::services::ServeDir::new(&cfg.static_dir).fallback(
                tower_http::services::ServeFile::new(format!("{}/index.html", cfg.static_dir)),
            ),
        )
        .layer(axum::extract::DefaultBodyLimit::max(cfg.max_upload_bytes))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", cfg.server_port);
    tracing::info!("server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("bind error: {e}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
