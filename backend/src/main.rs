use axum::{
    http::Method,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod database;
mod error;
mod handlers;
mod period;
mod query;
mod store;
mod validation;

pub use error::{ApiResult, AppError};

#[cfg(test)]
mod tests;

pub struct AppState {
    pub store: Arc<dyn store::ReportStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    let db_pool = database::create_pool(&config.database_url).await?;

    database::migrate(&db_pool).await?;

    let app_state = Arc::new(AppState {
        store: Arc::new(store::PgStore::new(db_pool)),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(|| async { "Tally Sales Reporting API v1.0.0" }))
        .route("/health", get(handlers::health_check))
        .nest("/sales", handlers::report_routes())
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Server running on {}", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
