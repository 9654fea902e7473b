use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cache;
mod config;
mod forecast;
mod history;
mod query;
mod routes;

use config::Config;
use forecast::openweather::OpenWeatherClient;
use query::QueryCoordinator;
use routes::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_outlook_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let port = config.port;
    let ttl = Duration::from_secs(config.cache_ttl_secs);

    // Initialize weather client and the query pipeline around it
    let weather_client = OpenWeatherClient::new(config);
    let coordinator = Arc::new(QueryCoordinator::new(weather_client, ttl));

    // Create application state
    let state = AppState {
        coordinator,
        last_result: Arc::new(Mutex::new(None)),
    };

    let app = create_router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Server starting on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
