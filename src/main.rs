use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use climate_observation_service::app::Application;
use climate_observation_service::config::Config;
use climate_observation_service::db::DbPool;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,climate_observation_service=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    info!("Starting climate observation service with config: {:?}", config);

    info!("Opening climate dataset...");
    let pool = DbPool::connect_read_only(&config.database_url, config.db_max_connections).await?;

    let app = Application::build(config, pool).await?;
    app.run_until_stopped().await
}
