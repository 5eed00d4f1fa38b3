use std::sync::Arc;

use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::db::{DbPool, SqliteDataset};
use crate::services::ClimateService;

/// Running HTTP server over the climate dataset
pub struct Application {
    pub server_handle: JoinHandle<Result<(), std::io::Error>>,
}

impl Application {
    /// Build the dataset, service and router, then spawn the server
    pub async fn build(config: Config, pool: DbPool) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing application components");

        let dataset = SqliteDataset::new(pool.pool().clone());
        let climate_service = ClimateService::new(Arc::new(dataset));

        let app_state = AppState { climate_service };
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let addr = config.server_addr();
        info!("Starting HTTP server on {}", addr);

        let server_handle = tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await
        });

        info!("Application initialized successfully");

        Ok(Self { server_handle })
    }

    /// Run until the server stops
    pub async fn run_until_stopped(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server_handle.await??;
        Ok(())
    }
}
