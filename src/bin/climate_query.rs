/// Run a climate query against a dataset and print the result as JSON
use std::sync::Arc;

use clap::{Parser, Subcommand};
use climate_observation_service::config::DEFAULT_DATABASE_URL;
use climate_observation_service::db::{DbPool, SqliteDataset};
use climate_observation_service::services::ClimateService;

#[derive(Parser)]
#[command(name = "climate-query")]
#[command(about = "Query historical station observations", long_about = None)]
struct Cli {
    /// Database connection string
    #[arg(long, env, default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Precipitation over the last 12 months of data
    Precipitation,
    /// Station catalog
    Stations,
    /// Last year of temperatures for the most active station
    Tobs,
    /// Min/avg/max temperature from START (through END when given)
    Stats {
        /// Start date, YYYY-MM-DD
        start: String,
        /// End date, YYYY-MM-DD
        end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let pool = DbPool::connect_read_only(&cli.database_url, 1).await?;
    let service = ClimateService::new(Arc::new(SqliteDataset::new(pool.pool().clone())));

    let json = match cli.command {
        Command::Precipitation => serde_json::to_string_pretty(&service.get_precipitation().await?)?,
        Command::Stations => serde_json::to_string_pretty(&service.get_stations().await?)?,
        Command::Tobs => {
            serde_json::to_string_pretty(&service.get_temperature_observations().await?)?
        }
        Command::Stats { start, end } => serde_json::to_string_pretty(
            &service.get_statistics(&start, end.as_deref()).await?,
        )?,
    };

    println!("{json}");
    pool.pool().close().await;

    Ok(())
}
