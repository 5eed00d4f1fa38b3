pub mod climate_dataset;
pub mod error;
pub mod in_memory_dataset;
pub mod measurement_repository;
pub mod models;
pub mod pool;
pub mod station_repository;

pub use climate_dataset::{ClimateDataset, SqliteDataset};
pub use error::DbError;
pub use in_memory_dataset::InMemoryDataset;
pub use measurement_repository::MeasurementRepository;
pub use models::*;
pub use pool::DbPool;
pub use station_repository::StationRepository;
