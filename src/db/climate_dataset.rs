use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::db::{DbError, Measurement, MeasurementRepository, Station, StationRepository};

/// Read-only access to the measurement and station collections.
///
/// Implementations return measurements ordered by date, then station, so that
/// repeated reads over unchanged data produce identical results.
#[async_trait]
pub trait ClimateDataset: Send + Sync {
    /// Measurements with `date >= from` (if given) and `date <= to` (if given)
    async fn measurements_in_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Measurement>, DbError>;

    /// The full station catalog in catalog order
    async fn all_stations(&self) -> Result<Vec<Station>, DbError>;

    /// Maximum measurement date across all stations, `None` for an empty collection
    async fn latest_measurement_date(&self) -> Result<Option<NaiveDate>, DbError> {
        let measurements = self.measurements_in_range(None, None).await?;
        Ok(measurements.iter().map(|m| m.date).max())
    }
}

/// SQLite-backed dataset (the `measurement` and `station` tables)
#[derive(Clone)]
pub struct SqliteDataset {
    measurement_repo: MeasurementRepository,
    station_repo: StationRepository,
}

impl SqliteDataset {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            measurement_repo: MeasurementRepository::new(pool.clone()),
            station_repo: StationRepository::new(pool),
        }
    }
}

#[async_trait]
impl ClimateDataset for SqliteDataset {
    async fn measurements_in_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Measurement>, DbError> {
        self.measurement_repo.find_by_date_range(from, to).await
    }

    async fn all_stations(&self) -> Result<Vec<Station>, DbError> {
        self.station_repo.find_all().await
    }

    async fn latest_measurement_date(&self) -> Result<Option<NaiveDate>, DbError> {
        self.measurement_repo.find_latest_date().await
    }
}
