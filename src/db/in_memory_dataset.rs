//! Vec-backed dataset.
//!
//! Holds both collections in memory and applies the same filtering and
//! ordering rules as the SQLite store. Suits callers that already hold the
//! records, such as unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::{ClimateDataset, DbError, Measurement, Station};

#[derive(Clone, Default)]
pub struct InMemoryDataset {
    measurements: Arc<Vec<Measurement>>,
    stations: Arc<Vec<Station>>,
}

impl InMemoryDataset {
    pub fn new(mut measurements: Vec<Measurement>, stations: Vec<Station>) -> Self {
        // Stable sort keeps load order for rows sharing a date and station
        measurements.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.station.cmp(&b.station)));
        Self {
            measurements: Arc::new(measurements),
            stations: Arc::new(stations),
        }
    }
}

#[async_trait]
impl ClimateDataset for InMemoryDataset {
    async fn measurements_in_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Measurement>, DbError> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| from.map_or(true, |from| m.date >= from))
            .filter(|m| to.map_or(true, |to| m.date <= to))
            .cloned()
            .collect())
    }

    async fn all_stations(&self) -> Result<Vec<Station>, DbError> {
        Ok(self.stations.as_ref().clone())
    }
}
