use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::db::{ClimateDataset, PrecipitationEntry, Station, TemperatureObservation, TemperatureStats};
use crate::query_error::QueryError;
use crate::services::aggregation::{
    cataloged_only, precipitation_series, temperature_history, temperature_stats,
};
use crate::services::date_window::{latest_window_start, parse_date};
use crate::services::station_activity::most_active_station;

/// The four read operations served by the API.
///
/// Every call re-derives the trailing window from the current data; nothing is cached.
#[derive(Clone)]
pub struct ClimateService {
    dataset: Arc<dyn ClimateDataset>,
}

impl ClimateService {
    pub fn new(dataset: Arc<dyn ClimateDataset>) -> Self {
        Self { dataset }
    }

    /// Precipitation readings of every station over the trailing 12 months
    #[instrument(skip(self))]
    pub async fn get_precipitation(&self) -> Result<Vec<PrecipitationEntry>, QueryError> {
        let window_start = latest_window_start(self.dataset.as_ref()).await?;
        let measurements = self
            .dataset
            .measurements_in_range(Some(window_start), None)
            .await?;

        info!(
            "Built precipitation series of {} entries since {}",
            measurements.len(),
            window_start
        );
        Ok(precipitation_series(&measurements))
    }

    #[instrument(skip(self))]
    pub async fn get_stations(&self) -> Result<Vec<Station>, QueryError> {
        let stations = self.dataset.all_stations().await?;
        info!("Retrieved {} stations", stations.len());
        Ok(stations)
    }

    /// Trailing-year temperatures of the station that reported most often in that year
    #[instrument(skip(self))]
    pub async fn get_temperature_observations(
        &self,
    ) -> Result<Vec<TemperatureObservation>, QueryError> {
        let window_start = latest_window_start(self.dataset.as_ref()).await?;
        let stations = self.dataset.all_stations().await?;
        let measurements = cataloged_only(
            self.dataset
                .measurements_in_range(Some(window_start), None)
                .await?,
            &stations,
        );

        let active = most_active_station(&measurements).ok_or(QueryError::EmptyDataset)?;
        debug!(
            "Most active station since {} is {} with {} observations",
            window_start, active.station, active.observation_count
        );

        // cataloged_only guarantees the active station is in the catalog
        let station = stations
            .iter()
            .find(|s| s.station == active.station)
            .ok_or(QueryError::EmptyDataset)?;

        let observations = temperature_history(&measurements, station);
        info!(
            "Retrieved {} temperature observations for {}",
            observations.len(),
            station.station
        );
        Ok(observations)
    }

    /// Min/avg/max temperature from `start` through `end` (inclusive, open-ended when absent)
    #[instrument(skip(self))]
    pub async fn get_statistics(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, QueryError> {
        let from = parse_date(start)?;
        let to = end.map(parse_date).transpose()?;

        let measurements = self.dataset.measurements_in_range(Some(from), to).await?;
        let stats = temperature_stats(&measurements);

        if stats.is_empty() {
            info!("No measurements between {} and {:?}", from, to);
        } else {
            info!(
                "Computed statistics over {} measurements between {} and {:?}",
                measurements.len(),
                from,
                to
            );
        }
        Ok(stats)
    }
}
