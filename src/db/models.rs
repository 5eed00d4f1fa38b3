use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Dataset records, mapped explicitly from the `measurement` and `station` tables
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Measurement {
    pub station: String,
    pub date: NaiveDate,
    pub precipitation: Option<f64>,
    pub temperature_observed: i32,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

// API response DTOs
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PrecipitationEntry {
    pub date: NaiveDate,
    /// Inches; `null` when the station did not report precipitation that day
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TemperatureObservation {
    pub station: String,
    pub name: String,
    pub date: NaiveDate,
    pub temperature_observed: i32,
}

/// Min/avg/max temperature (°F) over a date range.
///
/// All three fields are `null` when no measurement falls in the range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TemperatureStats {
    pub min: Option<i32>,
    pub avg: Option<f64>,
    pub max: Option<i32>,
}

impl TemperatureStats {
    pub fn empty() -> Self {
        Self {
            min: None,
            avg: None,
            max: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: usize,
}
