use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

use crate::db::ClimateDataset;
use crate::query_error::QueryError;

/// Length of the default reporting horizon, in plain calendar days
pub const TRAILING_WINDOW_DAYS: i64 = 365;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start of the trailing window ending at `latest`.
///
/// Fixed day offset, leap days count like any other day.
pub fn trailing_window_start(latest: NaiveDate) -> NaiveDate {
    latest - Duration::days(TRAILING_WINDOW_DAYS)
}

/// Start of the trailing window anchored to the most recent measurement in the dataset
#[instrument(skip(dataset))]
pub async fn latest_window_start(dataset: &dyn ClimateDataset) -> Result<NaiveDate, QueryError> {
    let latest = dataset
        .latest_measurement_date()
        .await?
        .ok_or(QueryError::EmptyDataset)?;

    let start = trailing_window_start(latest);
    debug!("Latest measurement {} gives window start {}", latest, start);
    Ok(start)
}

/// Parse a calendar date in strict `YYYY-MM-DD` form
pub fn parse_date(text: &str) -> Result<NaiveDate, QueryError> {
    if !has_canonical_shape(text) {
        return Err(QueryError::InvalidDateFormat(text.to_string()));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| QueryError::InvalidDateFormat(text.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// chrono accepts single-digit months/days and signed years, so check the layout first
fn has_canonical_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
