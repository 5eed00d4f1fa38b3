use std::collections::HashSet;

use crate::db::{Measurement, PrecipitationEntry, Station, TemperatureObservation, TemperatureStats};

/// `(date, precipitation)` for every measurement, missing values kept as `None`
pub fn precipitation_series(measurements: &[Measurement]) -> Vec<PrecipitationEntry> {
    measurements
        .iter()
        .map(|m| PrecipitationEntry {
            date: m.date,
            precipitation: m.precipitation,
        })
        .collect()
}

/// Keep only measurements whose station exists in the catalog
pub fn cataloged_only(measurements: Vec<Measurement>, stations: &[Station]) -> Vec<Measurement> {
    let catalog: HashSet<&str> = stations.iter().map(|s| s.station.as_str()).collect();

    measurements
        .into_iter()
        .filter(|m| catalog.contains(m.station.as_str()))
        .collect()
}

/// Temperature records of `station`, in input order
pub fn temperature_history(
    measurements: &[Measurement],
    station: &Station,
) -> Vec<TemperatureObservation> {
    measurements
        .iter()
        .filter(|m| m.station == station.station)
        .map(|m| TemperatureObservation {
            station: m.station.clone(),
            name: station.name.clone(),
            date: m.date,
            temperature_observed: m.temperature_observed,
        })
        .collect()
}

/// Min, mean and max of the observed temperatures.
///
/// Returns [`TemperatureStats::empty`] when there are no measurements.
pub fn temperature_stats(measurements: &[Measurement]) -> TemperatureStats {
    let temps = measurements.iter().map(|m| m.temperature_observed);

    let (Some(min), Some(max)) = (temps.clone().min(), temps.clone().max()) else {
        return TemperatureStats::empty();
    };

    let sum: i64 = temps.map(i64::from).sum();
    let avg = sum as f64 / measurements.len() as f64;

    TemperatureStats {
        min: Some(min),
        avg: Some(avg),
        max: Some(max),
    }
}
