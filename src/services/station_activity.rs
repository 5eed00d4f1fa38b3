use std::collections::BTreeMap;

use crate::db::{Measurement, StationActivity};

/// Station with the most measurements among `measurements`.
///
/// Ties go to the lexicographically smallest station identifier. Returns
/// `None` when there are no measurements.
pub fn most_active_station(measurements: &[Measurement]) -> Option<StationActivity> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for measurement in measurements {
        *counts.entry(measurement.station.as_str()).or_insert(0) += 1;
    }

    // BTreeMap iterates in ascending id order; only a strictly larger count replaces the leader
    let mut leader: Option<(&str, usize)> = None;
    for (station, count) in counts {
        if leader.map_or(true, |(_, best)| count > best) {
            leader = Some((station, count));
        }
    }

    leader.map(|(station, observation_count)| StationActivity {
        station: station.to_string(),
        observation_count,
    })
}
