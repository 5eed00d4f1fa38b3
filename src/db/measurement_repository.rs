use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use crate::db::{DbError, Measurement};

#[derive(Clone)]
pub struct MeasurementRepository {
    pool: SqlitePool,
}

impl MeasurementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find measurements with `from <= date <= to`, either bound optional
    #[instrument(skip(self))]
    pub async fn find_by_date_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Measurement>, DbError> {
        debug!("Querying measurements from {:?} to {:?}", from, to);

        let measurements = sqlx::query_as::<_, Measurement>(
            r#"
            SELECT station,
                   date,
                   CAST(prcp AS REAL) AS precipitation,
                   CAST(tobs AS INTEGER) AS temperature_observed
            FROM measurement
            WHERE (?1 IS NULL OR date >= ?1)
              AND (?2 IS NULL OR date <= ?2)
            ORDER BY date, station, rowid
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} measurements", measurements.len());
        Ok(measurements)
    }

    /// Most recent measurement date across all stations
    #[instrument(skip(self))]
    pub async fn find_latest_date(&self) -> Result<Option<NaiveDate>, DbError> {
        debug!("Querying for latest measurement date");

        let latest = sqlx::query_scalar::<_, Option<NaiveDate>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        match latest {
            Some(date) => debug!("Latest measurement date is {}", date),
            None => debug!("No measurements found in database"),
        }

        Ok(latest)
    }
}
