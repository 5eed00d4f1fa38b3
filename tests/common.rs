use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub const MOST_ACTIVE_STATION: &str = "USC00519281";
pub const ORPHAN_STATION: &str = "USC00000000";

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )
    "#,
    r#"
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )
    "#,
];

const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

// Latest date is 2017-08-23, so the trailing window starts at 2016-08-23.
// USC00519397 has the most rows overall but USC00519281 leads inside the window;
// the orphan station leads the window too but has no catalog entry.
const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2010-01-01", Some(0.08), 70.0),
    ("USC00519397", "2010-01-02", Some(0.0), 75.0),
    ("USC00519397", "2010-01-03", Some(0.0), 80.0),
    ("USC00519397", "2016-08-22", Some(0.5), 80.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519281", "2016-08-24", None, 77.0),
    ("USC00000000", "2017-01-01", Some(0.0), 70.0),
    ("USC00000000", "2017-01-02", Some(0.0), 70.0),
    ("USC00000000", "2017-01-03", Some(0.0), 70.0),
    ("USC00000000", "2017-01-04", Some(0.0), 70.0),
    ("USC00519281", "2017-08-22", Some(0.5), 76.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
];

/// Single-connection in-memory database; the connection is never recycled
/// because the data lives only as long as it does
pub async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    create_schema(&pool).await;
    pool
}

/// In-memory database loaded with the fixture stations and measurements
pub async fn test_pool() -> SqlitePool {
    let pool = empty_pool().await;
    seed(&pool).await;
    pool
}

pub async fn create_schema(pool: &SqlitePool) {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to create schema");
    }
}

pub async fn seed(pool: &SqlitePool) {
    for &(station, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(pool)
        .await
        .expect("Failed to insert station");
    }

    for &(station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(pool)
            .await
            .expect("Failed to insert measurement");
    }
}
