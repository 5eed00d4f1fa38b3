// API integration tests that verify HTTP endpoints
// Tests the Axum router against an in-memory SQLite dataset

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use climate_observation_service::api::{create_router, AppState, DATE_FORMAT_MESSAGE};
use climate_observation_service::db::SqliteDataset;
use climate_observation_service::services::ClimateService;
use http_body_util::BodyExt; // For `.collect()`
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt; // For `oneshot`

fn create_test_app(pool: SqlitePool) -> axum::Router {
    let climate_service = ClimateService::new(Arc::new(SqliteDataset::new(pool)));
    create_router(AppState { climate_service })
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_index_lists_routes() {
    let app = create_test_app(common::test_pool().await);

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("/api/v1.0/precipitation"));
    assert!(text.contains("/api/v1.0/stations"));
    assert!(text.contains("/api/v1.0/tobs"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_precipitation_covers_trailing_year() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert!(entries
        .iter()
        .all(|e| e["date"].as_str().unwrap() >= "2016-08-23"));

    assert_eq!(entries[0], json!({ "date": "2016-08-23", "precipitation": 0.15 }));
    assert_eq!(entries[3], json!({ "date": "2016-08-24", "precipitation": null }));
    assert_eq!(entries[9], json!({ "date": "2017-08-23", "precipitation": 0.0 }));
}

#[tokio::test]
async fn test_stations_catalog() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);

    let stations = json.as_array().unwrap();
    assert_eq!(stations.len(), 3);
    assert_eq!(stations[0]["station"], "USC00519397");
    assert_eq!(stations[0]["name"], "WAIKIKI 717.2, HI US");
    assert_eq!(stations[0]["latitude"], 21.2716);
    assert_eq!(stations[0]["longitude"], -157.8168);
}

#[tokio::test]
async fn test_tobs_returns_most_active_station_in_window() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    let observations = json.as_array().unwrap();
    assert_eq!(observations.len(), 3);
    assert!(observations
        .iter()
        .all(|o| o["station"] == common::MOST_ACTIVE_STATION && o["name"] == "WAIHEE 837.5, HI US"));
    assert!(observations
        .iter()
        .all(|o| o["station"] != common::ORPHAN_STATION));
    assert_eq!(
        observations[0],
        json!({
            "station": "USC00519281",
            "name": "WAIHEE 837.5, HI US",
            "date": "2016-08-23",
            "temperature_observed": 77
        })
    );
}

#[tokio::test]
async fn test_statistics_for_closed_range() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/2010-01-01/2010-01-03").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "min": 70, "avg": 75.0, "max": 80 }));
}

#[tokio::test]
async fn test_statistics_open_ended() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/2017-08-22").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "min": 76, "avg": 78.5, "max": 81 }));
}

#[tokio::test]
async fn test_statistics_without_data_returns_nulls() {
    let app = create_test_app(common::test_pool().await);

    let (status, json) = get_json(app, "/api/v1.0/2020-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "min": null, "avg": null, "max": null }));
}

#[tokio::test]
async fn test_statistics_malformed_dates() {
    let pool = common::test_pool().await;

    for uri in [
        "/api/v1.0/2017-13-01",
        "/api/v1.0/17-01-01",
        "/api/v1.0/2017-01-01/2017-01-32",
        "/api/v1.0/not-a-date/2017-01-01",
    ] {
        let (status, json) = get_json(create_test_app(pool.clone()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"], DATE_FORMAT_MESSAGE);
    }
}

#[tokio::test]
async fn test_empty_dataset() {
    let pool = common::empty_pool().await;

    let (status, json) = get_json(create_test_app(pool.clone()), "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());

    let (status, _) = get_json(create_test_app(pool.clone()), "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get_json(create_test_app(pool.clone()), "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let (status, json) = get_json(create_test_app(pool), "/api/v1.0/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "min": null, "avg": null, "max": null }));
}

#[tokio::test]
async fn test_storage_failure_is_server_error() {
    let pool = common::test_pool().await;
    let app = create_test_app(pool.clone());
    pool.close().await;

    let (status, json) = get_json(app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let pool = common::test_pool().await;

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2016-08-23/2017-08-23",
    ] {
        let (_, first) = get(create_test_app(pool.clone()), uri).await;
        let (_, second) = get(create_test_app(pool.clone()), uri).await;
        assert_eq!(first, second, "{uri}");
    }
}
