use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};
use utoipa::{OpenApi, ToSchema};

use crate::db::{PrecipitationEntry, Station, TemperatureObservation, TemperatureStats};
use crate::query_error::QueryError;
use crate::services::ClimateService;

pub const DATE_FORMAT_MESSAGE: &str = "Date must be in 'YYYY-MM-DD' format.";

const INDEX_HTML: &str = "Hawaii Climate API database<br/>\
-------------------------------------<br/><br/>\
Available Routes:<br/>\
-----------------------<br/>\
1. Last 12 months of precipitation data -<br/>\
&nbsp;&nbsp;/api/v1.0/precipitation<br/><br/>\
2. List of weather stations -<br/>\
&nbsp;&nbsp;/api/v1.0/stations<br/><br/>\
3. Temperature observations of the most active station for the last year -<br/>\
&nbsp;&nbsp;/api/v1.0/tobs<br/><br/>\
4. Minimum, average and maximum temperature of a given date range -<br/>\
&nbsp;&nbsp;/api/v1.0/(start date 'YYYY-MM-DD')<br/>&nbsp;&nbsp;or<br/>\
&nbsp;&nbsp;/api/v1.0/(start date 'YYYY-MM-DD')/(end date 'YYYY-MM-DD')";

#[derive(Clone)]
pub struct AppState {
    pub climate_service: ClimateService,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        get_precipitation,
        get_stations,
        get_temperature_observations,
        get_statistics_from,
        get_statistics_between,
    ),
    components(schemas(
        HealthResponse,
        ErrorResponse,
        PrecipitationEntry,
        Station,
        TemperatureObservation,
        TemperatureStats,
    )),
    tags((name = "climate", description = "Historical weather station observations"))
)]
pub struct ApiDoc;

pub fn generate_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/precipitation", get(get_precipitation))
        .route("/stations", get(get_stations))
        .route("/tobs", get(get_temperature_observations))
        .route("/{start}", get(get_statistics_from))
        .route("/{start}/{end}", get(get_statistics_between))
        .with_state(state);

    Router::new()
        .route("/", get(index))
        .nest("/api/v1.0", api_routes)
}

fn into_api_error(err: QueryError) -> ApiError {
    match err {
        QueryError::InvalidDateFormat(text) => {
            warn!("Rejected malformed date {:?}", text);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: DATE_FORMAT_MESSAGE.to_string(),
                }),
            )
        }
        QueryError::EmptyDataset => {
            warn!("No measurements available for request");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "No measurements available.".to_string(),
                }),
            )
        }
        QueryError::StorageUnavailable(e) => {
            error!("Climate dataset unavailable: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Climate data is currently unavailable.".to_string(),
                }),
            )
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/health",
    tag = "climate",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[instrument]
async fn health() -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    tag = "climate",
    responses(
        (status = 200, description = "Precipitation of the last 12 months of data", body = [PrecipitationEntry]),
        (status = 404, description = "Dataset holds no measurements", body = ErrorResponse),
        (status = 500, description = "Dataset unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
async fn get_precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationEntry>>, ApiError> {
    debug!("Fetching trailing-year precipitation");
    let series = state
        .climate_service
        .get_precipitation()
        .await
        .map_err(into_api_error)?;

    info!("Returning {} precipitation entries", series.len());
    Ok(Json(series))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    tag = "climate",
    responses(
        (status = 200, description = "Station catalog", body = [Station]),
        (status = 500, description = "Dataset unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
async fn get_stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, ApiError> {
    debug!("Fetching station catalog");
    let stations = state
        .climate_service
        .get_stations()
        .await
        .map_err(into_api_error)?;

    info!("Returning {} stations", stations.len());
    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    tag = "climate",
    responses(
        (status = 200, description = "Last year of temperatures for the most active station", body = [TemperatureObservation]),
        (status = 404, description = "No measurements in the trailing window", body = ErrorResponse),
        (status = 500, description = "Dataset unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
async fn get_temperature_observations(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    debug!("Fetching temperature observations of the most active station");
    let observations = state
        .climate_service
        .get_temperature_observations()
        .await
        .map_err(into_api_error)?;

    info!("Returning {} temperature observations", observations.len());
    Ok(Json(observations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    tag = "climate",
    params(("start" = String, Path, description = "First date of the range, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Temperature statistics from the start date onward", body = TemperatureStats),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Dataset unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(start = %start))]
async fn get_statistics_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, ApiError> {
    debug!("Computing temperature statistics from {}", start);
    let stats = state
        .climate_service
        .get_statistics(&start, None)
        .await
        .map_err(into_api_error)?;

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    tag = "climate",
    params(
        ("start" = String, Path, description = "First date of the range, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last date of the range (inclusive), YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Temperature statistics for the date range", body = TemperatureStats),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Dataset unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(start = %start, end = %end))]
async fn get_statistics_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, ApiError> {
    debug!("Computing temperature statistics from {} to {}", start, end);
    let stats = state
        .climate_service
        .get_statistics(&start, Some(&end))
        .await
        .map_err(into_api_error)?;

    Ok(Json(stats))
}
