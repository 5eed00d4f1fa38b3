pub mod aggregation;
pub mod climate_service;
pub mod date_window;
pub mod station_activity;

pub use climate_service::ClimateService;
