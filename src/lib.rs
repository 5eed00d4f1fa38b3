pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod query_error;
pub mod services;
