use crate::db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),
    #[error("No measurements available")]
    EmptyDataset,
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] DbError),
}
