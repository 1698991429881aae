use thiserror::Error;
use worker::Error as WorkerError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Underlying message without the variant prefix, as reported in the
    /// `details` field of JSON error bodies.
    pub fn details(&self) -> String {
        match self {
            AppError::Worker(e) => e.to_string(),
            AppError::Database(msg) | AppError::InvalidPayload(msg) | AppError::Internal(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InvalidPayload(error.to_string())
    }
}

impl From<AppError> for WorkerError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Worker(e) => e,
            AppError::Database(msg) => WorkerError::RustError(msg),
            AppError::InvalidPayload(msg) => WorkerError::RustError(msg),
            AppError::Internal(msg) => WorkerError::RustError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_strips_variant_prefix() {
        let err = AppError::Database("D1_ERROR: no such table".to_string());
        assert_eq!(err.to_string(), "Database error: D1_ERROR: no such table");
        assert_eq!(err.details(), "D1_ERROR: no such table");
    }

    #[test]
    fn json_errors_become_invalid_payload() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(parse_err);
        assert!(matches!(err, AppError::InvalidPayload(_)));
    }

    #[test]
    fn converts_into_worker_error() {
        let err: WorkerError = AppError::Internal("boom".to_string()).into();
        assert!(matches!(err, WorkerError::RustError(msg) if msg == "boom"));
    }
}
