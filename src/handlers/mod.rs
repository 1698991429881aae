//! # Handlers Module
//!
//! HTTP request handlers for the catalog worker. Every handler receives the
//! database handle and the request logger as explicit arguments and returns
//! an [`ApiResponse`].

use http::StatusCode;

use crate::database::Database;
use crate::log_data;
use crate::logging::Logger;
use crate::repository::ClothingRepository;
use crate::response::ApiResponse;

pub mod clothing;

/// Runs a trivial query to confirm the database binding answers.
///
/// Failures are reported as 500 with the database message in `details`.
pub async fn handle_test_db(db: &dyn Database, log: &Logger) -> ApiResponse {
    let result = ClothingRepository::new(db)
        .ping()
        .await
        .and_then(|rows| ApiResponse::json(StatusCode::OK, &rows));

    match result {
        Ok(response) => response,
        Err(e) => {
            log.error("Database connection failed", log_data!("details" => e.details()));
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection failed",
                e.details(),
            )
        }
    }
}

/// Handles requests to unmatched routes with a 404 Not Found response.
pub fn handle_not_found() -> ApiResponse {
    ApiResponse::not_found()
}
