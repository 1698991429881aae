//! # Clothing Handlers
//!
//! CRUD handlers for the `clothing_items` resource.
//!
//! ## Error Behavior
//!
//! Create and update answer any failure, malformed body or database error
//! alike, with 400 `{"error": "Invalid request", "details": ...}`. List,
//! fetch and delete return database errors to the caller as `Err`; the entry
//! point lets the platform turn them into an opaque 500.

use http::StatusCode;

use crate::database::Database;
use crate::errors::AppResult;
use crate::log_data;
use crate::logging::Logger;
use crate::models::{ClothingItem, ClothingPayload};
use crate::repository::ClothingRepository;
use crate::response::ApiResponse;
use crate::utils::generate_item_id;

const INVALID_REQUEST: &str = "Invalid request";

/// `POST /clothing`
pub async fn create_clothing(body: &[u8], db: &dyn Database, log: &Logger) -> ApiResponse {
    match try_create(body, db).await {
        Ok(item) => {
            log.info("Clothing item created", log_data!("id" => item.id));
            json_or_invalid(StatusCode::CREATED, &item, log)
        }
        Err(e) => invalid_request(e.details(), log),
    }
}

async fn try_create(body: &[u8], db: &dyn Database) -> AppResult<ClothingItem> {
    let item = ClothingPayload::from_slice(body)?.into_item(generate_item_id());
    ClothingRepository::new(db).insert(&item).await?;
    Ok(item)
}

/// `GET /clothing`
pub async fn list_clothing(db: &dyn Database) -> AppResult<ApiResponse> {
    let rows = ClothingRepository::new(db).list().await?;
    ApiResponse::json(StatusCode::OK, &rows)
}

/// `GET /clothing/{id}`
pub async fn get_clothing(id: &str, db: &dyn Database) -> AppResult<ApiResponse> {
    match ClothingRepository::new(db).find(id).await? {
        Some(row) => ApiResponse::json(StatusCode::OK, &row),
        None => Ok(ApiResponse::not_found()),
    }
}

/// `PUT /clothing/{id}`
///
/// Replaces `type`, `color` and `imageId` and echoes the submitted values
/// without reading the row back.
pub async fn update_clothing(
    id: &str,
    body: &[u8],
    db: &dyn Database,
    log: &Logger,
) -> ApiResponse {
    match try_update(id, body, db).await {
        Ok(Some(item)) => json_or_invalid(StatusCode::OK, &item, log),
        Ok(None) => ApiResponse::not_found(),
        Err(e) => invalid_request(e.details(), log),
    }
}

async fn try_update(id: &str, body: &[u8], db: &dyn Database) -> AppResult<Option<ClothingItem>> {
    let item = ClothingPayload::from_slice(body)?.into_item(id.to_string());
    let updated = ClothingRepository::new(db).update(&item).await?;
    Ok(updated.then_some(item))
}

/// `DELETE /clothing/{id}`
pub async fn delete_clothing(id: &str, db: &dyn Database) -> AppResult<ApiResponse> {
    if ClothingRepository::new(db).delete(id).await? {
        Ok(ApiResponse::no_content())
    } else {
        Ok(ApiResponse::not_found())
    }
}

fn json_or_invalid(status: StatusCode, item: &ClothingItem, log: &Logger) -> ApiResponse {
    ApiResponse::json(status, item).unwrap_or_else(|e| invalid_request(e.details(), log))
}

fn invalid_request(details: String, log: &Logger) -> ApiResponse {
    log.warn(INVALID_REQUEST, log_data!("details" => details));
    ApiResponse::error(StatusCode::BAD_REQUEST, INVALID_REQUEST, details)
}
