//! # Request Routing and Dispatch
//!
//! Routes a request to its handler by sequential path and method comparison.
//!
//! ## Supported Routes
//!
//! - `* /test-db` - Database health check
//! - `POST /clothing` - Create an item
//! - `GET /clothing` - List all items
//! - `GET /clothing/{id}` - Fetch one item
//! - `PUT /clothing/{id}` - Replace one item
//! - `DELETE /clothing/{id}` - Delete one item
//!
//! Anything else is answered with a plain-text 404.

use http::Method;

use crate::constants::{PATH_CLOTHING, PATH_TEST_DB};
use crate::database::Database;
use crate::errors::AppResult;
use crate::handlers::clothing::{
    create_clothing, delete_clothing, get_clothing, list_clothing, update_clothing,
};
use crate::handlers::{handle_not_found, handle_test_db};
use crate::logging::Logger;
use crate::response::ApiResponse;
use crate::utils::path_segment;

/// A request reduced to what the router needs.
#[derive(Clone, Debug)]
pub struct RouteRequest<'a> {
    pub method: Method,
    pub path: &'a str,
    pub body: &'a [u8],
}

/// Dispatches a request to the matching handler.
///
/// # Errors
///
/// Database failures during list, fetch and delete are returned unhandled;
/// every other outcome, including 4xx and the health check's 500, is an
/// `Ok` response.
pub async fn handle_request(
    req: RouteRequest<'_>,
    db: &dyn Database,
    log: &Logger,
) -> AppResult<ApiResponse> {
    let RouteRequest { method, path, body } = req;

    if path == PATH_TEST_DB {
        return Ok(handle_test_db(db, log).await);
    }

    if path == PATH_CLOTHING {
        match method {
            Method::POST => return Ok(create_clothing(body, db, log).await),
            Method::GET => return list_clothing(db).await,
            _ => {}
        }
    } else if path.starts_with("/clothing/") {
        let id = path_segment(path, 2);
        match method {
            Method::GET => return get_clothing(id, db).await,
            Method::PUT => return Ok(update_clothing(id, body, db, log).await),
            Method::DELETE => return delete_clothing(id, db).await,
            _ => {}
        }
    }

    Ok(handle_not_found())
}
