//! # Wardrobe Catalog - Cloudflare Workers
//!
//! A small REST API for clothing items, built with Rust on Cloudflare Workers
//! and backed by a D1 database.
//!
//! ## Architecture
//!
//! - **Router**: Dispatches requests by path and method
//! - **Handlers**: One handler per operation, each issuing a single statement
//! - **Repository**: Typed, parameterized statements for `clothing_items`
//! - **Database**: The injected handle abstraction and its D1 implementation
//! - **Middleware**: Optional CORS support
//!
//! Handlers receive the database handle as an argument and produce a
//! runtime-independent [`response::ApiResponse`]; only this entry point deals
//! with `worker::Request` and `worker::Response`.
//!
//! ## API
//!
//! ```text
//! *      /test-db         - Database health check
//! POST   /clothing        - Create an item
//! GET    /clothing        - List all items
//! GET    /clothing/{id}   - Fetch one item
//! PUT    /clothing/{id}   - Replace one item
//! DELETE /clothing/{id}   - Delete one item
//! ```

use std::sync::{Arc, OnceLock};
use worker::*;

mod config;
mod constants;
mod database;
mod errors;
mod handlers;
mod logging;
mod middleware;
mod models;
mod repository;
mod response;
mod router;
mod utils;

#[cfg(test)]
mod testing;

use config::Config;
use constants::{HEADER_CF_RAY, HEADER_REQUEST_ID};
use database::D1Handle;
use errors::AppError;
use logging::Logger;
use middleware::CorsMiddleware;
use router::RouteRequest;
use utils::generate_request_id;

static CONFIG_CACHE: OnceLock<Arc<Config>> = OnceLock::new();

/// Main entry point for the Cloudflare Worker.
///
/// Sets up panic reporting, resolves configuration and the D1 binding, then
/// hands the request to the router.
///
/// # Error Handling
///
/// Errors the router returns unhandled (database failures while listing,
/// fetching or deleting) are passed back to the runtime, which answers with
/// a generic 500.
#[event(fetch)]
pub async fn main(mut req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    let config = load_config(&env);
    let request_id = req
        .headers()
        .get(HEADER_CF_RAY)?
        .unwrap_or_else(generate_request_id);
    let log = Logger::new(request_id);
    let path = req.path();

    log.info(
        "Request received",
        log_data!("method" => req.method().to_string(), "path" => path),
    );

    let cors = CorsMiddleware::from_config(&config);
    if let Some(cors) = &cors {
        if req.method() == Method::Options {
            return finish(cors.handle_preflight()?, &log, None);
        }
    }

    let method = ::http::Method::from_bytes(req.method().to_string().as_bytes())
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let body = match method {
        ::http::Method::POST | ::http::Method::PUT => req.bytes().await?,
        _ => Vec::new(),
    };

    let db = D1Handle::new(env.d1(&config.database_binding)?);
    let route = RouteRequest {
        method,
        path: &path,
        body: &body,
    };

    match router::handle_request(route, &db, &log).await {
        Ok(response) => {
            log.info(
                "Request completed",
                log_data!("status" => response.status().as_u16()),
            );
            finish(response.into_worker()?, &log, cors.as_ref())
        }
        Err(e) => {
            log.error("Unhandled error", log_data!("error" => e.to_string()));
            Err(e.into())
        }
    }
}

fn load_config(env: &Env) -> Arc<Config> {
    CONFIG_CACHE
        .get_or_init(|| Arc::new(Config::load(env)))
        .clone()
}

fn finish(mut response: Response, log: &Logger, cors: Option<&CorsMiddleware>) -> Result<Response> {
    response
        .headers_mut()
        .set(HEADER_REQUEST_ID, log.request_id())?;
    match cors {
        Some(cors) => cors.apply_headers(response),
        None => Ok(response),
    }
}
