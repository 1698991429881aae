//! # Application Constants
//!
//! Binding names, SQL statements and header names shared across the worker.
//!
//! ## Binding Names
//!
//! Defaults for Cloudflare Worker bindings and vars; they must match
//! wrangler.toml.
//!
//! ## SQL
//!
//! Every statement the worker issues is declared here as a `&'static str`
//! with `?` placeholders. Values only ever reach the database as bound
//! parameters.

/// Default D1 database binding name
pub const DEFAULT_DATABASE_BINDING: &str = "DB";

/// Worker var overriding the D1 binding name
pub const VAR_DATABASE_BINDING: &str = "DATABASE_BINDING";

/// Worker var enabling CORS for the given origin
pub const VAR_CORS_ALLOW_ORIGIN: &str = "CORS_ALLOW_ORIGIN";

pub const SQL_HEALTH_CHECK: &str = "SELECT 1 AS test";

pub const SQL_INSERT_ITEM: &str =
    "INSERT INTO clothing_items (id, type, color, image_id) VALUES (?, ?, ?, ?)";

pub const SQL_SELECT_ALL: &str = "SELECT * FROM clothing_items";

pub const SQL_SELECT_BY_ID: &str = "SELECT * FROM clothing_items WHERE id = ?";

pub const SQL_UPDATE_ITEM: &str =
    "UPDATE clothing_items SET type = ?, color = ?, image_id = ? WHERE id = ?";

pub const SQL_DELETE_ITEM: &str = "DELETE FROM clothing_items WHERE id = ?";

/// Path of the database health check
pub const PATH_TEST_DB: &str = "/test-db";

/// Collection path for clothing items
pub const PATH_CLOTHING: &str = "/clothing";

/// Ray id assigned by the Cloudflare edge, reused as request id
pub const HEADER_CF_RAY: &str = "cf-ray";

/// Response header echoing the request id
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";

/// CORS header for allowed methods
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// CORS header for allowed headers
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
