//! # Middleware Components
//!
//! Cross-origin support for browser clients. CORS is opt-in: without a
//! configured origin no headers are added and `OPTIONS` requests fall through
//! to the router like any other method.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let cors = CorsMiddleware::from_config(&config);
//! if let Some(cors) = &cors {
//!     if req.method() == Method::Options {
//!         return cors.handle_preflight();
//!     }
//! }
//! ```

use crate::config::Config;
use crate::constants::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS};
use worker::{Headers, Response, Result};

/// Middleware for handling Cross-Origin Resource Sharing (CORS) requests.
#[derive(Clone, Debug, PartialEq)]
pub struct CorsMiddleware {
    allow_origin: String,
}

impl CorsMiddleware {
    /// Returns the middleware when CORS is enabled in `config`.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.cors_allow_origin.as_ref().map(|origin| Self {
            allow_origin: origin.clone(),
        })
    }

    /// Header name/value pairs added to every response.
    pub fn header_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("Access-Control-Allow-Origin", self.allow_origin.as_str()),
            ("Access-Control-Allow-Methods", CORS_ALLOW_METHODS),
            ("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS),
        ]
    }

    /// Applies CORS headers to an existing response.
    pub fn apply_headers(&self, mut response: Response) -> Result<Response> {
        let headers: &mut Headers = response.headers_mut();
        for (name, value) in self.header_pairs() {
            headers.set(name, value)?;
        }
        Ok(response)
    }

    /// Answers a preflight request with an empty 204 carrying CORS headers.
    pub fn handle_preflight(&self) -> Result<Response> {
        self.apply_headers(Response::empty()?.with_status(204))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_origin() {
        assert_eq!(CorsMiddleware::from_config(&Config::default()), None);
    }

    #[test]
    fn headers_use_configured_origin() {
        let config = Config {
            cors_allow_origin: Some("https://wardrobe.example.com".to_string()),
            ..Config::default()
        };
        let cors = CorsMiddleware::from_config(&config).unwrap();

        assert_eq!(
            cors.header_pairs(),
            [
                ("Access-Control-Allow-Origin", "https://wardrobe.example.com"),
                ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
                ("Access-Control-Allow-Headers", "Content-Type"),
            ]
        );
    }
}
