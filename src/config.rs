//! # Configuration Management
//!
//! Configuration is read from the Worker's `[vars]` (wrangler.toml) at the
//! first request of an isolate, with defaults for everything.
//!
//! ## Configuration Options
//!
//! - `DATABASE_BINDING`: name of the D1 binding holding `clothing_items`
//!   (default: `DB`)
//! - `CORS_ALLOW_ORIGIN`: when set, enables CORS for that origin
//!
//! ## Example
//!
//! ```toml
//! [vars]
//! DATABASE_BINDING = "WARDROBE_DB"
//! CORS_ALLOW_ORIGIN = "https://wardrobe.example.com"
//! ```

use crate::constants::{DEFAULT_DATABASE_BINDING, VAR_CORS_ALLOW_ORIGIN, VAR_DATABASE_BINDING};
use worker::Env;

/// Configuration structure for the catalog worker.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Name of the D1 database binding.
    /// Must match the binding name in wrangler.toml.
    pub database_binding: String,

    /// Origin allowed for cross-origin requests. CORS is disabled when unset.
    pub cors_allow_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_binding: DEFAULT_DATABASE_BINDING.to_string(),
            cors_allow_origin: None,
        }
    }
}

impl Config {
    /// Loads configuration from Worker vars, falling back to defaults for
    /// anything unset.
    pub fn load(env: &Env) -> Self {
        Self::from_lookup(|name| env.var(name).ok().map(|var| var.to_string()))
    }

    /// Builds configuration from a variable lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            database_binding: read(VAR_DATABASE_BINDING).unwrap_or(defaults.database_binding),
            cors_allow_origin: read(VAR_CORS_ALLOW_ORIGIN),
        }
    }
}
