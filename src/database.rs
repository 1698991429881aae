//! # Database Handle
//!
//! This module defines the storage capability handed to every request handler.
//! Handlers never reach for a global binding; they receive a `&dyn Database`
//! and talk to it through prepared statements, which keeps them runnable
//! against a substitute implementation in tests.
//!
//! ## Statements
//!
//! A [`Statement`] pairs SQL text with positional parameters. The SQL text is
//! a `&'static str`, so only the constants in [`crate::constants`] can be
//! prepared and request data can only travel as bound [`Param`]s.
//!
//! ## Cloudflare D1
//!
//! [`D1Handle`] implements [`Database`] on top of the `worker` crate's D1
//! binding. Errors raised by D1 are mapped to [`AppError::Database`] carrying
//! the message reported by the runtime.

use async_trait::async_trait;
use serde_json::Value;
use worker::wasm_bindgen::JsValue;
use worker::D1Database;

use crate::errors::{AppError, AppResult};

/// A result row as returned by the database, keyed by column name.
pub type Row = Value;

/// Positional parameter bound to a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Text(String),
    Null,
}

impl Param {
    #[cfg(test)]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Param::Text(value) => Some(value),
            Param::Null => None,
        }
    }

    fn to_js(&self) -> JsValue {
        match self {
            Param::Text(value) => JsValue::from_str(value),
            Param::Null => JsValue::NULL,
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Null, Into::into)
    }
}

/// Prepared SQL together with its bound parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    sql: &'static str,
    params: Vec<Param>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    /// Appends the next positional parameter.
    pub fn bind(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

/// Outcome of a statement executed for its side effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of rows inserted, updated or deleted.
    pub changes: usize,
}

/// Storage capability injected into request handlers.
#[async_trait(?Send)]
pub trait Database {
    fn prepare(&self, sql: &'static str) -> Statement {
        Statement::new(sql)
    }

    /// Executes a query and returns every result row.
    async fn all(&self, statement: &Statement) -> AppResult<Vec<Row>>;

    /// Executes a statement and reports how many rows it changed.
    async fn run(&self, statement: &Statement) -> AppResult<RunOutcome>;
}

/// [`Database`] backed by a Cloudflare D1 binding.
pub struct D1Handle {
    db: D1Database,
}

impl D1Handle {
    pub fn new(db: D1Database) -> Self {
        Self { db }
    }

    fn prepared(&self, statement: &Statement) -> AppResult<worker::D1PreparedStatement> {
        let params: Vec<JsValue> = statement.params().iter().map(Param::to_js).collect();
        self.db
            .prepare(statement.sql())
            .bind(&params)
            .map_err(database_error)
    }
}

#[async_trait(?Send)]
impl Database for D1Handle {
    async fn all(&self, statement: &Statement) -> AppResult<Vec<Row>> {
        let result = self
            .prepared(statement)?
            .all()
            .await
            .map_err(database_error)?;
        result.results::<Row>().map_err(database_error)
    }

    async fn run(&self, statement: &Statement) -> AppResult<RunOutcome> {
        let result = self
            .prepared(statement)?
            .run()
            .await
            .map_err(database_error)?;
        let changes = result
            .meta()
            .map_err(database_error)?
            .and_then(|meta| meta.changes)
            .unwrap_or_default();
        Ok(RunOutcome { changes })
    }
}

fn database_error(error: worker::Error) -> AppError {
    AppError::Database(error.to_string())
}
