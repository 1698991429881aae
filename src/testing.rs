//! In-memory [`Database`] used by unit tests.
//!
//! It understands exactly the statements declared in [`crate::constants`]
//! and keeps rows as raw JSON objects in insertion order, so tests can seed
//! rows the handlers never write themselves (NULL columns, extra columns).

use std::cell::RefCell;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{
    SQL_DELETE_ITEM, SQL_HEALTH_CHECK, SQL_INSERT_ITEM, SQL_SELECT_ALL, SQL_SELECT_BY_ID,
    SQL_UPDATE_ITEM,
};
use crate::database::{Database, Param, Row, RunOutcome, Statement};
use crate::errors::{AppError, AppResult};
use crate::models::ClothingItem;

/// Typed view of a well-formed `clothing_items` row, keyed by column name.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ClothingRow {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    #[serde(default)]
    pub image_id: Option<String>,
}

impl From<ClothingItem> for ClothingRow {
    fn from(item: ClothingItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            color: item.color,
            image_id: item.image_id,
        }
    }
}

#[derive(Default)]
pub struct MemoryDatabase {
    rows: RefCell<Vec<Row>>,
    executed: RefCell<Vec<Statement>>,
    failure: Option<String>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// A database whose every statement fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Stores `row` as-is, bypassing the insert statement.
    pub fn seed(&self, row: Row) {
        self.rows.borrow_mut().push(row);
    }

    pub fn raw_rows(&self) -> Vec<Row> {
        self.rows.borrow().clone()
    }

    /// Stored rows decoded as [`ClothingRow`]; panics on malformed rows.
    pub fn rows(&self) -> Vec<ClothingRow> {
        self.raw_rows()
            .into_iter()
            .map(|row| serde_json::from_value(row).unwrap())
            .collect()
    }

    pub fn executed(&self) -> Vec<Statement> {
        self.executed.borrow().clone()
    }

    fn check(&self, statement: &Statement) -> AppResult<()> {
        self.executed.borrow_mut().push(statement.clone());
        match &self.failure {
            Some(message) => Err(AppError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

fn text(statement: &Statement, index: usize) -> AppResult<String> {
    statement
        .params()
        .get(index)
        .and_then(Param::as_text)
        .map(str::to_string)
        .ok_or_else(|| AppError::Database(format!("missing text parameter {}", index)))
}

fn optional_text(statement: &Statement, index: usize) -> Option<String> {
    statement
        .params()
        .get(index)
        .and_then(Param::as_text)
        .map(str::to_string)
}

fn has_id(row: &Row, id: &str) -> bool {
    row.get("id").and_then(Value::as_str) == Some(id)
}

#[async_trait(?Send)]
impl Database for MemoryDatabase {
    async fn all(&self, statement: &Statement) -> AppResult<Vec<Row>> {
        self.check(statement)?;
        let rows = self.rows.borrow();
        match statement.sql() {
            SQL_HEALTH_CHECK => Ok(vec![json!({ "test": 1 })]),
            SQL_SELECT_ALL => Ok(rows.clone()),
            SQL_SELECT_BY_ID => {
                let id = text(statement, 0)?;
                Ok(rows.iter().filter(|r| has_id(r, &id)).cloned().collect())
            }
            other => Err(AppError::Database(format!("unsupported query: {}", other))),
        }
    }

    async fn run(&self, statement: &Statement) -> AppResult<RunOutcome> {
        self.check(statement)?;
        let mut rows = self.rows.borrow_mut();
        let changes = match statement.sql() {
            SQL_INSERT_ITEM => {
                let id = text(statement, 0)?;
                if rows.iter().any(|r| has_id(r, &id)) {
                    return Err(AppError::Database(
                        "UNIQUE constraint failed: clothing_items.id".to_string(),
                    ));
                }
                rows.push(json!({
                    "id": id,
                    "type": text(statement, 1)?,
                    "color": text(statement, 2)?,
                    "image_id": optional_text(statement, 3),
                }));
                1
            }
            SQL_UPDATE_ITEM => {
                let id = text(statement, 3)?;
                let mut changes = 0;
                for row in rows.iter_mut().filter(|r| has_id(r, &id)) {
                    row["type"] = json!(text(statement, 0)?);
                    row["color"] = json!(text(statement, 1)?);
                    row["image_id"] = json!(optional_text(statement, 2));
                    changes += 1;
                }
                changes
            }
            SQL_DELETE_ITEM => {
                let id = text(statement, 0)?;
                let before = rows.len();
                rows.retain(|r| !has_id(r, &id));
                before - rows.len()
            }
            other => return Err(AppError::Database(format!("unsupported statement: {}", other))),
        };
        Ok(RunOutcome { changes })
    }
}
