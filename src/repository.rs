//! # Clothing Repository
//!
//! Typed access to the `clothing_items` table. Every method issues exactly one
//! statement through the injected [`Database`] handle.

use crate::constants::{
    SQL_DELETE_ITEM, SQL_HEALTH_CHECK, SQL_INSERT_ITEM, SQL_SELECT_ALL, SQL_SELECT_BY_ID,
    SQL_UPDATE_ITEM,
};
use crate::database::{Database, Row};
use crate::errors::AppResult;
use crate::models::ClothingItem;

pub struct ClothingRepository<'a> {
    db: &'a dyn Database,
}

impl<'a> ClothingRepository<'a> {
    pub fn new(db: &'a dyn Database) -> Self {
        Self { db }
    }

    /// Runs the trivial connectivity query and returns its raw rows.
    pub async fn ping(&self) -> AppResult<Vec<Row>> {
        self.db.all(&self.db.prepare(SQL_HEALTH_CHECK)).await
    }

    pub async fn insert(&self, item: &ClothingItem) -> AppResult<()> {
        let statement = self
            .db
            .prepare(SQL_INSERT_ITEM)
            .bind(item.id.as_str())
            .bind(item.kind.as_str())
            .bind(item.color.as_str())
            .bind(item.image_id.as_deref());
        self.db.run(&statement).await?;
        Ok(())
    }

    /// Returns every row exactly as the database reports it.
    pub async fn list(&self) -> AppResult<Vec<Row>> {
        self.db.all(&self.db.prepare(SQL_SELECT_ALL)).await
    }

    /// Returns the first row matching `id`, untouched.
    pub async fn find(&self, id: &str) -> AppResult<Option<Row>> {
        let statement = self.db.prepare(SQL_SELECT_BY_ID).bind(id);
        Ok(self.db.all(&statement).await?.into_iter().next())
    }

    /// Replaces all mutable fields of the row with `item.id`.
    ///
    /// Returns `false` when no row matched.
    pub async fn update(&self, item: &ClothingItem) -> AppResult<bool> {
        let statement = self
            .db
            .prepare(SQL_UPDATE_ITEM)
            .bind(item.kind.as_str())
            .bind(item.color.as_str())
            .bind(item.image_id.as_deref())
            .bind(item.id.as_str());
        Ok(self.db.run(&statement).await?.changes > 0)
    }

    /// Returns `false` when no row matched.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let statement = self.db.prepare(SQL_DELETE_ITEM).bind(id);
        Ok(self.db.run(&statement).await?.changes > 0)
    }
}
