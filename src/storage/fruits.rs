use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::db::LocalStore;
use crate::entities::fruit;
use crate::error::StoreError;

fn to_active(record: fruit::Model) -> fruit::ActiveModel {
    fruit::ActiveModel {
        id: Set(record.id),
        title: Set(record.title),
        description: Set(record.description),
        category: Set(record.category),
        is_completed: Set(record.is_completed),
    }
}

fn upsert_on_conflict() -> OnConflict {
    OnConflict::column(fruit::Column::Id)
        .update_columns([
            fruit::Column::Title,
            fruit::Column::Description,
            fruit::Column::Category,
            fruit::Column::IsCompleted,
        ])
        .to_owned()
}

impl LocalStore {
    /// Get all fruit records, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<fruit::Model>, StoreError> {
        Ok(fruit::Entity::find()
            .order_by_asc(fruit::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// Get a single record by id.
    pub async fn get_by_id(&self, fruit_id: &str) -> Result<Option<fruit::Model>, StoreError> {
        Ok(fruit::Entity::find()
            .filter(fruit::Column::Id.eq(fruit_id))
            .one(&self.conn)
            .await?)
    }

    /// Get all records in a category, ordered by id.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<fruit::Model>, StoreError> {
        Ok(fruit::Entity::find()
            .filter(fruit::Column::Category.eq(category))
            .order_by_asc(fruit::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// Insert a record, or replace the existing record with the same id.
    pub async fn upsert(&self, record: fruit::Model) -> Result<(), StoreError> {
        fruit::Entity::insert(to_active(record))
            .on_conflict(upsert_on_conflict())
            .exec(&self.conn)
            .await?;
        self.publish().await
    }

    /// Insert or replace a batch of records by id.
    pub async fn upsert_all(&self, records: Vec<fruit::Model>) -> Result<(), StoreError> {
        if records.is_empty() {
            return self.publish().await;
        }
        fruit::Entity::insert_many(records.into_iter().map(to_active))
            .on_conflict(upsert_on_conflict())
            .exec(&self.conn)
            .await?;
        self.publish().await
    }

    /// Update the completed flag of one record. No-op when the id is absent.
    pub async fn update_completed(&self, fruit_id: &str, completed: bool) -> Result<(), StoreError> {
        fruit::Entity::update_many()
            .col_expr(fruit::Column::IsCompleted, Expr::value(completed))
            .filter(fruit::Column::Id.eq(fruit_id))
            .exec(&self.conn)
            .await?;
        self.publish().await
    }

    /// Delete a record by id.
    ///
    /// Returns the number of records deleted, 0 or 1.
    pub async fn delete_by_id(&self, fruit_id: &str) -> Result<u64, StoreError> {
        let result = fruit::Entity::delete_many()
            .filter(fruit::Column::Id.eq(fruit_id))
            .exec(&self.conn)
            .await?;
        self.publish().await?;
        Ok(result.rows_affected)
    }

    /// Delete all records.
    pub async fn delete_all(&self) -> Result<(), StoreError> {
        fruit::Entity::delete_many().exec(&self.conn).await?;
        self.publish().await
    }

    /// Delete all completed records, returning how many were removed.
    pub async fn delete_completed(&self) -> Result<u64, StoreError> {
        let result = fruit::Entity::delete_many()
            .filter(fruit::Column::IsCompleted.eq(true))
            .exec(&self.conn)
            .await?;
        self.publish().await?;
        Ok(result.rows_affected)
    }
}
