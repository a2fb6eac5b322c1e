use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{ItemPatch, ItemRecord, NewItem};
use business::domain::item::repository::{CatalogRepository, ItemPage, PageCursor};
use business::domain::shared::value_objects::ItemId;

use super::cursor::{CursorKey, into_page};
use super::entity::{ItemEntity, price_to_numeric};

const ITEM_COLUMNS: &str =
    "id, name, description, quantity, category, marketplace_ref, price, created_at, qr_code";

pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_records(entities: Vec<ItemEntity>) -> Result<Vec<ItemRecord>, RepositoryError> {
    entities.into_iter().map(ItemEntity::into_domain).collect()
}

fn stock_quantity(quantity: Option<u32>) -> Result<Option<i32>, RepositoryError> {
    quantity
        .map(|q| i32::try_from(q).map_err(|_| RepositoryError::Persistence))
        .transpose()
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn create(&self, item: &NewItem) -> Result<ItemId, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"INSERT INTO items (id, name, description, quantity, category, marketplace_ref, price, created_at, qr_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
        )
        .bind(&id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(stock_quantity(item.quantity)?)
        .bind(&item.category)
        .bind(&item.marketplace_ref)
        .bind(price_to_numeric(item.price))
        .bind(item.created_at)
        .bind(&item.qr_code)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert item: {}", e);
            RepositoryError::DatabaseError
        })?;

        tracing::debug!("Inserted item {}", id);
        Ok(ItemId::new(id))
    }

    async fn get_all(&self) -> Result<Vec<ItemRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {} FROM items ORDER BY created_at DESC, id DESC",
            ITEM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        into_records(entities)
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<ItemRecord, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {} FROM items WHERE id = $1",
            ITEM_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_page(
        &self,
        page_size: u32,
        cursor: Option<PageCursor>,
    ) -> Result<ItemPage, RepositoryError> {
        let limit = i64::from(page_size) + 1;

        let entities = match cursor.as_ref().map(CursorKey::decode).transpose()? {
            Some(key) => {
                sqlx::query_as::<_, ItemEntity>(&format!(
                    "SELECT {} FROM items WHERE (created_at, id) < ($1, $2) \
                     ORDER BY created_at DESC, id DESC LIMIT $3",
                    ITEM_COLUMNS
                ))
                .bind(key.created_at)
                .bind(key.id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ItemEntity>(&format!(
                    "SELECT {} FROM items ORDER BY created_at DESC, id DESC LIMIT $1",
                    ITEM_COLUMNS
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        into_page(into_records(entities)?, page_size)
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                quantity = COALESCE($4, quantity),
                category = COALESCE($5, category),
                marketplace_ref = COALESCE($6, marketplace_ref),
                price = COALESCE($7, price),
                qr_code = COALESCE($8, qr_code)
            WHERE id = $1"#,
        )
        .bind(id.as_str())
        .bind(patch.name)
        .bind(patch.description)
        .bind(stock_quantity(patch.quantity)?)
        .bind(patch.category)
        .bind(patch.marketplace_ref)
        .bind(patch.price.map(price_to_numeric))
        .bind(patch.qr_code)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update item {}: {}", id, e);
            RepositoryError::DatabaseError
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
