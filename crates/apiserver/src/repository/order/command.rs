use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{AppendStatusUpdateRecord, CreateOrderRecord},
    errors::RepositoryError,
    model::{Order, OrderStatus, OrderStatusUpdate},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, record: &CreateOrderRecord) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (id, user_id, order_type, address_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, order_type, address_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.user_id)
        .bind(record.order_type)
        .bind(record.address_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {}: {:?}",
                record.user_id, err
            );
            RepositoryError::from(err)
        })?;

        sqlx::query(
            r#"
            INSERT INTO order_status_updates (id, order_id, status, created_by)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order.id)
        .bind(OrderStatus::Pending)
        .bind(record.user_id)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        for (occurrence, variant_id) in record.product_variant_ids.iter().enumerate() {
            // lock the variant row so concurrent orders serialize on it
            let locked: Option<(Uuid,)> =
                sqlx::query_as("SELECT id FROM product_variants WHERE id = $1 FOR UPDATE")
                    .bind(variant_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(RepositoryError::from)?;

            if locked.is_none() {
                error!(
                    "❌ Order for user {} references unknown variant {}",
                    record.user_id, variant_id
                );
                return Err(RepositoryError::NotFound);
            }

            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_variant_id, seq)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(order.id)
            .bind(variant_id)
            .bind(occurrence as i16)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            let decremented =
                sqlx::query("UPDATE product_variants SET quantity = quantity - 1 WHERE id = $1 AND quantity > 0")
                    .bind(variant_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(RepositoryError::from)?;

            if decremented.rows_affected() == 0 {
                return Err(RepositoryError::Conflict(format!(
                    "Product variant {variant_id} is out of stock"
                )));
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} with {} item(s) for user {}",
            order.id,
            record.product_variant_ids.len(),
            record.user_id
        );
        Ok(order)
    }

    async fn append_status_update(
        &self,
        record: &AppendStatusUpdateRecord,
    ) -> Result<OrderStatusUpdate, RepositoryError> {
        // The insert only fires while the latest status is still the one the
        // caller validated against; a concurrent append makes it a no-op.
        let result = sqlx::query_as::<_, OrderStatusUpdate>(
            r#"
            INSERT INTO order_status_updates (id, order_id, status, created_by)
            SELECT $1, $2, $3, $4
            WHERE (
                SELECT status
                FROM order_status_updates
                WHERE order_id = $2
                ORDER BY created_at DESC, seq DESC
                LIMIT 1
            ) = $5
            RETURNING id, seq, order_id, status, created_at, created_by
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.order_id)
        .bind(record.status)
        .bind(record.created_by)
        .bind(record.expected_current)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to append status update for order {}: {:?}",
                record.order_id, err
            );
            RepositoryError::from(err)
        })?
        .ok_or_else(|| {
            RepositoryError::Conflict(format!(
                "Order {} status changed concurrently",
                record.order_id
            ))
        })?;

        info!(
            "✅ Order {} moved to {:?}",
            record.order_id, record.status
        );
        Ok(result)
    }
}
