use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderItemSnapshot, OrderStatusUpdate, OrderType},
};
use async_trait::async_trait;
use uuid::Uuid;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, order_type, address_id, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        owner: Option<Uuid>,
        types: Option<&[OrderType]>,
    ) -> Result<Vec<Order>, RepositoryError> {
        let result = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, order_type, address_id, created_at
            FROM orders
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::order_type[] IS NULL OR order_type = ANY($2))
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .bind(types.map(|t| t.to_vec()))
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn latest_status_update(
        &self,
        order_id: Uuid,
    ) -> Result<OrderStatusUpdate, RepositoryError> {
        sqlx::query_as::<_, OrderStatusUpdate>(
            r#"
            SELECT id, seq, order_id, status, created_at, created_by
            FROM order_status_updates
            WHERE order_id = $1
            ORDER BY created_at DESC, seq DESC
            LIMIT 1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
    }

    async fn status_history(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderStatusUpdate>, RepositoryError> {
        let result = sqlx::query_as::<_, OrderStatusUpdate>(
            r#"
            SELECT id, seq, order_id, status, created_at, created_by
            FROM order_status_updates
            WHERE order_id = $1
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn item_snapshots(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemSnapshot>, RepositoryError> {
        let result = sqlx::query_as::<_, OrderItemSnapshot>(
            r#"
            SELECT oi.product_variant_id,
                   p.brand,
                   p.model,
                   pv.color,
                   pv.size_code,
                   pv.size_value,
                   pv.side,
                   pv.price
            FROM order_items oi
            JOIN product_variants pv ON pv.id = oi.product_variant_id
            JOIN products p ON p.id = pv.product_id
            WHERE oi.order_id = $1
            ORDER BY oi.seq
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
