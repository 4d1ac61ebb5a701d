use crate::{
    abstract_trait::ProductRepositoryTrait, config::ConnectionPool,
    domain::requests::UpdateProductRequest, errors::RepositoryError, model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, brand, model, description, product_type, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, brand, model, description, product_type, created_at, created_by
            "#,
        )
        .bind(product.id)
        .bind(&product.brand)
        .bind(&product.model)
        .bind(&product.description)
        .bind(product.product_type)
        .bind(product.created_by)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.id, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product {} ({} {})", result.id, result.brand, result.model);
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, brand, model, description, product_type, created_at, created_by
            FROM products
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
        brand: Option<&str>,
        model: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, brand, model, description, product_type, created_at, created_by
            FROM products
            WHERE ($1::text IS NULL OR brand ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR model ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            "#,
        )
        .bind(brand)
        .bind(model)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET brand        = $2,
                model        = $3,
                description  = $4,
                product_type = $5
            WHERE id = $1
            RETURNING id, brand, model, description, product_type, created_at, created_by
            "#,
        )
        .bind(id)
        .bind(&req.brand)
        .bind(&req.model)
        .bind(&req.description)
        .bind(req.product_type)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product {}", result.id);
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product {}", id);
        Ok(())
    }
}
