use crate::{
    abstract_trait::ProductVariantRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{ProductVariantListQuery, UpdateProductVariantRequest},
    errors::RepositoryError,
    model::ProductVariant,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductVariantRepository {
    db: ConnectionPool,
}

impl ProductVariantRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const VARIANT_COLUMNS: &str = "id, product_id, color, price, quantity, size_code, size_value, \
     side, created_at, created_by";

#[async_trait]
impl ProductVariantRepositoryTrait for ProductVariantRepository {
    async fn create(&self, variant: &ProductVariant) -> Result<ProductVariant, RepositoryError> {
        let result = sqlx::query_as::<_, ProductVariant>(&format!(
            r#"
            INSERT INTO product_variants
                (id, product_id, color, price, quantity, size_code, size_value, side, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {VARIANT_COLUMNS}
            "#
        ))
        .bind(variant.id)
        .bind(variant.product_id)
        .bind(&variant.color)
        .bind(variant.price)
        .bind(variant.quantity)
        .bind(variant.size_code)
        .bind(&variant.size_value)
        .bind(variant.side)
        .bind(variant.created_by)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create variant for product {}: {:?}",
                variant.product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created product variant {}", result.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ProductVariant, RepositoryError> {
        sqlx::query_as::<_, ProductVariant>(&format!(
            "SELECT {VARIANT_COLUMNS} FROM product_variants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        query: &ProductVariantListQuery,
    ) -> Result<Vec<ProductVariant>, RepositoryError> {
        let result = sqlx::query_as::<_, ProductVariant>(&format!(
            r#"
            SELECT {VARIANT_COLUMNS}
            FROM product_variants
            WHERE ($1::text IS NULL OR color ILIKE '%' || $1 || '%')
              AND ($2::double precision IS NULL OR price >= $2)
              AND ($3::double precision IS NULL OR price <= $3)
            ORDER BY created_at DESC
            "#
        ))
        .bind(&query.color)
        .bind(query.price_min)
        .bind(query.price_max)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateProductVariantRequest,
    ) -> Result<ProductVariant, RepositoryError> {
        let result = sqlx::query_as::<_, ProductVariant>(&format!(
            r#"
            UPDATE product_variants
            SET color      = COALESCE($2, color),
                price      = COALESCE($3, price),
                quantity   = COALESCE($4, quantity),
                size_code  = COALESCE($5::shoe_size_code, size_code),
                size_value = COALESCE($6, size_value),
                side       = COALESCE($7::foot_side, side)
            WHERE id = $1
            RETURNING {VARIANT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.color)
        .bind(req.price)
        .bind(req.quantity)
        .bind(req.size_code)
        .bind(&req.size_value)
        .bind(req.side)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product variant {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product variant {}", result.id);
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product_variants WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product variant {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product variant {}", id);
        Ok(())
    }
}
