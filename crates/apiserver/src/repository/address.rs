use crate::{
    abstract_trait::AddressRepositoryTrait, config::ConnectionPool,
    domain::requests::UpdateAddressRequest, errors::RepositoryError, model::Address,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct AddressRepository {
    db: ConnectionPool,
}

impl AddressRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const ADDRESS_COLUMNS: &str = "id, user_id, country, province, city, suburb, postal_code, \
     street_number, street_name, unit_number, complex_name, created_at";

#[async_trait]
impl AddressRepositoryTrait for AddressRepository {
    async fn create(&self, address: &Address) -> Result<Address, RepositoryError> {
        let result = sqlx::query_as::<_, Address>(&format!(
            r#"
            INSERT INTO addresses
                (id, user_id, country, province, city, suburb, postal_code,
                 street_number, street_name, unit_number, complex_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(address.id)
        .bind(address.user_id)
        .bind(&address.country)
        .bind(&address.province)
        .bind(&address.city)
        .bind(&address.suburb)
        .bind(address.postal_code)
        .bind(&address.street_number)
        .bind(&address.street_name)
        .bind(&address.unit_number)
        .bind(&address.complex_name)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create address for user {}: {:?}",
                address.user_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created address {} for user {}", result.id, result.user_id);
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Address, RepositoryError> {
        sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_all_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, RepositoryError> {
        let result = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateAddressRequest,
    ) -> Result<Address, RepositoryError> {
        let result = sqlx::query_as::<_, Address>(&format!(
            r#"
            UPDATE addresses
            SET country       = $2,
                province      = $3,
                city          = $4,
                suburb        = $5,
                postal_code   = $6,
                street_number = $7,
                street_name   = $8,
                unit_number   = $9,
                complex_name  = $10
            WHERE id = $1
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.country)
        .bind(&req.province)
        .bind(&req.city)
        .bind(&req.suburb)
        .bind(req.postal_code)
        .bind(&req.street_number)
        .bind(&req.street_name)
        .bind(&req.unit_number)
        .bind(&req.complex_name)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update address {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated address {}", result.id);
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete address {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted address {}", id);
        Ok(())
    }
}
