use crate::{
    abstract_trait::{AddressServiceTrait, AuthUser, DynAddressRepository},
    domain::{
        requests::{CreateAddressRequest, UpdateAddressRequest},
        responses::{AddressResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Address,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct AddressService {
    repository: DynAddressRepository,
}

impl AddressService {
    pub fn new(repository: DynAddressRepository) -> Self {
        Self { repository }
    }

    fn ensure_owner_or_admin(auth: &AuthUser, user_id: Uuid) -> Result<(), ServiceError> {
        if auth.id != user_id && !auth.is_admin() {
            return Err(ServiceError::Unauthorized(
                "You do not have access to these addresses".to_string(),
            ));
        }
        Ok(())
    }

    /// Fetches the address and checks it belongs to the path user.
    async fn find_owned(&self, user_id: Uuid, address_id: Uuid) -> Result<Address, ServiceError> {
        let address = self
            .repository
            .find_by_id(address_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(format!("Address {address_id} not found"))
                }
                other => ServiceError::from(other),
            })?;

        if address.user_id != user_id {
            return Err(ServiceError::Unauthorized(
                "Address does not belong to this user".to_string(),
            ));
        }

        Ok(address)
    }
}

#[async_trait]
impl AddressServiceTrait for AddressService {
    async fn list_addresses(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
    ) -> Result<ApiResponse<Vec<AddressResponse>>, ServiceError> {
        Self::ensure_owner_or_admin(auth, user_id)?;

        let addresses = self.repository.find_all_by_user(user_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Addresses retrieved successfully".to_string(),
            data: addresses.into_iter().map(Into::into).collect(),
        })
    }

    async fn create_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        req: &CreateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError> {
        Self::ensure_owner_or_admin(auth, user_id)?;

        let address = Address {
            id: Uuid::new_v4(),
            user_id,
            country: req.country.clone(),
            province: req.province.clone(),
            city: req.city.clone(),
            suburb: req.suburb.clone(),
            postal_code: req.postal_code,
            street_number: req.street_number.clone(),
            street_name: req.street_name.clone(),
            unit_number: req.unit_number.clone(),
            complex_name: req.complex_name.clone(),
            created_at: Utc::now(),
        };

        let created = self.repository.create(&address).await?;

        info!("✅ Address {} created for user {user_id}", created.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Address created successfully".to_string(),
            data: created.into(),
        })
    }

    async fn get_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        address_id: Uuid,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError> {
        Self::ensure_owner_or_admin(auth, user_id)?;

        let address = self.find_owned(user_id, address_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Address retrieved successfully".to_string(),
            data: address.into(),
        })
    }

    async fn update_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        address_id: Uuid,
        req: &UpdateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError> {
        Self::ensure_owner_or_admin(auth, user_id)?;
        self.find_owned(user_id, address_id).await?;

        let updated = self.repository.update(address_id, req).await?;

        info!("🔄 Address {address_id} updated");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Address updated successfully".to_string(),
            data: updated.into(),
        })
    }

    async fn delete_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        address_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError> {
        Self::ensure_owner_or_admin(auth, user_id)?;
        self.find_owned(user_id, address_id).await?;

        self.repository.delete(address_id).await?;

        info!("🗑️ Address {address_id} deleted");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Address deleted successfully".to_string(),
            data: (),
        })
    }
}
