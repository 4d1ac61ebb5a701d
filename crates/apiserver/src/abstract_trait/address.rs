use crate::{
    abstract_trait::AuthUser,
    domain::{
        requests::{CreateAddressRequest, UpdateAddressRequest},
        responses::{AddressResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Address,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAddressRepository = Arc<dyn AddressRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AddressRepositoryTrait {
    async fn create(&self, address: &Address) -> Result<Address, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Address, RepositoryError>;
    async fn find_all_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateAddressRequest,
    ) -> Result<Address, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

pub type DynAddressService = Arc<dyn AddressServiceTrait + Send + Sync>;

#[async_trait]
pub trait AddressServiceTrait {
    async fn list_addresses(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
    ) -> Result<ApiResponse<Vec<AddressResponse>>, ServiceError>;
    async fn create_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        req: &CreateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError>;
    async fn get_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        address_id: Uuid,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError>;
    async fn update_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        address_id: Uuid,
        req: &UpdateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError>;
    async fn delete_address(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        address_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
