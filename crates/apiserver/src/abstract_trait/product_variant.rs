use crate::{
    abstract_trait::AuthUser,
    domain::{
        requests::{
            CreateProductVariantRequest, ProductVariantListQuery, UpdateProductVariantRequest,
        },
        responses::{ApiResponse, ProductVariantResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::ProductVariant,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductVariantRepository = Arc<dyn ProductVariantRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductVariantRepositoryTrait {
    async fn create(&self, variant: &ProductVariant) -> Result<ProductVariant, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ProductVariant, RepositoryError>;
    async fn find_all(
        &self,
        query: &ProductVariantListQuery,
    ) -> Result<Vec<ProductVariant>, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateProductVariantRequest,
    ) -> Result<ProductVariant, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

pub type DynProductVariantService = Arc<dyn ProductVariantServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductVariantServiceTrait {
    async fn get_variants(
        &self,
        query: &ProductVariantListQuery,
    ) -> Result<ApiResponse<Vec<ProductVariantResponse>>, ServiceError>;
    async fn get_variant(
        &self,
        id: Uuid,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError>;
    async fn create_variant(
        &self,
        auth: &AuthUser,
        req: &CreateProductVariantRequest,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError>;
    async fn update_variant(
        &self,
        id: Uuid,
        req: &UpdateProductVariantRequest,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError>;
    async fn delete_variant(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
