use crate::{
    abstract_trait::AuthUser,
    domain::{
        requests::{CreateProductRequest, ProductListQuery, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn find_all(
        &self,
        brand: Option<&str>,
        model: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn get_products(
        &self,
        query: &ProductListQuery,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn get_product(&self, id: Uuid) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn create_product(
        &self,
        auth: &AuthUser,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
