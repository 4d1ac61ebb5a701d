use crate::{
    abstract_trait::{AuthUser, DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, ProductListQuery, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn get_products(
        &self,
        query: &ProductListQuery,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self
            .repository
            .find_all(query.brand.as_deref(), query.model.as_deref())
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data: products.into_iter().map(Into::into).collect(),
        })
    }

    async fn get_product(&self, id: Uuid) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.repository.find_by_id(id).await.map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(format!("Product {id} not found")),
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: product.into(),
        })
    }

    async fn create_product(
        &self,
        auth: &AuthUser,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = Product {
            id: Uuid::new_v4(),
            brand: req.brand.clone(),
            model: req.model.clone(),
            description: req.description.clone(),
            product_type: req.product_type,
            created_at: Utc::now(),
            created_by: auth.id,
        };

        let created = self.repository.create(&product).await?;

        info!("✅ Product {} created ({} {})", created.id, created.brand, created.model);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: created.into(),
        })
    }

    async fn update_product(
        &self,
        id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let updated = self.repository.update(id, req).await.map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(format!("Product {id} not found")),
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: updated.into(),
        })
    }

    async fn delete_product(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        self.repository.delete(id).await.map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(format!("Product {id} not found")),
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}
