use crate::{
    abstract_trait::{
        AuthUser, DynProductRepository, DynProductVariantRepository, ProductVariantServiceTrait,
    },
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
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductVariantService {
    repository: DynProductVariantRepository,
    products: DynProductRepository,
}

impl ProductVariantService {
    pub fn new(repository: DynProductVariantRepository, products: DynProductRepository) -> Self {
        Self {
            repository,
            products,
        }
    }
}

#[async_trait]
impl ProductVariantServiceTrait for ProductVariantService {
    async fn get_variants(
        &self,
        query: &ProductVariantListQuery,
    ) -> Result<ApiResponse<Vec<ProductVariantResponse>>, ServiceError> {
        let variants = self.repository.find_all(query).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product variants retrieved successfully".to_string(),
            data: variants.into_iter().map(Into::into).collect(),
        })
    }

    async fn get_variant(
        &self,
        id: Uuid,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError> {
        let variant = self.repository.find_by_id(id).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Product variant {id} not found"))
            }
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product variant retrieved successfully".to_string(),
            data: variant.into(),
        })
    }

    async fn create_variant(
        &self,
        auth: &AuthUser,
        req: &CreateProductVariantRequest,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError> {
        self.products
            .find_by_id(req.product_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => {
                    ServiceError::NotFound(format!("Product {} not found", req.product_id))
                }
                other => ServiceError::from(other),
            })?;

        let variant = ProductVariant {
            id: Uuid::new_v4(),
            product_id: req.product_id,
            color: req.color.clone(),
            price: req.price,
            quantity: req.quantity,
            size_code: req.size_code,
            size_value: req.size_value.clone(),
            side: req.side,
            created_at: Utc::now(),
            created_by: auth.id,
        };

        let created = self.repository.create(&variant).await?;

        info!("✅ Variant {} created for product {}", created.id, created.product_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product variant created successfully".to_string(),
            data: created.into(),
        })
    }

    async fn update_variant(
        &self,
        id: Uuid,
        req: &UpdateProductVariantRequest,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError> {
        let updated = self.repository.update(id, req).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Product variant {id} not found"))
            }
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product variant updated successfully".to_string(),
            data: updated.into(),
        })
    }

    async fn delete_variant(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        self.repository.delete(id).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Product variant {id} not found"))
            }
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product variant deleted successfully".to_string(),
            data: (),
        })
    }
}
