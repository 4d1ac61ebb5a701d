use crate::{
    abstract_trait::AuthUser,
    domain::{
        requests::{CreateUserProfileRequest, UpdateUserProfileRequest},
        responses::{ApiResponse, UserProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{UserProfile, UserRole},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserProfileRepository = Arc<dyn UserProfileRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserProfileRepositoryTrait {
    async fn create(&self, profile: &UserProfile) -> Result<UserProfile, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<UserProfile, RepositoryError>;
    async fn find_all(&self, roles: Option<&[UserRole]>)
    -> Result<Vec<UserProfile>, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateUserProfileRequest,
    ) -> Result<UserProfile, RepositoryError>;
}

pub type DynUserProfileService = Arc<dyn UserProfileServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserProfileServiceTrait {
    async fn create_profile(
        &self,
        auth: &AuthUser,
        req: &CreateUserProfileRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ServiceError>;
    async fn get_profiles(
        &self,
        roles: Vec<UserRole>,
    ) -> Result<ApiResponse<Vec<UserProfileResponse>>, ServiceError>;
    async fn get_profile(
        &self,
        auth: &AuthUser,
        id: Uuid,
    ) -> Result<ApiResponse<UserProfileResponse>, ServiceError>;
    async fn update_profile(
        &self,
        auth: &AuthUser,
        id: Uuid,
        req: &UpdateUserProfileRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ServiceError>;
}
