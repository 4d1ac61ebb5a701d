use crate::{
    abstract_trait::{AuthUser, DynUserProfileRepository, UserProfileServiceTrait},
    domain::{
        requests::{CreateUserProfileRequest, UpdateUserProfileRequest},
        responses::{ApiResponse, UserProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{UserProfile, UserRole},
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserProfileService {
    repository: DynUserProfileRepository,
}

impl UserProfileService {
    pub fn new(repository: DynUserProfileRepository) -> Self {
        Self { repository }
    }

    fn ensure_owner_or_admin(auth: &AuthUser, id: Uuid) -> Result<(), ServiceError> {
        if auth.id != id && !auth.is_admin() {
            return Err(ServiceError::Unauthorized(
                "You do not have access to this profile".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserProfileServiceTrait for UserProfileService {
    async fn create_profile(
        &self,
        auth: &AuthUser,
        req: &CreateUserProfileRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ServiceError> {
        // identity and role come from the token, never the body
        let profile = UserProfile {
            id: auth.id,
            role: auth.role,
            first_name: req.first_name.clone(),
            surname: req.surname.clone(),
            email: req.email.clone(),
            gender: req.gender,
            created_at: Utc::now(),
        };

        let created = self.repository.create(&profile).await?;

        info!("✅ Profile created for user {}", created.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User profile created successfully".to_string(),
            data: created.into(),
        })
    }

    async fn get_profiles(
        &self,
        roles: Vec<UserRole>,
    ) -> Result<ApiResponse<Vec<UserProfileResponse>>, ServiceError> {
        let roles = (!roles.is_empty()).then_some(roles);
        let profiles = self.repository.find_all(roles.as_deref()).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User profiles retrieved successfully".to_string(),
            data: profiles.into_iter().map(Into::into).collect(),
        })
    }

    async fn get_profile(
        &self,
        auth: &AuthUser,
        id: Uuid,
    ) -> Result<ApiResponse<UserProfileResponse>, ServiceError> {
        Self::ensure_owner_or_admin(auth, id)?;

        let profile = self.repository.find_by_id(id).await.map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(format!("User {id} not found")),
            other => ServiceError::from(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User profile retrieved successfully".to_string(),
            data: profile.into(),
        })
    }

    async fn update_profile(
        &self,
        auth: &AuthUser,
        id: Uuid,
        req: &UpdateUserProfileRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, ServiceError> {
        Self::ensure_owner_or_admin(auth, id)?;

        let updated = self.repository.update(id, req).await.map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(format!("User {id} not found")),
            other => ServiceError::from(other),
        })?;

        info!("🔄 Profile updated for user {}", updated.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User profile updated successfully".to_string(),
            data: updated.into(),
        })
    }
}
