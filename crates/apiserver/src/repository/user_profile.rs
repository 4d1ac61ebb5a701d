use crate::{
    abstract_trait::UserProfileRepositoryTrait,
    config::ConnectionPool,
    domain::requests::UpdateUserProfileRequest,
    errors::RepositoryError,
    model::{UserProfile, UserRole},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct UserProfileRepository {
    db: ConnectionPool,
}

impl UserProfileRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserProfileRepositoryTrait for UserProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<UserProfile, RepositoryError> {
        let result = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles (id, role, first_name, surname, email, gender)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, role, first_name, surname, email, gender, created_at
            "#,
        )
        .bind(profile.id)
        .bind(profile.role)
        .bind(&profile.first_name)
        .bind(&profile.surname)
        .bind(&profile.email)
        .bind(profile.gender)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user profile {}: {:?}", profile.id, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user profile {}", result.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<UserProfile, RepositoryError> {
        sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, role, first_name, surname, email, gender, created_at
            FROM user_profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        roles: Option<&[UserRole]>,
    ) -> Result<Vec<UserProfile>, RepositoryError> {
        let result = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, role, first_name, surname, email, gender, created_at
            FROM user_profiles
            WHERE ($1::user_role[] IS NULL OR role = ANY($1))
            ORDER BY created_at DESC
            "#,
        )
        .bind(roles.map(|r| r.to_vec()))
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateUserProfileRequest,
    ) -> Result<UserProfile, RepositoryError> {
        let result = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE user_profiles
            SET first_name = $2,
                surname    = $3,
                email      = $4,
                gender     = $5
            WHERE id = $1
            RETURNING id, role, first_name, surname, email, gender, created_at
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.surname)
        .bind(&req.email)
        .bind(req.gender)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user profile {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated user profile {}", result.id);
        Ok(result)
    }
}
