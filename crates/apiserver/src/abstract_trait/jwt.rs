use crate::errors::ServiceError;
use crate::model::UserRole;
use std::sync::Arc;
use uuid::Uuid;

/// Identity extracted from a verified bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Administrator
    }
}

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, user_id: Uuid, role: UserRole) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<AuthUser, ServiceError>;
}
