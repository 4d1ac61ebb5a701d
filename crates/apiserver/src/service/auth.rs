use crate::{
    abstract_trait::{AuthServiceTrait, DynJwtService},
    domain::{
        requests::CreateTokenRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

/// Development token issuance: no credential check, identity is whatever the
/// caller asks for.
#[derive(Clone)]
pub struct AuthService {
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(jwt: DynJwtService) -> Self {
        Self { jwt }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn create_token(
        &self,
        req: &CreateTokenRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user_id = req.user_id.unwrap_or_else(Uuid::new_v4);
        let token = self.jwt.generate_token(user_id, req.role)?;

        info!("🔑 Issued {:?} token for user {user_id}", req.role);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Token issued successfully".to_string(),
            data: TokenResponse {
                token,
                user_id,
                role: req.role,
            },
        })
    }
}
