use crate::{
    domain::{requests::CreateTokenRequest, responses::{ApiResponse, TokenResponse}},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn create_token(
        &self,
        req: &CreateTokenRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
}
