use crate::{
    abstract_trait::{AuthUser, JwtServiceTrait},
    errors::ServiceError,
    model::UserRole,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: Uuid, role: UserRole) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(60)).timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            role,
            exp,
            iat,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<AuthUser, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        Ok(AuthUser {
            id: token_data.claims.sub,
            role: token_data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_identity() {
        let config = JwtConfig::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = config
            .generate_token(user_id, UserRole::Buyer)
            .expect("token should be generated");
        let auth = config.verify_token(&token).expect("token should verify");

        assert_eq!(auth.id, user_id);
        assert_eq!(auth.role, UserRole::Buyer);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let config = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");

        let token = config
            .generate_token(Uuid::new_v4(), UserRole::Administrator)
            .expect("token should be generated");

        assert!(other.verify_token(&token).is_err());
    }
}
