use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::{Gender, UserRole};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateUserProfileRequest {
    #[validate(length(min = 1))]
    pub first_name: String,

    pub surname: Option<String>,

    #[validate(email)]
    pub email: String,

    pub gender: Gender,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateUserProfileRequest {
    #[validate(length(min = 1))]
    pub first_name: String,

    pub surname: Option<String>,

    #[validate(email)]
    pub email: String,

    pub gender: Gender,
}

/// Repeated `role` params narrow the listing; none selects every profile.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct UserListQuery {
    #[serde(default)]
    pub role: Vec<UserRole>,
}
