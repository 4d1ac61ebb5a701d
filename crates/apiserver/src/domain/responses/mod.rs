mod address;
mod api;
mod auth;
mod order;
mod product;
mod product_variant;
mod user_profile;

pub use self::address::AddressResponse;
pub use self::api::ApiResponse;
pub use self::auth::TokenResponse;
pub use self::order::{OrderItemResponse, OrderResponse, OrderStatusUpdateResponse};
pub use self::product::ProductResponse;
pub use self::product_variant::ProductVariantResponse;
pub use self::user_profile::UserProfileResponse;
