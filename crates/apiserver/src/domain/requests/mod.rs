mod address;
mod auth;
mod order;
mod product;
mod product_variant;
mod user_profile;

pub use self::address::{CreateAddressRequest, UpdateAddressRequest};
pub use self::auth::CreateTokenRequest;
pub use self::order::{
    AppendStatusUpdateRecord, CreateOrderRecord, CreateOrderRequest, OrderFilter, OrderListQuery,
    UpdateOrderStatusRequest,
};
pub use self::product::{CreateProductRequest, ProductListQuery, UpdateProductRequest};
pub use self::product_variant::{
    CreateProductVariantRequest, ProductVariantListQuery, UpdateProductVariantRequest,
};
pub use self::user_profile::{CreateUserProfileRequest, UpdateUserProfileRequest, UserListQuery};
