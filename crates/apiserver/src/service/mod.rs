mod address;
mod auth;
mod order;
mod product;
mod product_variant;
mod user_profile;

pub use self::address::AddressService;
pub use self::auth::AuthService;
pub use self::order::{
    OrderCommandService, OrderCommandServiceDeps, OrderQueryService, OrderQueryServiceDeps,
};
pub use self::product::ProductService;
pub use self::product_variant::ProductVariantService;
pub use self::user_profile::UserProfileService;
