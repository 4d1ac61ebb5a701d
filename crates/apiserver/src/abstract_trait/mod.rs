mod address;
mod auth;
mod jwt;
mod order;
mod product;
mod product_variant;
mod user_profile;

pub use self::address::{AddressRepositoryTrait, AddressServiceTrait, DynAddressRepository, DynAddressService};
pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::jwt::{AuthUser, DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait};
pub use self::product_variant::{
    DynProductVariantRepository, DynProductVariantService, ProductVariantRepositoryTrait,
    ProductVariantServiceTrait,
};
pub use self::user_profile::{
    DynUserProfileRepository, DynUserProfileService, UserProfileRepositoryTrait,
    UserProfileServiceTrait,
};
