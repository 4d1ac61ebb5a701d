mod address;
mod order;
mod product;
mod product_variant;
mod user_profile;

pub use self::address::AddressRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::ProductRepository;
pub use self::product_variant::ProductVariantRepository;
pub use self::user_profile::UserProfileRepository;
