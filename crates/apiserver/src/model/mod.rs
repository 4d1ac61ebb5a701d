mod address;
mod enums;
mod order;
mod product;
mod product_variant;
mod user_profile;

pub use self::address::Address;
pub use self::enums::{
    FootSide, Gender, OrderStatus, OrderType, ProductType, ShoeSizeCode, UserRole,
};
pub use self::order::{Order, OrderItem, OrderItemSnapshot, OrderStatusUpdate};
pub use self::product::Product;
pub use self::product_variant::ProductVariant;
pub use self::user_profile::UserProfile;
