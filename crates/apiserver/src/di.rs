use crate::{
    abstract_trait::{
        DynAddressRepository, DynAddressService, DynAuthService, DynJwtService,
        DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
        DynOrderQueryService, DynProductRepository, DynProductService,
        DynProductVariantRepository, DynProductVariantService, DynUserProfileRepository,
        DynUserProfileService,
    },
    config::ConnectionPool,
    repository::{
        AddressRepository, OrderCommandRepository, OrderQueryRepository, ProductRepository,
        ProductVariantRepository, UserProfileRepository,
    },
    service::{
        AddressService, AuthService, OrderCommandService, OrderCommandServiceDeps,
        OrderQueryService, OrderQueryServiceDeps, ProductService, ProductVariantService,
        UserProfileService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth: DynAuthService,
    pub user_profile: DynUserProfileService,
    pub address: DynAddressService,
    pub product: DynProductService,
    pub product_variant: DynProductVariantService,
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth", &"AuthService")
            .field("user_profile", &"UserProfileService")
            .field("address", &"AddressService")
            .field("product", &"ProductService")
            .field("product_variant", &"ProductVariantService")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt: DynJwtService) -> Self {
        let user_repo: DynUserProfileRepository =
            Arc::new(UserProfileRepository::new(pool.clone()));
        let address_repo: DynAddressRepository = Arc::new(AddressRepository::new(pool.clone()));
        let product_repo: DynProductRepository = Arc::new(ProductRepository::new(pool.clone()));
        let variant_repo: DynProductVariantRepository =
            Arc::new(ProductVariantRepository::new(pool.clone()));
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));

        let auth: DynAuthService = Arc::new(AuthService::new(jwt));
        let user_profile: DynUserProfileService =
            Arc::new(UserProfileService::new(user_repo.clone()));
        let address: DynAddressService = Arc::new(AddressService::new(address_repo.clone()));
        let product: DynProductService = Arc::new(ProductService::new(product_repo.clone()));
        let product_variant: DynProductVariantService = Arc::new(ProductVariantService::new(
            variant_repo.clone(),
            product_repo.clone(),
        ));

        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
                command: order_command_repo,
                query: order_query_repo.clone(),
                users: user_repo,
                addresses: address_repo.clone(),
            }));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(OrderQueryServiceDeps {
                query: order_query_repo,
                addresses: address_repo,
            }));

        Self {
            auth,
            user_profile,
            address,
            product,
            product_variant,
            order_command,
            order_query,
        }
    }
}
