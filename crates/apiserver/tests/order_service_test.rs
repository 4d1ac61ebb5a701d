mod common;

use apiserver::{
    abstract_trait::{
        AuthUser, DynAddressRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        DynUserProfileRepository, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
        OrderQueryServiceTrait,
    },
    domain::requests::{
        AppendStatusUpdateRecord, CreateOrderRequest, OrderFilter, UpdateOrderStatusRequest,
    },
    errors::{RepositoryError, ServiceError},
    model::{
        Address, FootSide, Gender, OrderStatus, OrderType, Product, ProductType, ProductVariant,
        ShoeSizeCode, UserProfile, UserRole,
    },
    service::{
        OrderCommandService, OrderCommandServiceDeps, OrderQueryService, OrderQueryServiceDeps,
    },
};
use chrono::Utc;
use common::{
    FakeAddressRepository, FakeOrderCommandRepository, FakeOrderQueryRepository,
    FakeUserProfileRepository, SharedStore, Store,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

struct Fixture {
    store: SharedStore,
    command_repo: DynOrderCommandRepository,
    command: OrderCommandService,
    query: OrderQueryService,
    buyer: AuthUser,
    other_buyer: AuthUser,
    admin: AuthUser,
    address_id: Uuid,
    variant_a: Uuid,
    variant_b: Uuid,
}

const PRICE_A: f64 = 120.0;
const PRICE_B: f64 = 89.5;

fn profile(id: Uuid, role: UserRole) -> UserProfile {
    UserProfile {
        id,
        role,
        first_name: "Test".to_string(),
        surname: None,
        email: "test@example.com".to_string(),
        gender: Gender::Other,
        created_at: Utc::now(),
    }
}

fn variant(product_id: Uuid, price: f64, quantity: i32, created_by: Uuid) -> ProductVariant {
    ProductVariant {
        id: Uuid::new_v4(),
        product_id,
        color: "black".to_string(),
        price,
        quantity,
        size_code: ShoeSizeCode::Uk,
        size_value: "9".to_string(),
        side: FootSide::Pair,
        created_at: Utc::now(),
        created_by,
    }
}

fn fixture() -> Fixture {
    let store: SharedStore = Arc::new(Mutex::new(Store::default()));

    let buyer = AuthUser {
        id: Uuid::new_v4(),
        role: UserRole::Buyer,
    };
    let other_buyer = AuthUser {
        id: Uuid::new_v4(),
        role: UserRole::Buyer,
    };
    let admin = AuthUser {
        id: Uuid::new_v4(),
        role: UserRole::Administrator,
    };

    let product = Product {
        id: Uuid::new_v4(),
        brand: "Runfast".to_string(),
        model: "Aero".to_string(),
        description: None,
        product_type: ProductType::Sneaker,
        created_at: Utc::now(),
        created_by: admin.id,
    };
    let variant_a = variant(product.id, PRICE_A, 5, admin.id);
    let variant_b = variant(product.id, PRICE_B, 1, admin.id);

    let address = Address {
        id: Uuid::new_v4(),
        user_id: buyer.id,
        country: "South Africa".to_string(),
        province: Some("Gauteng".to_string()),
        city: "Johannesburg".to_string(),
        suburb: None,
        postal_code: 2000,
        street_number: "12".to_string(),
        street_name: "Main Rd".to_string(),
        unit_number: None,
        complex_name: None,
        created_at: Utc::now(),
    };

    {
        let mut s = store.lock().unwrap();
        s.users.insert(buyer.id, profile(buyer.id, UserRole::Buyer));
        s.users
            .insert(other_buyer.id, profile(other_buyer.id, UserRole::Buyer));
        s.users
            .insert(admin.id, profile(admin.id, UserRole::Administrator));
        s.products.insert(product.id, product.clone());
        s.variants.insert(variant_a.id, variant_a.clone());
        s.variants.insert(variant_b.id, variant_b.clone());
        s.addresses.insert(address.id, address.clone());
    }

    let command_repo: DynOrderCommandRepository =
        Arc::new(FakeOrderCommandRepository(store.clone()));
    let query_repo: DynOrderQueryRepository = Arc::new(FakeOrderQueryRepository(store.clone()));
    let user_repo: DynUserProfileRepository = Arc::new(FakeUserProfileRepository(store.clone()));
    let address_repo: DynAddressRepository = Arc::new(FakeAddressRepository(store.clone()));

    let command = OrderCommandService::new(OrderCommandServiceDeps {
        command: command_repo.clone(),
        query: query_repo.clone(),
        users: user_repo,
        addresses: address_repo.clone(),
    });

    let query = OrderQueryService::new(OrderQueryServiceDeps {
        query: query_repo,
        addresses: address_repo,
    });

    Fixture {
        store,
        command_repo,
        command,
        query,
        buyer,
        other_buyer,
        admin,
        address_id: address.id,
        variant_a: variant_a.id,
        variant_b: variant_b.id,
    }
}

fn delivery_request(fx: &Fixture, variants: Vec<Uuid>) -> CreateOrderRequest {
    CreateOrderRequest {
        order_type: OrderType::Delivery,
        address_id: Some(fx.address_id),
        product_variant_ids: variants,
    }
}

async fn advance(fx: &Fixture, order_id: Uuid, statuses: &[OrderStatus]) {
    for status in statuses {
        fx.command
            .update_order_status(&fx.admin, order_id, &UpdateOrderStatusRequest { status: *status })
            .await
            .expect("transition should be accepted");
    }
}

#[tokio::test]
async fn delivery_order_decrements_stock_per_occurrence_and_sums_prices() {
    let fx = fixture();
    let req = delivery_request(&fx, vec![fx.variant_a, fx.variant_a, fx.variant_b]);

    let response = fx
        .command
        .create_order(&fx.buyer, &req)
        .await
        .expect("order should be created");
    let order = response.data;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 3);
    assert!((order.total_price - (2.0 * PRICE_A + PRICE_B)).abs() < f64::EPSILON);
    assert_eq!(
        order.address.as_ref().map(|a| a.id),
        Some(fx.address_id),
        "delivery orders carry their address"
    );

    let store = fx.store.lock().unwrap();
    assert_eq!(store.variants[&fx.variant_a].quantity, 3);
    assert_eq!(store.variants[&fx.variant_b].quantity, 0);
}

#[tokio::test]
async fn collection_order_never_carries_an_address() {
    let fx = fixture();
    let req = CreateOrderRequest {
        order_type: OrderType::Collection,
        // sent by the client but must be ignored
        address_id: Some(fx.address_id),
        product_variant_ids: vec![fx.variant_a],
    };

    let response = fx
        .command
        .create_order(&fx.buyer, &req)
        .await
        .expect("order should be created");

    assert!(response.data.address.is_none());

    let store = fx.store.lock().unwrap();
    let persisted = store.orders.get(&response.data.id).unwrap();
    assert_eq!(persisted.address_id, None);
}

#[tokio::test]
async fn delivery_order_requires_an_address_owned_by_the_buyer() {
    let fx = fixture();

    let missing = CreateOrderRequest {
        order_type: OrderType::Delivery,
        address_id: None,
        product_variant_ids: vec![fx.variant_a],
    };
    let err = fx.command.create_order(&fx.buyer, &missing).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // someone else's address resolves as if it did not exist
    let foreign = delivery_request(&fx, vec![fx.variant_a]);
    let err = fx
        .command
        .create_order(&fx.other_buyer, &foreign)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn out_of_stock_order_is_rejected_without_side_effects() {
    let fx = fixture();
    // variant_b has a single unit; asking for two must abort everything
    let req = delivery_request(&fx, vec![fx.variant_b, fx.variant_b]);

    let err = fx.command.create_order(&fx.buyer, &req).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::Conflict(_))
    ));

    let store = fx.store.lock().unwrap();
    assert_eq!(store.variants[&fx.variant_b].quantity, 1);
    assert!(store.orders.is_empty());
    assert!(store.items.is_empty());
}

#[tokio::test]
async fn unknown_variant_aborts_the_whole_order() {
    let fx = fixture();
    let req = delivery_request(&fx, vec![fx.variant_a, Uuid::new_v4()]);

    let err = fx.command.create_order(&fx.buyer, &req).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let store = fx.store.lock().unwrap();
    assert_eq!(store.variants[&fx.variant_a].quantity, 5);
    assert!(store.orders.is_empty());
}

#[tokio::test]
async fn delivery_orders_walk_the_shipping_path_and_history_is_appended() {
    let fx = fixture();
    let req = delivery_request(&fx, vec![fx.variant_a]);
    let order = fx.command.create_order(&fx.buyer, &req).await.unwrap().data;

    advance(
        &fx,
        order.id,
        &[
            OrderStatus::Confirmed,
            OrderStatus::InProgress,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ],
    )
    .await;

    let history = fx
        .query
        .get_status_history(&fx.buyer, order.id)
        .await
        .unwrap()
        .data;

    // newest first; every entry is a new row, never an overwrite
    assert_eq!(history.len(), 5);
    let statuses: Vec<OrderStatus> = history.iter().map(|u| u.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Delivered,
            OrderStatus::Shipped,
            OrderStatus::InProgress,
            OrderStatus::Confirmed,
            OrderStatus::Pending,
        ]
    );
}

#[tokio::test]
async fn skipping_a_step_is_an_invalid_transition() {
    let fx = fixture();
    let order = fx
        .command
        .create_order(&fx.buyer, &delivery_request(&fx, vec![fx.variant_a]))
        .await
        .unwrap()
        .data;

    advance(&fx, order.id, &[OrderStatus::Confirmed]).await;

    let err = fx
        .command
        .update_order_status(
            &fx.admin,
            order.id,
            &UpdateOrderStatusRequest {
                status: OrderStatus::Shipped,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidTransition {
            current: OrderStatus::Confirmed,
            requested: OrderStatus::Shipped,
            order_type: OrderType::Delivery,
        }
    ));
}

#[tokio::test]
async fn delivery_orders_cannot_enter_collection_states() {
    let fx = fixture();
    let order = fx
        .command
        .create_order(&fx.buyer, &delivery_request(&fx, vec![fx.variant_a]))
        .await
        .unwrap()
        .data;

    advance(&fx, order.id, &[OrderStatus::Confirmed, OrderStatus::InProgress]).await;

    let err = fx
        .command
        .update_order_status(
            &fx.admin,
            order.id,
            &UpdateOrderStatusRequest {
                status: OrderStatus::ReadyForCollection,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidTransition { .. }));
}

#[tokio::test]
async fn stale_append_loses_the_race() {
    let fx = fixture();
    let order = fx
        .command
        .create_order(&fx.buyer, &delivery_request(&fx, vec![fx.variant_a]))
        .await
        .unwrap()
        .data;

    advance(&fx, order.id, &[OrderStatus::Confirmed]).await;

    // a second writer that validated against Pending must not win
    let err = fx
        .command_repo
        .append_status_update(&AppendStatusUpdateRecord {
            order_id: order.id,
            status: OrderStatus::Confirmed,
            expected_current: OrderStatus::Pending,
            created_by: fx.admin.id,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
async fn only_the_owner_or_an_administrator_can_read_an_order() {
    let fx = fixture();
    let order = fx
        .command
        .create_order(&fx.buyer, &delivery_request(&fx, vec![fx.variant_a]))
        .await
        .unwrap()
        .data;

    assert!(fx.query.get_order(&fx.buyer, order.id).await.is_ok());
    assert!(fx.query.get_order(&fx.admin, order.id).await.is_ok());

    let err = fx
        .query
        .get_order(&fx.other_buyer, order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));

    let err = fx
        .query
        .get_status_history(&fx.other_buyer, order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));
}

#[tokio::test]
async fn list_filters_match_all_when_empty_and_latest_status_otherwise() {
    let fx = fixture();
    let delivery = fx
        .command
        .create_order(&fx.buyer, &delivery_request(&fx, vec![fx.variant_a]))
        .await
        .unwrap()
        .data;
    let _collection = fx
        .command
        .create_order(
            &fx.buyer,
            &CreateOrderRequest {
                order_type: OrderType::Collection,
                address_id: None,
                product_variant_ids: vec![fx.variant_a],
            },
        )
        .await
        .unwrap()
        .data;

    advance(&fx, delivery.id, &[OrderStatus::Confirmed]).await;

    // no filters: everything
    let all = fx
        .query
        .get_all_orders(&OrderFilter::default())
        .await
        .unwrap()
        .data;
    assert_eq!(all.len(), 2);

    // the status filter looks at the latest status, not the whole history
    let confirmed = fx
        .query
        .get_all_orders(&OrderFilter {
            statuses: Some(vec![OrderStatus::Confirmed]),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, delivery.id);

    let pending_delivery = fx
        .query
        .get_all_orders(&OrderFilter {
            statuses: Some(vec![OrderStatus::Pending]),
            types: Some(vec![OrderType::Delivery]),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;
    assert!(pending_delivery.is_empty());
}

#[tokio::test]
async fn user_order_listing_is_owner_or_admin_only() {
    let fx = fixture();
    fx.command
        .create_order(&fx.buyer, &delivery_request(&fx, vec![fx.variant_a]))
        .await
        .unwrap();

    let own = fx
        .query
        .get_user_orders(&fx.buyer, fx.buyer.id, &OrderFilter::default())
        .await
        .unwrap()
        .data;
    assert_eq!(own.len(), 1);

    let as_admin = fx
        .query
        .get_user_orders(&fx.admin, fx.buyer.id, &OrderFilter::default())
        .await
        .unwrap()
        .data;
    assert_eq!(as_admin.len(), 1);

    let err = fx
        .query
        .get_user_orders(&fx.other_buyer, fx.buyer.id, &OrderFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));
}
