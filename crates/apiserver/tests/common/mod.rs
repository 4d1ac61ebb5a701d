use apiserver::{
    abstract_trait::{
        AddressRepositoryTrait, OrderCommandRepositoryTrait, OrderQueryRepositoryTrait,
        UserProfileRepositoryTrait,
    },
    domain::requests::{
        AppendStatusUpdateRecord, CreateOrderRecord, UpdateAddressRequest,
        UpdateUserProfileRequest,
    },
    errors::RepositoryError,
    model::{
        Address, Order, OrderItem, OrderItemSnapshot, OrderStatus, OrderStatusUpdate, OrderType,
        Product, ProductVariant, UserProfile, UserRole,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;

/// Shared in-memory backing store standing in for Postgres.
#[derive(Default)]
pub struct Store {
    pub users: HashMap<Uuid, UserProfile>,
    pub addresses: HashMap<Uuid, Address>,
    pub products: HashMap<Uuid, Product>,
    pub variants: HashMap<Uuid, ProductVariant>,
    pub orders: HashMap<Uuid, Order>,
    pub items: Vec<OrderItem>,
    pub updates: Vec<OrderStatusUpdate>,
    pub next_seq: i64,
}

pub type SharedStore = Arc<Mutex<Store>>;

impl Store {
    fn latest_update(&self, order_id: Uuid) -> Option<&OrderStatusUpdate> {
        self.updates
            .iter()
            .filter(|u| u.order_id == order_id)
            .max_by_key(|u| (u.created_at, u.seq))
    }

    fn push_update(&mut self, order_id: Uuid, status: OrderStatus, created_by: Uuid) -> OrderStatusUpdate {
        self.next_seq += 1;
        let update = OrderStatusUpdate {
            id: Uuid::new_v4(),
            seq: self.next_seq,
            order_id,
            status,
            created_at: Utc::now(),
            created_by,
        };
        self.updates.push(update.clone());
        update
    }
}

pub struct FakeUserProfileRepository(pub SharedStore);

#[async_trait]
impl UserProfileRepositoryTrait for FakeUserProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<UserProfile, RepositoryError> {
        let mut store = self.0.lock().unwrap();
        store.users.insert(profile.id, profile.clone());
        Ok(profile.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<UserProfile, RepositoryError> {
        let store = self.0.lock().unwrap();
        store.users.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        roles: Option<&[UserRole]>,
    ) -> Result<Vec<UserProfile>, RepositoryError> {
        let store = self.0.lock().unwrap();
        Ok(store
            .users
            .values()
            .filter(|u| roles.is_none_or(|r| r.contains(&u.role)))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateUserProfileRequest,
    ) -> Result<UserProfile, RepositoryError> {
        let mut store = self.0.lock().unwrap();
        let profile = store.users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        profile.first_name = req.first_name.clone();
        profile.surname = req.surname.clone();
        profile.email = req.email.clone();
        profile.gender = req.gender;
        Ok(profile.clone())
    }
}

pub struct FakeAddressRepository(pub SharedStore);

#[async_trait]
impl AddressRepositoryTrait for FakeAddressRepository {
    async fn create(&self, address: &Address) -> Result<Address, RepositoryError> {
        let mut store = self.0.lock().unwrap();
        store.addresses.insert(address.id, address.clone());
        Ok(address.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Address, RepositoryError> {
        let store = self.0.lock().unwrap();
        store
            .addresses
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, RepositoryError> {
        let store = self.0.lock().unwrap();
        Ok(store
            .addresses
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateAddressRequest,
    ) -> Result<Address, RepositoryError> {
        let mut store = self.0.lock().unwrap();
        let address = store.addresses.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        address.country = req.country.clone();
        address.province = req.province.clone();
        address.city = req.city.clone();
        address.suburb = req.suburb.clone();
        address.postal_code = req.postal_code;
        address.street_number = req.street_number.clone();
        address.street_name = req.street_name.clone();
        address.unit_number = req.unit_number.clone();
        address.complex_name = req.complex_name.clone();
        Ok(address.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut store = self.0.lock().unwrap();
        store
            .addresses
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct FakeOrderCommandRepository(pub SharedStore);

#[async_trait]
impl OrderCommandRepositoryTrait for FakeOrderCommandRepository {
    async fn create_order(&self, record: &CreateOrderRecord) -> Result<Order, RepositoryError> {
        let mut store = self.0.lock().unwrap();

        // stage the stock changes first; nothing is written unless every
        // occurrence can be satisfied, mirroring the transactional rollback
        let mut staged: HashMap<Uuid, i32> = HashMap::new();
        for variant_id in &record.product_variant_ids {
            let variant = store
                .variants
                .get(variant_id)
                .ok_or(RepositoryError::NotFound)?;
            let remaining = staged.entry(*variant_id).or_insert(variant.quantity);
            if *remaining <= 0 {
                return Err(RepositoryError::Conflict(format!(
                    "Product variant {variant_id} is out of stock"
                )));
            }
            *remaining -= 1;
        }

        for (variant_id, remaining) in staged {
            store.variants.get_mut(&variant_id).unwrap().quantity = remaining;
        }

        let order = Order {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            order_type: record.order_type,
            address_id: record.address_id,
            created_at: Utc::now(),
        };
        store.orders.insert(order.id, order.clone());
        store.push_update(order.id, OrderStatus::Pending, record.user_id);

        for (occurrence, variant_id) in record.product_variant_ids.iter().enumerate() {
            store.items.push(OrderItem {
                order_id: order.id,
                product_variant_id: *variant_id,
                seq: occurrence as i16,
            });
        }

        Ok(order)
    }

    async fn append_status_update(
        &self,
        record: &AppendStatusUpdateRecord,
    ) -> Result<OrderStatusUpdate, RepositoryError> {
        let mut store = self.0.lock().unwrap();

        let latest = store
            .latest_update(record.order_id)
            .ok_or(RepositoryError::NotFound)?;

        if latest.status != record.expected_current {
            return Err(RepositoryError::Conflict(format!(
                "Order {} status changed concurrently",
                record.order_id
            )));
        }

        Ok(store.push_update(record.order_id, record.status, record.created_by))
    }
}

pub struct FakeOrderQueryRepository(pub SharedStore);

#[async_trait]
impl OrderQueryRepositoryTrait for FakeOrderQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let store = self.0.lock().unwrap();
        store.orders.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn find_all(
        &self,
        owner: Option<Uuid>,
        types: Option<&[OrderType]>,
    ) -> Result<Vec<Order>, RepositoryError> {
        let store = self.0.lock().unwrap();
        let mut orders: Vec<Order> = store
            .orders
            .values()
            .filter(|o| owner.is_none_or(|u| o.user_id == u))
            .filter(|o| types.is_none_or(|t| t.contains(&o.order_type)))
            .cloned()
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));
        Ok(orders)
    }

    async fn latest_status_update(
        &self,
        order_id: Uuid,
    ) -> Result<OrderStatusUpdate, RepositoryError> {
        let store = self.0.lock().unwrap();
        store
            .latest_update(order_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn status_history(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderStatusUpdate>, RepositoryError> {
        let store = self.0.lock().unwrap();
        let mut history: Vec<OrderStatusUpdate> = store
            .updates
            .iter()
            .filter(|u| u.order_id == order_id)
            .cloned()
            .collect();
        history.sort_by_key(|u| std::cmp::Reverse((u.created_at, u.seq)));
        Ok(history)
    }

    async fn item_snapshots(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemSnapshot>, RepositoryError> {
        let store = self.0.lock().unwrap();
        let mut snapshots = Vec::new();
        for item in store.items.iter().filter(|i| i.order_id == order_id) {
            let variant = store
                .variants
                .get(&item.product_variant_id)
                .ok_or(RepositoryError::NotFound)?;
            let product = store
                .products
                .get(&variant.product_id)
                .ok_or(RepositoryError::NotFound)?;
            snapshots.push(OrderItemSnapshot {
                product_variant_id: variant.id,
                brand: product.brand.clone(),
                model: product.model.clone(),
                color: variant.color.clone(),
                size_code: variant.size_code,
                size_value: variant.size_value.clone(),
                side: variant.side,
                price: variant.price,
            });
        }
        Ok(snapshots)
    }
}
