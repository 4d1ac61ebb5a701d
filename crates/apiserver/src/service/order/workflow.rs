//! Status transition rules for the order lifecycle.
//!
//! A transition must be listed for the current status in [`ALLOWED`] and must
//! not be blocked for the order's fulfilment type in [`DISALLOWED`]:
//! collection orders never ship, delivery orders are never collected.

use crate::model::{OrderStatus, OrderType};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static ALLOWED: LazyLock<HashMap<OrderStatus, HashSet<OrderStatus>>> = LazyLock::new(|| {
    use OrderStatus::*;

    HashMap::from([
        (Pending, HashSet::from([Confirmed])),
        (Confirmed, HashSet::from([InProgress])),
        (InProgress, HashSet::from([Shipped, ReadyForCollection])),
        (Shipped, HashSet::from([Delivered])),
        (ReadyForCollection, HashSet::from([Collected])),
        (Delivered, HashSet::new()),
        (Collected, HashSet::new()),
    ])
});

static DISALLOWED: LazyLock<HashMap<OrderType, HashSet<OrderStatus>>> = LazyLock::new(|| {
    use OrderStatus::*;

    HashMap::from([
        (OrderType::Collection, HashSet::from([Shipped, Delivered])),
        (
            OrderType::Delivery,
            HashSet::from([ReadyForCollection, Collected]),
        ),
    ])
});

pub fn is_transition_allowed(
    current: OrderStatus,
    candidate: OrderStatus,
    order_type: OrderType,
) -> bool {
    let allowed = ALLOWED
        .get(&current)
        .is_some_and(|next| next.contains(&candidate));
    let blocked = DISALLOWED
        .get(&order_type)
        .is_some_and(|statuses| statuses.contains(&candidate));

    allowed && !blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    const ALL_STATUSES: [OrderStatus; 7] = [
        Pending,
        Confirmed,
        InProgress,
        ReadyForCollection,
        Collected,
        Shipped,
        Delivered,
    ];

    fn expected(current: OrderStatus, candidate: OrderStatus, order_type: OrderType) -> bool {
        let step_ok = matches!(
            (current, candidate),
            (Pending, Confirmed)
                | (Confirmed, InProgress)
                | (InProgress, Shipped)
                | (InProgress, ReadyForCollection)
                | (Shipped, Delivered)
                | (ReadyForCollection, Collected)
        );
        let type_ok = match order_type {
            OrderType::Collection => !matches!(candidate, Shipped | Delivered),
            OrderType::Delivery => !matches!(candidate, ReadyForCollection | Collected),
        };
        step_ok && type_ok
    }

    #[test]
    fn full_grid_matches_the_transition_tables() {
        for order_type in [OrderType::Delivery, OrderType::Collection] {
            for current in ALL_STATUSES {
                for candidate in ALL_STATUSES {
                    assert_eq!(
                        is_transition_allowed(current, candidate, order_type),
                        expected(current, candidate, order_type),
                        "{current:?} -> {candidate:?} for {order_type:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn delivery_orders_follow_the_shipping_path() {
        let t = OrderType::Delivery;
        assert!(is_transition_allowed(Pending, Confirmed, t));
        assert!(is_transition_allowed(Confirmed, InProgress, t));
        assert!(is_transition_allowed(InProgress, Shipped, t));
        assert!(is_transition_allowed(Shipped, Delivered, t));
    }

    #[test]
    fn collection_orders_follow_the_pickup_path() {
        let t = OrderType::Collection;
        assert!(is_transition_allowed(Pending, Confirmed, t));
        assert!(is_transition_allowed(Confirmed, InProgress, t));
        assert!(is_transition_allowed(InProgress, ReadyForCollection, t));
        assert!(is_transition_allowed(ReadyForCollection, Collected, t));
    }

    #[test]
    fn cross_type_endpoints_are_blocked() {
        assert!(!is_transition_allowed(
            InProgress,
            ReadyForCollection,
            OrderType::Delivery
        ));
        assert!(!is_transition_allowed(
            InProgress,
            Shipped,
            OrderType::Collection
        ));
    }

    #[test]
    fn terminal_statuses_have_no_exits() {
        for order_type in [OrderType::Delivery, OrderType::Collection] {
            for candidate in ALL_STATUSES {
                assert!(!is_transition_allowed(Delivered, candidate, order_type));
                assert!(!is_transition_allowed(Collected, candidate, order_type));
            }
        }
    }

    #[test]
    fn steps_cannot_be_skipped() {
        assert!(!is_transition_allowed(Pending, InProgress, OrderType::Delivery));
        assert!(!is_transition_allowed(Confirmed, Shipped, OrderType::Delivery));
        assert!(!is_transition_allowed(Pending, Delivered, OrderType::Delivery));
    }
}
