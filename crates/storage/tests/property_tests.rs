//! Property tests for the storage structures
//!
//! The tree is checked against a `BTreeMap` reference model: same key set,
//! same ascending enumeration, last write wins per key. The list is checked
//! against a plain `Vec` filtered by the deleted ids.

use proptest::prelude::*;
use shelf_core::{LineItem, Order, OrderId, Product, ProductId};
use shelf_storage::{OrderList, ProductTree};
use std::collections::BTreeMap;

fn product(id: u64, revision: usize) -> Product {
    Product::new(
        ProductId::new(id),
        format!("product-{id}-r{revision}"),
        revision as f64,
    )
}

fn order(id: u64) -> Order {
    Order::new(
        OrderId::new(id),
        format!("customer-{id}"),
        vec![LineItem::new(ProductId::new(id), 1)],
    )
}

/// Unique ids in random append order, plus a same-length removal mask.
fn ids_with_removal_mask() -> impl Strategy<Value = (Vec<u64>, Vec<bool>)> {
    prop::collection::btree_set(1u64..500, 0..40)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|ids| {
            let n = ids.len();
            let mask = prop::collection::vec(any::<bool>(), n..=n);
            (Just(ids), mask)
        })
}

proptest! {
    #[test]
    fn tree_enumerates_ascending_with_last_write_wins(
        inserts in prop::collection::vec(1u64..50, 0..120),
    ) {
        let mut tree = ProductTree::new();
        let mut model = BTreeMap::new();

        for (revision, &id) in inserts.iter().enumerate() {
            let p = product(id, revision);
            tree.insert(p.id, p.clone());
            model.insert(id, p);
        }

        prop_assert_eq!(tree.len(), model.len());
        let got: Vec<Product> = tree.iter().cloned().collect();
        let want: Vec<Product> = model.into_values().collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn tree_lookup_agrees_with_model(
        ops in prop::collection::vec((any::<bool>(), 1u64..40), 0..150),
    ) {
        let mut tree = ProductTree::new();
        let mut model = BTreeMap::new();

        for (step, &(is_insert, id)) in ops.iter().enumerate() {
            if is_insert {
                let p = product(id, step);
                tree.insert(p.id, p.clone());
                model.insert(id, p);
            } else {
                let removed = tree.remove(ProductId::new(id));
                prop_assert_eq!(removed, model.remove(&id).is_some());
            }
        }

        for id in 1u64..40 {
            prop_assert_eq!(tree.get(ProductId::new(id)), model.get(&id));
        }
    }

    #[test]
    fn tree_deletion_preserves_inorder_of_survivors(
        keys in prop::collection::btree_set(1u64..200, 1..40)
            .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut tree = ProductTree::new();
        for &id in &keys {
            tree.insert(ProductId::new(id), product(id, 0));
        }

        let victim = keys[victim.index(keys.len())];
        prop_assert!(tree.remove(ProductId::new(victim)));

        let mut expected: Vec<u64> = keys.iter().copied().filter(|&id| id != victim).collect();
        expected.sort_unstable();

        let survivors: Vec<u64> = tree.iter().map(|p| p.id.get()).collect();
        prop_assert_eq!(survivors, expected);
        prop_assert!(!tree.contains(ProductId::new(victim)));
    }

    #[test]
    fn list_preserves_append_order_under_removals(
        (ids, remove_mask) in ids_with_removal_mask(),
    ) {
        let mut list = OrderList::new();
        for &id in &ids {
            list.append(order(id));
        }

        for (&id, &remove) in ids.iter().zip(&remove_mask) {
            if remove {
                prop_assert!(list.remove(OrderId::new(id)));
            }
        }

        let expected: Vec<u64> = ids
            .iter()
            .zip(&remove_mask)
            .filter(|(_, &removed)| !removed)
            .map(|(&id, _)| id)
            .collect();

        let got: Vec<u64> = list.iter().map(|o| o.id.get()).collect();
        prop_assert_eq!(got, expected);

        for (&id, &removed) in ids.iter().zip(&remove_mask) {
            prop_assert_eq!(list.find(OrderId::new(id)).is_some(), !removed);
        }
    }
}
