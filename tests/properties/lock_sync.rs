//! Property tests for primary/mirror lock comparison.

use proptest::prelude::*;
use serde_json::{Map, Value};

use auditpack::domain::services::{canonical_form, compare_locks};
use auditpack::LockSyncStatus;

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn lock_doc() -> impl Strategy<Value = Value> {
    proptest::collection::btree_map("[a-z]{1,8}", json_value(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

/// Same object with its keys inserted in reverse order, recursively
fn reversed(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map.iter().rev() {
                out.insert(k.clone(), reversed(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(reversed).collect()),
        other => other.clone(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A document is always synced with itself.
    #[test]
    fn property_lock_sync_reflexive(doc in lock_doc()) {
        prop_assert_eq!(compare_locks(&doc, &doc, &[]), LockSyncStatus::Synced);
    }

    /// PROPERTY: compare(a, b) == compare(b, a).
    #[test]
    fn property_lock_sync_symmetric(a in lock_doc(), b in lock_doc()) {
        prop_assert_eq!(compare_locks(&a, &b, &[]), compare_locks(&b, &a, &[]));
    }

    /// PROPERTY: Key order never affects the canonical form.
    #[test]
    fn property_canonical_form_ignores_key_order(doc in lock_doc()) {
        prop_assert_eq!(canonical_form(&doc, &[]), canonical_form(&reversed(&doc), &[]));
        prop_assert_eq!(compare_locks(&doc, &reversed(&doc), &[]), LockSyncStatus::Synced);
    }

    /// PROPERTY: Changing one top-level field is drift unless that field is ignored.
    #[test]
    fn property_ignored_field_masks_only_itself(
        doc in lock_doc(),
        field in "[a-z]{1,8}",
        before in "[a-z]{1,8}",
        after in "[A-Z]{1,8}",
    ) {
        let mut a = doc.clone();
        let mut b = doc;
        a.as_object_mut().unwrap().insert(field.clone(), Value::String(before));
        b.as_object_mut().unwrap().insert(field.clone(), Value::String(after));

        prop_assert_eq!(compare_locks(&a, &b, &[]), LockSyncStatus::Drift);
        prop_assert_eq!(compare_locks(&a, &b, &[field]), LockSyncStatus::Synced);
    }
}
