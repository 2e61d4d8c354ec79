use knuth_forest::{AvlTree, Value};
use proptest::prelude::*;

#[test]
fn avl_dataset_matrix() {
    // 33, 18, 14 triggers a right rotation at the root.
    let tree = AvlTree::build(&[33, 18, 14, 21, 30]);
    tree.assert_valid().unwrap();
    let snap = tree.snapshot().unwrap();
    assert_eq!(snap.value, 18);
    assert_eq!(snap.left.as_ref().unwrap().value, 14);
    let right = snap.right.as_ref().unwrap();
    assert_eq!(right.value, 30);
    assert_eq!(right.left.as_ref().unwrap().value, 21);
    assert_eq!(right.right.as_ref().unwrap().value, 33);
    assert_eq!(snap.height, Some(3));
}

#[test]
fn avl_ladder_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        assert!(tree.insert(i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height() <= 10);
    let root = tree.root.unwrap();
    assert!(tree.balance_factor(root).abs() <= 1);
}

#[test]
fn avl_rejects_duplicates_matrix() {
    let mut tree = AvlTree::build(&[10, 5, 15]);
    let before = tree.clone();
    assert!(!tree.insert(5));
    assert_eq!(tree, before);
    assert_eq!(AvlTree::build(&[3, 1, 4, 1, 5]).in_order(), vec![1, 3, 4, 5]);
}

#[test]
fn avl_display_matrix() {
    let tree = AvlTree::build(&[1, 2, 3]);
    assert_eq!(
        tree.to_string(),
        "AvlTree\n└─ 2 [h=2]\n   ← 1 [h=1]\n   → 3 [h=1]"
    );
    assert_eq!(AvlTree::new().to_string(), "AvlTree ∅");
}

#[test]
fn avl_snapshot_json_matrix() {
    let snap = AvlTree::build(&[2, 1]).snapshot().unwrap();
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "value": 2,
            "height": 2,
            "left": { "value": 1, "height": 1 }
        })
    );
}

proptest! {
    #[test]
    fn avl_stays_balanced(values in prop::collection::vec(-100i64..100, 0..60)) {
        let tree = AvlTree::build(&values);
        prop_assert!(tree.assert_valid().is_ok());
        let mut distinct: Vec<Value> = values.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(tree.in_order(), distinct);
        prop_assert_eq!(AvlTree::build(&values).snapshot(), tree.snapshot());
    }
}
