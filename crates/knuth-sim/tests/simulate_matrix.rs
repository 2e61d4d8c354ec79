use knuth_forest::{AvlTree, BTree, BstTree};
use knuth_hash::{HashError, Table};
use knuth_sim::{
    frames, simulate, Dataset, SimConfig, SimError, Simulator, Snapshot, StructureKind,
    UniversalConfig,
};
use proptest::prelude::*;

#[test]
fn simulate_trees_matrix() {
    let config = SimConfig::default();
    let values = [5, 3, 8, 1, 4];
    assert_eq!(
        simulate(StructureKind::Bst, &values, &config).unwrap(),
        Snapshot::Bst(BstTree::build(&values).snapshot())
    );
    assert_eq!(
        simulate(StructureKind::Avl, &values, &config).unwrap(),
        Snapshot::Avl(AvlTree::build(&values).snapshot())
    );
    assert_eq!(
        simulate(StructureKind::BTree, &values, &config).unwrap(),
        Snapshot::BTree(BTree::build(&values, 2).unwrap().snapshot())
    );
    assert_eq!(
        simulate(StructureKind::Bst, &[], &config).unwrap(),
        Snapshot::Bst(None)
    );
}

#[test]
fn simulate_bad_degree_matrix() {
    let config = SimConfig {
        btree_degree: 1,
        ..SimConfig::default()
    };
    assert!(matches!(
        simulate(StructureKind::BTree, &[1], &config),
        Err(SimError::Forest(_))
    ));
}

#[test]
fn simulate_list_matrix() {
    let snap = simulate(StructureKind::List, &[10, 9, 8], &SimConfig::default()).unwrap();
    assert_eq!(snap, Snapshot::List(vec![8, 9, 10]));
}

#[test]
fn perfect_frames_use_full_length_matrix() {
    let all = frames(StructureKind::Perfect, &[23, 42, 4], &SimConfig::default()).unwrap();
    assert_eq!(all.len(), 3);
    let Snapshot::Table(Table::Open(first)) = &all[0] else {
        panic!("expected an open table, got {:?}", all[0]);
    };
    assert_eq!(first.slots(), &[Some(23), None, None]);
    let Snapshot::Table(Table::Open(last)) = &all[2] else {
        panic!("expected an open table, got {:?}", all[2]);
    };
    assert_eq!(last.slots(), &[Some(23), Some(42), Some(4)]);
}

#[test]
fn universal_defaults_matrix() {
    let config = SimConfig {
        universal: UniversalConfig {
            m: Some(5),
            ..UniversalConfig::default()
        },
        ..SimConfig::default()
    };
    let Snapshot::Table(table) = simulate(StructureKind::Universal, &[1, 2, 3], &config).unwrap()
    else {
        panic!("expected a table");
    };
    assert_eq!(
        table.as_open().unwrap().slots(),
        &[None, Some(1), Some(2), Some(3), None]
    );

    // m falls back to the dataset length.
    let Snapshot::Table(table) =
        simulate(StructureKind::Universal, &[1, 2, 3], &SimConfig::default()).unwrap()
    else {
        panic!("expected a table");
    };
    assert_eq!(table.len(), 3);
}

#[test]
fn universal_invalid_matrix() {
    let config = SimConfig {
        universal: UniversalConfig {
            p: 0,
            ..UniversalConfig::default()
        },
        ..SimConfig::default()
    };
    assert!(matches!(
        simulate(StructureKind::Universal, &[1], &config),
        Err(SimError::Hash(HashError::InvalidParameter { name: "p", .. }))
    ));
    assert!(matches!(
        simulate(StructureKind::Universal, &[], &SimConfig::default()),
        Err(SimError::Hash(HashError::InvalidParameter { name: "m", .. }))
    ));
}

#[test]
fn collisions_snapshot_json_matrix() {
    let snap = simulate(StructureKind::Collisions, &[3, 13], &SimConfig::default()).unwrap();
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["kind"], "collisions");
    assert_eq!(json["structure"]["chaining"]["buckets"][3], serde_json::json!([3, 13]));
    assert_eq!(json["structure"]["linear"]["slots"][4], 13);
    let back: Snapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn btree_snapshot_tag_matrix() {
    let snap = simulate(StructureKind::BTree, &[1], &SimConfig::default()).unwrap();
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["kind"], "btree");
    assert_eq!(json["structure"]["keys"], serde_json::json!([1]));
}

#[test]
fn frames_grow_one_value_at_a_time_matrix() {
    let sim = Simulator::new(StructureKind::Bst, SimConfig::default(), 3);
    let all = sim.frames(&[2, 1, 3]).unwrap();
    let sizes: Vec<usize> = all
        .iter()
        .map(|s| match s {
            Snapshot::Bst(Some(t)) => t.in_order().len(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(sizes, vec![1, 2, 3]);
    assert_eq!(sim.kind(), StructureKind::Bst);
}

#[test]
fn seeded_datasets_matrix() {
    let docs = [
        r#"{"label":"Conjunto 01","data":[5,3,8,1,4],"tipo":"bst"}"#,
        r#"{"label":"Conjunto 02","data":[10,9,8,7,6],"tipo":"lista"}"#,
        r#"{"label":"Conjunto 03","data":[23,42,4,16,8],"tipo":"hash"}"#,
        r#"{"label":"Conjunto 05","data":[33,18,14,21,30],"tipo":"avl"}"#,
    ];
    for doc in docs {
        let dataset = Dataset::from_json(doc).unwrap();
        let kind = dataset.kind.unwrap();
        assert!(simulate(kind, &dataset.data, &SimConfig::default()).is_ok());
    }
}

proptest! {
    #[test]
    fn rebuild_is_idempotent(values in prop::collection::vec(-40i64..40, 0..25)) {
        let mut config = SimConfig::default();
        config.universal.m = Some(7);
        for kind in [
            StructureKind::Bst,
            StructureKind::Avl,
            StructureKind::BTree,
            StructureKind::List,
            StructureKind::Collisions,
            StructureKind::Chaining,
            StructureKind::LinearProbing,
            StructureKind::DoubleHashing,
            StructureKind::Perfect,
            StructureKind::Universal,
        ] {
            let a = simulate(kind, &values, &config).unwrap();
            let b = simulate(kind, &values, &config).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
