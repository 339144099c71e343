use ff::Field;
use halo2::pasta::pallas;
use proptest::prelude::*;

use plume_test::vectors::STORE_HEIGHT;

use crate::{keys::PrivateKey, keys::PublicKey, merkle_tree::MerkleTree};

use super::*;

/// A voter record, as kept off-chain by a voting application.
#[derive(Clone, Debug, PartialEq, Eq)]
struct VoteRecord {
    voter: PublicKey,
    weight: u64,
    votes: u32,
    is_candidate: bool,
}

impl ToFields for VoteRecord {
    fn to_fields(&self) -> Vec<pallas::Base> {
        (
            &self.voter,
            (self.weight, self.votes),
            self.is_candidate,
        )
            .to_fields()
    }
}

fn vote_record(seed: u64) -> VoteRecord {
    VoteRecord {
        voter: PrivateKey::new(plume_test::seeded_rng(seed)).public_key(),
        weight: seed * 10,
        votes: 0,
        is_candidate: seed % 2 == 0,
    }
}

#[test]
fn vote_record_scenario() {
    plume_test::init();

    let mut store = MerkleStore::new(STORE_HEIGHT).unwrap();
    let empty_root = store.get_root();
    let record = vote_record(5);

    assert_eq!(store.get(5), None);
    assert_eq!(store.set(5, record.clone()), Ok(None));

    assert_eq!(store.get(5), Some(&record));
    assert_ne!(store.get_root(), empty_root);

    let witness = store.get_witness(5).unwrap();
    assert_eq!(witness.len(), STORE_HEIGHT as usize - 1);
    assert_eq!(
        witness.compute_root_and_key(leaf_hash(&record)),
        (store.get_root(), pallas::Base::from(5))
    );
}

#[test]
fn last_write_wins() {
    plume_test::init();

    let mut store = MerkleStore::new(STORE_HEIGHT).unwrap();
    let first = vote_record(1);
    let second = VoteRecord {
        votes: 1,
        ..first.clone()
    };

    store.set(9, first.clone()).unwrap();
    assert_eq!(store.set(9, second.clone()), Ok(Some(first)));

    let mut expected = MerkleTree::new(STORE_HEIGHT).unwrap();
    expected.set_leaf(9, leaf_hash(&second)).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(9), Some(&second));
    assert_eq!(store.get_root(), expected.get_root());
}

#[test]
fn out_of_range_set_changes_nothing() {
    plume_test::init();

    let mut store = MerkleStore::new(STORE_HEIGHT).unwrap();
    store.set(1, vote_record(1)).unwrap();
    let root = store.get_root();

    let out_of_range = 1 << (STORE_HEIGHT - 1);
    assert_eq!(
        store.set(out_of_range, vote_record(2)),
        Err(MerkleError::IndexOutOfRange {
            index: out_of_range,
            height: STORE_HEIGHT,
        })
    );
    assert!(store.get_witness(out_of_range).is_err());

    assert_eq!(store.get_root(), root);
    assert_eq!(store.len(), 1);
    assert!(!store.contains_key(out_of_range));
}

#[test]
fn absent_is_distinct_from_zero() {
    plume_test::init();

    let mut store = MerkleStore::new(4).unwrap();
    store.set(0, pallas::Base::ZERO).unwrap();

    assert_eq!(store.get(0), Some(&pallas::Base::ZERO));
    assert_eq!(store.get(1), None);
    // A stored zero commits to hash([0]), not to an empty leaf.
    assert_ne!(store.get_root(), MerkleTree::new(4).unwrap().get_root());
}

#[test]
fn clone_is_independent() {
    plume_test::init();

    let mut original = MerkleStore::new(STORE_HEIGHT).unwrap();
    original.set(3, vote_record(3)).unwrap();

    let mut copy = original.clone();
    let shared_root = original.get_root();

    copy.set(4, vote_record(4)).unwrap();

    assert_eq!(original.get_root(), shared_root);
    assert_eq!(original.get(4), None);
    assert_ne!(copy.get_root(), shared_root);
    assert_eq!(copy.get(3), original.get(3));
}

#[test]
fn iterates_in_key_order() {
    plume_test::init();

    let mut store = MerkleStore::new(STORE_HEIGHT).unwrap();
    for key in [40u64, 2, 17] {
        store.set(key, key).unwrap();
    }

    let keys: Vec<u64> = store.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![2, 17, 40]);
}

#[test]
fn config_defaults_and_validation() {
    plume_test::init();

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    let store = MerkleStore::<u64>::from_config(&config).unwrap();
    assert_eq!(store.height(), 20);
    assert!(store.is_empty());

    let config: Config = serde_json::from_str(r#"{ "height": 0 }"#).unwrap();
    assert_eq!(
        MerkleStore::<u64>::from_config(&config).map(|store| store.height()),
        Err(MerkleError::InvalidHeight(0))
    );

    assert!(serde_json::from_str::<Config>(r#"{ "depth": 8 }"#).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn set_then_get_round_trips(
        writes in prop::collection::vec((0..128u64, any::<u64>(), any::<bool>()), 1..8),
    ) {
        plume_test::init();

        let mut store = MerkleStore::new(STORE_HEIGHT).unwrap();

        for (key, weight, flag) in writes {
            let value = (weight, flag);
            store.set(key, value).unwrap();

            prop_assert_eq!(store.get(key), Some(&value));

            let witness = store.get_witness(key).unwrap();
            prop_assert_eq!(
                witness.compute_root_and_key(leaf_hash(&value)),
                (store.get_root(), pallas::Base::from(key))
            );
        }
    }
}
