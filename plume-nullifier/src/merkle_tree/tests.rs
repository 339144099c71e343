use ff::Field;
use halo2::pasta::pallas;
use rand::Rng;

use super::*;

/// Compute the root of a complete tree from all of its leaves.
fn dense_root(mut level: Vec<pallas::Base>) -> pallas::Base {
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| hash_node(pair[0], pair[1]))
            .collect();
    }

    level[0]
}

#[test]
fn empty_roots() {
    plume_test::init();

    assert_eq!(EMPTY_ROOTS.len(), MAX_HEIGHT as usize);
    assert_eq!(EMPTY_ROOTS[0], pallas::Base::ZERO);

    for height in [1, 2, 8, 33, 256] {
        let tree = MerkleTree::new(height).expect("height is supported");

        assert_eq!(tree.get_root(), EMPTY_ROOTS[height as usize - 1]);
    }

    for height in 1..=8u32 {
        let tree = MerkleTree::new(height).unwrap();
        let leaves = vec![pallas::Base::ZERO; 1 << (height - 1)];

        assert_eq!(tree.get_root(), dense_root(leaves));
    }
}

#[test]
fn invalid_heights() {
    plume_test::init();

    assert_eq!(MerkleTree::new(0), Err(MerkleError::InvalidHeight(0)));
    assert_eq!(
        MerkleTree::new(MAX_HEIGHT + 1),
        Err(MerkleError::InvalidHeight(MAX_HEIGHT + 1))
    );
}

#[test]
fn sparse_root_matches_dense_root() {
    plume_test::init();

    let mut rng = plume_test::seeded_rng(0);
    let mut tree = MerkleTree::new(5).unwrap();
    let mut leaves = vec![pallas::Base::ZERO; 16];

    for _ in 0..24 {
        let index = rng.gen_range(0..16u64);
        let leaf = pallas::Base::random(&mut rng);

        tree.set_leaf(index, leaf).unwrap();
        leaves[index as usize] = leaf;

        assert_eq!(tree.get_root(), dense_root(leaves.clone()));
    }
}

#[test]
fn witnesses_recompute_the_root() {
    plume_test::init();

    let mut rng = plume_test::seeded_rng(1);
    let mut tree = MerkleTree::new(8).unwrap();

    tree.fill((0..40).map(|_| pallas::Base::random(&mut rng)))
        .unwrap();

    for index in [0, 1, 5, 39, 40, 127] {
        let witness = tree.get_witness(index).unwrap();
        let leaf = tree.get_leaf(index).unwrap();

        assert_eq!(witness.len(), 7);
        assert_eq!(witness.height(), 8);
        assert_eq!(witness.calculate_index(), Some(index));
        assert_eq!(witness.calculate_root(leaf), tree.get_root());
        assert_eq!(
            witness.compute_root_and_key(leaf),
            (tree.get_root(), pallas::Base::from(index))
        );
        assert!(tree.validate(index).unwrap());
    }
}

#[test]
fn witness_predicts_the_updated_root() {
    plume_test::init();

    let mut tree = MerkleTree::new(6).unwrap();
    tree.set_leaf(3, pallas::Base::from(9)).unwrap();

    let witness = tree.get_witness(12).unwrap();
    let predicted = witness.calculate_root(pallas::Base::from(77));

    tree.set_leaf(12, pallas::Base::from(77)).unwrap();

    assert_eq!(tree.get_root(), predicted);
}

#[test]
fn out_of_range_indexes() {
    plume_test::init();

    let mut tree = MerkleTree::new(8).unwrap();
    let root = tree.get_root();

    assert_eq!(tree.leaf_count(), Some(128));
    assert_eq!(
        tree.set_leaf(128, pallas::Base::ONE),
        Err(MerkleError::IndexOutOfRange {
            index: 128,
            height: 8
        })
    );
    assert_eq!(
        tree.get_witness(u64::MAX),
        Err(MerkleError::IndexOutOfRange {
            index: u64::MAX,
            height: 8
        })
    );
    assert_eq!(
        tree.get_node(8, 0),
        Err(MerkleError::LevelOutOfRange {
            level: 8,
            height: 8
        })
    );
    assert_eq!(tree.get_node(7, 0), Ok(root));
    assert!(tree.get_node(6, 2).is_err());
    assert_eq!(tree.get_root(), root);
}

#[test]
fn large_trees_accept_every_u64_index() {
    plume_test::init();

    let mut tree = MerkleTree::new(65).unwrap();
    assert_eq!(tree.leaf_count(), None);

    tree.set_leaf(u64::MAX, pallas::Base::ONE).unwrap();
    let witness = tree.get_witness(u64::MAX).unwrap();

    assert_eq!(witness.calculate_index(), Some(u64::MAX));
    assert!(tree.validate(u64::MAX).unwrap());
}

#[test]
fn positions_shift_across_limbs() {
    plume_test::init();

    let key = -pallas::Base::ONE;
    let mut position = Position::from_base(&key);

    assert!(position.fits(255));
    assert!(!position.fits(254));

    for _ in 0..255 {
        position = position.parent();
    }

    assert_eq!(position, Position::default());
}

#[test]
fn witness_json_shape() {
    plume_test::init();

    let tree = MerkleTree::new(2).unwrap();
    let witness = tree.get_witness(1).unwrap();
    let json = serde_json::to_value(&witness).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{ "isLeft": false, "sibling": hex::encode([0u8; 32]) }])
    );
    assert_eq!(
        serde_json::from_value::<MerkleWitness>(json).unwrap(),
        witness
    );
}
