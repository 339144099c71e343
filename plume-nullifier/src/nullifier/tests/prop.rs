//! Randomised nullifier tests.

use ff::Field;
use halo2::pasta::pallas;
use proptest::prelude::*;

use crate::{
    arbitrary,
    error::NullifierError,
    keys::PrivateKey,
    merkle_map::MerkleMap,
    nullifier::{Nullifier, USED},
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn arbitrary_nullifiers_verify(nullifier in any::<Nullifier>()) {
        plume_test::init();

        prop_assert_eq!(nullifier.verify(), Ok(()));

        let parsed = Nullifier::from_json(&nullifier.to_json().unwrap()).unwrap();
        prop_assert_eq!(parsed, nullifier);
    }

    #[test]
    fn keys_ignore_the_nonce(
        sk in any::<PrivateKey>(),
        message in arbitrary::base(),
        seeds in any::<(u64, u64)>(),
    ) {
        plume_test::init();

        let first = Nullifier::create(message, &sk, plume_test::seeded_rng(seeds.0)).unwrap();
        let second = Nullifier::create(message, &sk, plume_test::seeded_rng(seeds.1)).unwrap();

        prop_assert_eq!(first.key(), second.key());
        prop_assert_eq!(second.verify(), Ok(()));
    }

    #[test]
    fn other_challenges_fail(
        nullifier in any::<Nullifier>(),
        offset in arbitrary::base(),
    ) {
        plume_test::init();

        prop_assume!(offset != pallas::Base::ZERO);

        let tampered = Nullifier { c: nullifier.c + offset, ..nullifier };
        prop_assert_eq!(tampered.verify(), Err(NullifierError::Mismatch));
    }

    #[test]
    fn used_nullifiers_stay_used(
        nullifiers in prop::collection::vec(any::<Nullifier>(), 1..4),
    ) {
        plume_test::init();

        let mut map = MerkleMap::new();

        for nullifier in &nullifiers {
            let witness = map.get_witness(nullifier.key());
            prop_assert!(nullifier.is_unused(&witness, map.get_root()));

            let used_root = nullifier.set_used(&witness);
            map.set(nullifier.key(), USED);
            prop_assert_eq!(map.get_root(), used_root);
        }

        for nullifier in &nullifiers {
            prop_assert!(!nullifier.is_unused(&map.get_witness(nullifier.key()), map.get_root()));
        }
    }
}
