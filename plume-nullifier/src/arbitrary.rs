//! Randomised property testing strategies.

use ff::Field;
use halo2::pasta::pallas;
use proptest::{arbitrary::any, prelude::*};
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;

use crate::{keys::PrivateKey, nullifier::Nullifier};

/// A strategy for uniformly random base field elements.
pub fn base() -> impl Strategy<Value = pallas::Base> {
    any::<u64>().prop_map(|seed| pallas::Base::random(ChaChaRng::seed_from_u64(seed)))
}

impl Arbitrary for PrivateKey {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<u64>()
            .prop_map(|seed| PrivateKey::new(ChaChaRng::seed_from_u64(seed)))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Nullifier {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<PrivateKey>(), base(), any::<u64>())
            .prop_filter_map("message hashed to the identity", |(sk, message, seed)| {
                Nullifier::create(message, &sk, ChaChaRng::seed_from_u64(seed)).ok()
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
