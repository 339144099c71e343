//! Poseidon hashing over the Pallas base field.

use ff::{Field, PrimeField};
use halo2::{
    arithmetic::{Coordinates, CurveAffine, CurveExt},
    pasta::pallas,
};
use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};

use crate::{error::NullifierError, serialization::SerializationError};

/// The fixed-length Poseidon instance every variable-length hash is chained from.
type Poseidon3 = poseidon::Hash<pallas::Base, P128Pow5T3, ConstantLength<3>, 3, 2>;

/// Domain separator for mapping Poseidon digests onto Pallas.
pub const HASH_TO_GROUP_DOMAIN: &str = "plume:hash-to-group";

/// Hash a sequence of base field elements into a single base field element.
///
/// The accumulator is seeded with the input length, then absorbs the input two
/// elements at a time:
///
/// ```text
/// acc_0 = len
/// acc_{i+1} = Poseidon(acc_i, m_{2i}, m_{2i+1})
/// ```
///
/// An odd final element is paired with zero, and the empty input is hashed as
/// a single zero pair. The length prefix keeps padded inputs distinct.
pub fn hash(input: &[pallas::Base]) -> pallas::Base {
    let len = pallas::Base::from(input.len() as u64);

    if input.is_empty() {
        return Poseidon3::init().hash([len, pallas::Base::ZERO, pallas::Base::ZERO]);
    }

    input.chunks(2).fold(len, |acc, pair| {
        let left = pair[0];
        let right = pair.get(1).copied().unwrap_or(pallas::Base::ZERO);

        Poseidon3::init().hash([acc, left, right])
    })
}

/// The two square roots of a group hash's `y^2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareRoots {
    /// The even root, which is the one the hashed point uses.
    pub x0: pallas::Base,
    /// The odd root, `-x0`.
    pub x1: pallas::Base,
}

/// A point produced by [`hash_to_group`], decomposed into field components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashedGroup {
    /// The affine x-coordinate.
    pub x: pallas::Base,
    /// Both candidate y-coordinates.
    pub y: SquareRoots,
}

impl HashedGroup {
    /// Rebuild the curve point `(x, x0)`.
    pub fn to_point(&self) -> Result<pallas::Point, SerializationError> {
        super::point::from_fields([self.x, self.y.x0])
    }
}

/// Hash a sequence of base field elements to a Pallas point.
///
/// The Poseidon digest of `input` is mapped onto the curve with the curve's
/// hash-to-curve, then normalized to the even square root, so every caller
/// agrees on the same branch.
///
/// Returns an error if the mapped point is the identity.
pub fn hash_to_group(input: &[pallas::Base]) -> Result<HashedGroup, NullifierError> {
    let digest = hash(input);
    let point = pallas::Point::hash_to_curve(HASH_TO_GROUP_DOMAIN)(&digest.to_repr()[..]);

    let coordinates: Option<Coordinates<pallas::Affine>> =
        pallas::Affine::from(point).coordinates().into();
    let coordinates = coordinates.ok_or(NullifierError::HashToGroupIdentity)?;

    let x = *coordinates.x();
    let y = *coordinates.y();
    let x0 = if bool::from(y.is_even()) { y } else { -y };

    Ok(HashedGroup {
        x,
        y: SquareRoots { x0, x1: -x0 },
    })
}
