//! The shifted scalar convention for variable-base scalar multiplication.
//!
//! Circuits multiply points by a scalar `t` given as raw bits, and interpret it
//! as the shifted value `(t - (2^255 + 1)) / 2`. A challenge computed in the
//! base field is turned into bits with [`ShiftedScalar::from_field`], and every
//! party that multiplies by it must use [`scale_shifted`] (or
//! [`ShiftedScalar::unshift`]) so that provers and verifiers pick the same
//! scalar. Getting this wrong makes all proofs fail, rather than weakening them.

use bitvec::prelude::*;
use ff::{Field, PrimeField};
use halo2::pasta::pallas;
use lazy_static::lazy_static;

lazy_static! {
    /// `2^255 + 1`, reduced into the Pallas scalar field.
    static ref SHIFT: pallas::Scalar =
        pallas::Scalar::from(2).pow_vartime([255u64]) + pallas::Scalar::ONE;
}

/// A scalar in shifted representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftedScalar(pallas::Scalar);

impl ShiftedScalar {
    /// Pack little-endian bits into a shifted scalar, without reduction.
    ///
    /// Callers pass at most [`pallas::Base::NUM_BITS`] bits, which always fit
    /// the scalar field.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: DoubleEndedIterator,
    {
        let packed = bits
            .into_iter()
            .rev()
            .fold(pallas::Scalar::ZERO, |acc, bit| {
                let acc = acc.double();
                if bit {
                    acc + pallas::Scalar::ONE
                } else {
                    acc
                }
            });

        Self(packed)
    }

    /// The shifted scalar whose bits are the bit decomposition of `c`.
    pub fn from_field(c: &pallas::Base) -> Self {
        let repr = c.to_repr();
        let bits = &repr.view_bits::<Lsb0>()[..pallas::Base::NUM_BITS as usize];

        Self::from_bits(bits.iter().by_vals())
    }

    /// The raw bits, packed as a scalar.
    pub fn packed(&self) -> pallas::Scalar {
        self.0
    }

    /// The scalar this shifted representation denotes: `(t - SHIFT) / 2`.
    pub fn unshift(&self) -> pallas::Scalar {
        (self.0 - *SHIFT) * pallas::Scalar::TWO_INV
    }
}

/// Multiply `point` by the scalar `shifted` denotes.
///
/// Computed as `[t]([1/2]P) - [SHIFT]([1/2]P)`, which is `[unshift(t)]P`.
pub fn scale_shifted(point: pallas::Point, shifted: &ShiftedScalar) -> pallas::Point {
    let one_half = point * pallas::Scalar::TWO_INV;

    one_half * shifted.0 - one_half * *SHIFT
}
