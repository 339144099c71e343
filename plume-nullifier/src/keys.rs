//! Nullifier key types.
//!
//! A [`PrivateKey`] is a Pallas scalar `sk`, and its [`PublicKey`] is the
//! compressed point `[sk]G`: the affine x-coordinate and the parity of y.

use std::fmt;

use ff::{Field, PrimeField};
use group::{Group, GroupEncoding};
use halo2::pasta::pallas;
use rand_core::{CryptoRng, RngCore};

use crate::{
    error::KeyError,
    primitives::point,
    serialization::{serde_helpers, ToFields},
};

/// A nullifier secret key.
#[derive(Copy, Clone)]
pub struct PrivateKey(pub(crate) pallas::Scalar);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"<redacted>").finish()
    }
}

impl PrivateKey {
    /// Generate a new `PrivateKey`.
    pub fn new<R: RngCore + CryptoRng>(mut csprng: R) -> Self {
        Self(pallas::Scalar::random(&mut csprng))
    }

    /// Derive the public key `[sk]G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(&(pallas::Point::generator() * self.0))
    }

    /// The secret scalar.
    pub(crate) fn scalar(&self) -> pallas::Scalar {
        self.0
    }
}

impl TryFrom<[u8; 32]> for PrivateKey {
    type Error = KeyError;

    fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
        let possible_scalar: Option<pallas::Scalar> = pallas::Scalar::from_repr(bytes).into();

        possible_scalar
            .map(Self)
            .ok_or(KeyError::MalformedPrivateKey)
    }
}

/// A compressed nullifier public key.
///
/// The type does not check the encoding decompresses; use
/// [`PublicKey::to_point`] before trusting it.
#[derive(Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicKey {
    /// The affine x-coordinate.
    #[serde(with = "serde_helpers::Base")]
    pub x: pallas::Base,
    /// Whether the affine y-coordinate is odd.
    pub is_odd: bool,
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("x", &hex::encode(self.x.to_repr()))
            .field("is_odd", &self.is_odd)
            .finish()
    }
}

impl PublicKey {
    /// Compress a point.
    pub fn from_point(point: &pallas::Point) -> Self {
        let [x, y] = point::to_fields(point);

        Self {
            x,
            is_odd: y.is_odd().into(),
        }
    }

    /// Decompress this key into a curve point.
    ///
    /// Fails if `x` is not the x-coordinate of a curve point, or if the key
    /// is the identity.
    pub fn to_point(&self) -> Result<pallas::Point, KeyError> {
        let mut bytes = self.x.to_repr();
        bytes[31] |= u8::from(self.is_odd) << 7;

        let possible_point: Option<pallas::Affine> = pallas::Affine::from_bytes(&bytes).into();
        let point = possible_point
            .map(pallas::Point::from)
            .ok_or(KeyError::MalformedPublicKey)?;

        if bool::from(point.is_identity()) {
            return Err(KeyError::MalformedPublicKey);
        }

        Ok(point)
    }

    /// The parity bit as a base field element.
    pub fn parity(&self) -> pallas::Base {
        if self.is_odd {
            pallas::Base::ONE
        } else {
            pallas::Base::ZERO
        }
    }

    /// The `[isOdd, x]` encoding hashed into nullifier transcripts.
    pub fn hash_input(&self) -> [pallas::Base; 2] {
        [self.parity(), self.x]
    }
}

impl ToFields for PublicKey {
    /// `[x, isOdd]`.
    fn to_fields(&self) -> Vec<pallas::Base> {
        vec![self.x, self.parity()]
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(sk: &PrivateKey) -> PublicKey {
        sk.public_key()
    }
}
