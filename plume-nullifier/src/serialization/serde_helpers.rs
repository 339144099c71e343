//! Hexadecimal `serde` representations of Pallas types.
//!
//! Use these with `#[serde(with = "serde_helpers::Base")]` and friends.
//! Field elements and scalars are the lowercase hex of their canonical 32-byte
//! little-endian encoding. Points are `{ "x": .., "y": .. }` records of their
//! affine coordinates, with the identity as `(0, 0)`.

use ff::PrimeField;
use halo2::pasta::pallas;
use serde::{de::Error as _, Deserializer, Serializer};

use crate::primitives::point;

/// `serde` helper for `pallas::Base`.
pub struct Base;

impl Base {
    /// Serialize a base field element as hex.
    pub fn serialize<S: Serializer>(base: &pallas::Base, serializer: S) -> Result<S::Ok, S::Error> {
        hex::serde::serialize(base.to_repr(), serializer)
    }

    /// Deserialize a canonical base field element from hex.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<pallas::Base, D::Error> {
        let bytes: [u8; 32] = hex::serde::deserialize(deserializer)?;
        let possible_base: Option<pallas::Base> = pallas::Base::from_repr(bytes).into();

        possible_base.ok_or_else(|| D::Error::custom("invalid pallas::Base encoding"))
    }
}

/// `serde` helper for `pallas::Scalar`.
pub struct Scalar;

impl Scalar {
    /// Serialize a scalar as hex.
    pub fn serialize<S: Serializer>(
        scalar: &pallas::Scalar,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        hex::serde::serialize(scalar.to_repr(), serializer)
    }

    /// Deserialize a canonical scalar from hex.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<pallas::Scalar, D::Error> {
        let bytes: [u8; 32] = hex::serde::deserialize(deserializer)?;
        let possible_scalar: Option<pallas::Scalar> = pallas::Scalar::from_repr(bytes).into();

        possible_scalar.ok_or_else(|| D::Error::custom("invalid pallas::Scalar encoding"))
    }
}

#[derive(Deserialize, Serialize)]
struct Coordinates {
    #[serde(with = "Base")]
    x: pallas::Base,
    #[serde(with = "Base")]
    y: pallas::Base,
}

/// `serde` helper for `pallas::Point`.
pub struct Point;

impl Point {
    /// Serialize a point as its affine coordinates.
    pub fn serialize<S: Serializer>(point: &pallas::Point, serializer: S) -> Result<S::Ok, S::Error> {
        let [x, y] = point::to_fields(point);

        serde::Serialize::serialize(&Coordinates { x, y }, serializer)
    }

    /// Deserialize a point from affine coordinates, checking it is on the curve.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<pallas::Point, D::Error> {
        let Coordinates { x, y } = serde::Deserialize::deserialize(deserializer)?;

        point::from_fields([x, y]).map_err(D::Error::custom)
    }
}
