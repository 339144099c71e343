//! Field encodings of Pallas group elements.

use ff::Field;
use group::Group;
use halo2::{
    arithmetic::{Coordinates, CurveAffine},
    pasta::pallas,
};

use crate::serialization::SerializationError;

/// Encode a point as its affine `(x, y)` coordinates.
///
/// The identity has no affine coordinates, and encodes as `(0, 0)`, which is
/// not on the curve.
pub fn to_fields(point: &pallas::Point) -> [pallas::Base; 2] {
    let option: Option<Coordinates<pallas::Affine>> =
        pallas::Affine::from(point).coordinates().into();

    match option {
        // If Some, it's not the identity.
        Some(coordinates) => [*coordinates.x(), *coordinates.y()],
        _ => [pallas::Base::ZERO, pallas::Base::ZERO],
    }
}

/// Decode a point from its affine `(x, y)` coordinates.
///
/// `(0, 0)` decodes to the identity. Any other pair must be on the curve.
pub fn from_fields([x, y]: [pallas::Base; 2]) -> Result<pallas::Point, SerializationError> {
    if bool::from(x.is_zero() & y.is_zero()) {
        return Ok(pallas::Point::identity());
    }

    let possible_point: Option<pallas::Affine> = pallas::Affine::from_xy(x, y).into();

    possible_point
        .map(pallas::Point::from)
        .ok_or(SerializationError::Parse(
            "coordinates are not a point on the Pallas curve",
        ))
}
