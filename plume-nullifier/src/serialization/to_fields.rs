use ff::Field;
use halo2::pasta::pallas;

use crate::primitives::point;

/// Values that can be encoded as a sequence of Pallas base field elements.
///
/// The encoding must be injective for a fixed type, since it is hashed to
/// commit to the value.
pub trait ToFields {
    /// Encode `self` as base field elements.
    fn to_fields(&self) -> Vec<pallas::Base>;
}

impl ToFields for pallas::Base {
    fn to_fields(&self) -> Vec<pallas::Base> {
        vec![*self]
    }
}

impl ToFields for pallas::Point {
    fn to_fields(&self) -> Vec<pallas::Base> {
        point::to_fields(self).to_vec()
    }
}

impl ToFields for bool {
    fn to_fields(&self) -> Vec<pallas::Base> {
        vec![if *self {
            pallas::Base::ONE
        } else {
            pallas::Base::ZERO
        }]
    }
}

impl ToFields for u32 {
    fn to_fields(&self) -> Vec<pallas::Base> {
        vec![pallas::Base::from(u64::from(*self))]
    }
}

impl ToFields for u64 {
    fn to_fields(&self) -> Vec<pallas::Base> {
        vec![pallas::Base::from(*self)]
    }
}

impl<T: ToFields + ?Sized> ToFields for &T {
    fn to_fields(&self) -> Vec<pallas::Base> {
        (**self).to_fields()
    }
}

impl<T: ToFields> ToFields for [T] {
    fn to_fields(&self) -> Vec<pallas::Base> {
        self.iter().flat_map(ToFields::to_fields).collect()
    }
}

impl<T: ToFields, const N: usize> ToFields for [T; N] {
    fn to_fields(&self) -> Vec<pallas::Base> {
        self.as_slice().to_fields()
    }
}

impl<T: ToFields> ToFields for Vec<T> {
    fn to_fields(&self) -> Vec<pallas::Base> {
        self.as_slice().to_fields()
    }
}

impl<A: ToFields, B: ToFields> ToFields for (A, B) {
    fn to_fields(&self) -> Vec<pallas::Base> {
        let mut fields = self.0.to_fields();
        fields.extend(self.1.to_fields());
        fields
    }
}

impl<A: ToFields, B: ToFields, C: ToFields> ToFields for (A, B, C) {
    fn to_fields(&self) -> Vec<pallas::Base> {
        let mut fields = self.0.to_fields();
        fields.extend(self.1.to_fields());
        fields.extend(self.2.to_fields());
        fields
    }
}
