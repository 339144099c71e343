//! Field encodings and wire formats.
//!
//! This module contains the `ToFields` trait, the encoding of values as
//! sequences of Pallas base field elements that is hashed into Merkle leaves
//! and proof transcripts, and the `serde` helpers that give field elements,
//! scalars and points their hexadecimal JSON representation.

mod error;
mod to_fields;

pub mod serde_helpers;

pub use error::SerializationError;
pub use to_fields::ToFields;
