//! Common [`plume_test`](crate) types, traits, and functions.

pub use crate::{init, seeded_rng};

pub use color_eyre;
pub use color_eyre::eyre;
pub use eyre::Result;
pub use proptest::prelude::*;
