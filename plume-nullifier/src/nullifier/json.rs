//! The JSON wire format of nullifiers.
//!
//! ```json
//! {
//!   "message": "..",
//!   "publicKey": { "x": "..", "isOdd": false },
//!   "public": { "nullifier": { "x": "..", "y": ".." }, "s": ".." },
//!   "private": {
//!     "c": "..",
//!     "g_r": { "x": "..", "y": ".." },
//!     "h_m_pk_r": { "x": "..", "y": ".." }
//!   }
//! }
//! ```

use halo2::pasta::pallas;

use crate::{keys::PublicKey, serialization::serde_helpers};

use super::Nullifier;

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct NullifierJson {
    #[serde(with = "serde_helpers::Base")]
    message: pallas::Base,
    #[serde(rename = "publicKey")]
    public_key: PublicKey,
    public: PublicPart,
    private: PrivatePart,
}

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct PublicPart {
    #[serde(with = "serde_helpers::Point")]
    nullifier: pallas::Point,
    #[serde(with = "serde_helpers::Scalar")]
    s: pallas::Scalar,
}

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct PrivatePart {
    #[serde(with = "serde_helpers::Base")]
    c: pallas::Base,
    #[serde(with = "serde_helpers::Point")]
    g_r: pallas::Point,
    #[serde(with = "serde_helpers::Point")]
    h_m_pk_r: pallas::Point,
}

impl From<NullifierJson> for Nullifier {
    fn from(json: NullifierJson) -> Self {
        Self {
            message: json.message,
            public_key: json.public_key,
            nullifier: json.public.nullifier,
            s: json.public.s,
            c: json.private.c,
            g_r: json.private.g_r,
            h_m_pk_r: json.private.h_m_pk_r,
        }
    }
}

impl From<Nullifier> for NullifierJson {
    fn from(nullifier: Nullifier) -> Self {
        Self {
            message: nullifier.message,
            public_key: nullifier.public_key,
            public: PublicPart {
                nullifier: nullifier.nullifier,
                s: nullifier.s,
            },
            private: PrivatePart {
                c: nullifier.c,
                g_r: nullifier.g_r,
                h_m_pk_r: nullifier.h_m_pk_r,
            },
        }
    }
}
