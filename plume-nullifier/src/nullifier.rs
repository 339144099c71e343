//! Nullifiers and their discrete-log equality proofs.
//!
//! For a message `m` and a key pair `(sk, pk = [sk]G)`, let
//! `H = hash_to_group([m, pk])`. The nullifier is `[sk]H`: it is unique to the
//! pair, but reveals nothing about `sk` or `pk` to anyone who cannot guess both.
//!
//! The proof shows the same `sk` links `G -> pk` and `H -> nullifier`:
//!
//! ```text
//! g_r      = [r]G
//! h_m_pk_r = [r]H
//! c        = hash(G, pk, H, nullifier, g_r, h_m_pk_r)
//! s        = r + sk * c
//! ```
//!
//! Verifiers only see `(m, pk, nullifier, s, c)` as inputs that matter, and
//! recompute `g_r = [s]G - [c]pk` and `h_m_pk_r = [s]H - [c]nullifier`. The
//! challenge `c` is multiplied as a [`ShiftedScalar`], on both sides.

use ff::Field;
use group::Group;
use halo2::pasta::pallas;
use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::{
    error::{KeyError, NullifierError},
    keys::{PrivateKey, PublicKey},
    merkle_map::MerkleMapWitness,
    primitives::{
        point,
        poseidon::{self, HashedGroup},
        scalar::{scale_shifted, ShiftedScalar},
    },
    serialization::SerializationError,
};

mod json;


/// The Merkle map value of a nullifier key that was never used.
pub const UNUSED: pallas::Base = <pallas::Base as Field>::ZERO;

/// The Merkle map value of a used nullifier key.
pub const USED: pallas::Base = <pallas::Base as Field>::ONE;

/// A nullifier of a message, with the proof that it was derived from the
/// secret key of `public_key`.
///
/// Values are immutable: they are created by [`Nullifier::create`], or parsed
/// with [`Nullifier::from_json`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "json::NullifierJson", into = "json::NullifierJson")]
pub struct Nullifier {
    pub(crate) message: pallas::Base,
    pub(crate) public_key: PublicKey,
    pub(crate) nullifier: pallas::Point,
    pub(crate) s: pallas::Scalar,
    pub(crate) c: pallas::Base,
    pub(crate) g_r: pallas::Point,
    pub(crate) h_m_pk_r: pallas::Point,
}

impl Nullifier {
    /// Create the nullifier of `message` under `sk`, with a fresh proof.
    ///
    /// The nullifier point, and so [`Nullifier::key`], is the same for every
    /// call with the same inputs. The proof uses a new random nonce each time.
    pub fn create<R: RngCore + CryptoRng>(
        message: pallas::Base,
        sk: &PrivateKey,
        mut csprng: R,
    ) -> Result<Self, NullifierError> {
        let public_key = sk.public_key();
        let hashed = hash_message(message, &public_key)?;
        let h_m_pk = hashed.to_point()?;

        let nullifier = h_m_pk * sk.scalar();

        let r = pallas::Scalar::random(&mut csprng);
        let g_r = pallas::Point::generator() * r;
        let h_m_pk_r = h_m_pk * r;

        let c = challenge(&public_key, &hashed, &nullifier, &g_r, &h_m_pk_r);
        let s = r + sk.scalar() * ShiftedScalar::from_field(&c).unshift();

        tracing::debug!(?public_key, "created nullifier");

        Ok(Self {
            message,
            public_key,
            nullifier,
            s,
            c,
            g_r,
            h_m_pk_r,
        })
    }

    /// Parse a nullifier from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this nullifier in its JSON wire format.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the proof binds the nullifier to the message and the public key.
    ///
    /// Only `message`, `public_key`, `nullifier`, `s` and `c` are used. `g_r`
    /// and `h_m_pk_r` are recomputed.
    #[instrument(level = "debug", skip(self), fields(public_key = ?self.public_key))]
    pub fn verify(&self) -> Result<(), NullifierError> {
        let pk = self.public_key.to_point()?;
        let hashed = hash_message(self.message, &self.public_key)?;
        let h_m_pk = hashed.to_point()?;

        let c = ShiftedScalar::from_field(&self.c);

        let g_r = pallas::Point::generator() * self.s - scale_shifted(pk, &c);
        let h_m_pk_s_div_nullifier_s = h_m_pk * self.s - scale_shifted(self.nullifier, &c);

        tracing::trace!(?h_m_pk_s_div_nullifier_s);

        let recomputed = challenge(
            &self.public_key,
            &hashed,
            &self.nullifier,
            &g_r,
            &h_m_pk_s_div_nullifier_s,
        );

        if recomputed == self.c {
            Ok(())
        } else {
            Err(NullifierError::Mismatch)
        }
    }

    /// The Merkle map key for this nullifier: `hash(nullifier.x, nullifier.y)`.
    ///
    /// Nullifiers of the same message and key have the same key, whatever
    /// their proofs.
    pub fn key(&self) -> pallas::Base {
        poseidon::hash(&point::to_fields(&self.nullifier))
    }

    /// Does the map with `root` hold [`UNUSED`] at this nullifier's key?
    ///
    /// `witness` must be the path for [`Nullifier::key`]. A path for any other
    /// key is never accepted.
    pub fn is_unused(&self, witness: &MerkleMapWitness, root: pallas::Base) -> bool {
        self.assert_unused(witness, root).is_ok()
    }

    /// Like [`Nullifier::is_unused`], but reports why the check failed.
    pub fn assert_unused(
        &self,
        witness: &MerkleMapWitness,
        root: pallas::Base,
    ) -> Result<(), NullifierError> {
        let (implied_root, key) = witness.compute_root_and_key(UNUSED);

        if key != self.key() {
            return Err(NullifierError::WitnessKeyMismatch);
        }
        if implied_root != root {
            return Err(NullifierError::RootMismatch);
        }

        Ok(())
    }

    /// The root of the map after marking this nullifier [`USED`].
    ///
    /// Does not check that `witness` is for this nullifier's key, or that the
    /// nullifier was unused.
    pub fn set_used(&self, witness: &MerkleMapWitness) -> pallas::Base {
        witness.compute_root_and_key(USED).0
    }

    /// The decompressed public key of the claimant.
    pub fn get_public_key(&self) -> Result<pallas::Point, KeyError> {
        self.public_key.to_point()
    }

    /// The nullified message.
    pub fn message(&self) -> pallas::Base {
        self.message
    }

    /// The compressed public key of the claimant.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// The nullifier point, `[sk]H`.
    pub fn nullifier(&self) -> pallas::Point {
        self.nullifier
    }

    /// The proof response.
    pub fn s(&self) -> pallas::Scalar {
        self.s
    }

    /// The proof challenge.
    pub fn c(&self) -> pallas::Base {
        self.c
    }
}

/// `H = hash_to_group([message, isOdd, x])`.
fn hash_message(
    message: pallas::Base,
    public_key: &PublicKey,
) -> Result<HashedGroup, NullifierError> {
    let [parity, x] = public_key.hash_input();

    poseidon::hash_to_group(&[message, parity, x])
}

/// The Fiat-Shamir challenge over the whole proof transcript.
fn challenge(
    public_key: &PublicKey,
    hashed: &HashedGroup,
    nullifier: &pallas::Point,
    g_r: &pallas::Point,
    h_m_pk_r: &pallas::Point,
) -> pallas::Base {
    let mut transcript = Vec::with_capacity(12);

    transcript.extend(point::to_fields(&pallas::Point::generator()));
    transcript.extend(public_key.hash_input());
    transcript.extend([hashed.x, hashed.y.x0]);
    transcript.extend(point::to_fields(nullifier));
    transcript.extend(point::to_fields(g_r));
    transcript.extend(point::to_fields(h_m_pk_r));

    poseidon::hash(&transcript)
}
