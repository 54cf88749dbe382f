//! Sponge adapters over the SHA-3 family.
//!
//! NewHope consumes the Keccak-f[1600] sponge in two modes:
//!
//! | Role                   | Primitive | Function       |
//! |------------------------|-----------|----------------|
//! | Seed expansion for `a` | SHAKE-128 | [`xof_absorb`] |
//! | Shared-key derivation  | SHA3-256  | [`sha3_256`]   |
//!
//! Domain separation (0x1F for SHAKE, 0x06 for SHA3) and the 10*1 padding
//! come from the `sha3` crate. Swapping the separators silently breaks
//! interoperability, so both adapters name their primitive explicitly.

use crate::params::SYMBYTES;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Shake128};

/// SHA3-256(input) → 32 bytes.
#[inline]
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut h = Sha3_256::new();
    Digest::update(&mut h, input);
    h.finalize().into()
}

/// Absorb a 32-byte seed into SHAKE-128 and return a squeezing reader.
///
/// The uniform sampler pulls 168-byte rate blocks from the reader until it
/// has accepted enough coefficients.
pub fn xof_absorb(seed: &[u8; SYMBYTES]) -> impl XofReader {
    let mut h = Shake128::default();
    Update::update(&mut h, seed);
    h.finalize_xof()
}
