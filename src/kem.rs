//! The three protocol operations — [`keygen`], [`respond`], [`finalize`] —
//! and the fixed-layout message codecs.
//!
//! Alice: `keygen` → send [`PublicMessage`] → `finalize` Bob's reply.
//! Bob: `respond` to a public message, obtaining his reply and the shared
//! secret in one step. Both sides end with SHA3-256 of the same reconciled
//! 32-byte raw key.
//!
//! Entropy is drawn through [`rand_core::TryCryptoRng`]; a failing source
//! surfaces as [`Error::Entropy`] and no partial state escapes. Given the
//! same random byte stream, every operation is deterministic
//! byte-for-byte.

use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash;
use crate::math::pack;
use crate::math::poly::Poly;
use crate::params::{NOISE_BYTES, POLY_BYTES, SENDA_BYTES, SENDB_BYTES, SYMBYTES};
use crate::rec;
use crate::types::{PublicMessage, ResponseMessage, SecretKey, SharedSecret};

// ---------------------------------------------------------------------------
// Message codecs
// ---------------------------------------------------------------------------

fn encode_a(pk: &Poly, seed: &[u8; SYMBYTES]) -> PublicMessage {
    let mut bytes = [0u8; SENDA_BYTES];
    pk.tobytes(&mut bytes[..POLY_BYTES]);
    bytes[POLY_BYTES..].copy_from_slice(seed);
    PublicMessage::from_bytes(bytes)
}

fn decode_a(msg: &PublicMessage) -> (Poly, [u8; SYMBYTES]) {
    let bytes = msg.as_bytes();
    let pk = Poly::frombytes(&bytes[..POLY_BYTES]);
    let seed = bytes[POLY_BYTES..].try_into().unwrap();
    (pk, seed)
}

fn encode_b(bp: &Poly, c: &Poly) -> ResponseMessage {
    let mut bytes = [0u8; SENDB_BYTES];
    bp.tobytes(&mut bytes[..POLY_BYTES]);
    pack::rec_tobytes(&mut bytes[POLY_BYTES..], &c.coeffs);
    ResponseMessage::from_bytes(bytes)
}

fn decode_b(msg: &ResponseMessage) -> (Poly, Poly) {
    let bytes = msg.as_bytes();
    let bp = Poly::frombytes(&bytes[..POLY_BYTES]);
    let mut c = Poly::zero();
    pack::rec_frombytes(&mut c.coeffs, &bytes[POLY_BYTES..]);
    (bp, c)
}

// ---------------------------------------------------------------------------
// Protocol operations
// ---------------------------------------------------------------------------

/// Alice: generate an ephemeral keypair.
///
/// Draws a public seed and two noise polynomials, publishes
/// `pk = a·s + e` (NTT domain) together with the seed, and keeps the
/// secret `s` inside [`SecretKey`], which wipes it on drop.
pub fn keygen<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<(PublicMessage, SecretKey)> {
    let mut seed = [0u8; SYMBYTES];
    rng.try_fill_bytes(&mut seed).map_err(|_| Error::Entropy)?;

    let a = Poly::uniform(&seed);

    let mut noise = Zeroizing::new([0u8; NOISE_BYTES]);
    rng.try_fill_bytes(&mut *noise).map_err(|_| Error::Entropy)?;
    let mut s = Poly::sample_noise(&noise);
    s.ntt();

    rng.try_fill_bytes(&mut *noise).map_err(|_| Error::Entropy)?;
    let mut e = Poly::sample_noise(&noise);
    e.ntt();

    let mut r = Poly::zero();
    r.pointwise_montgomery(&s, &a);
    let mut pk = Poly::zero();
    pk.add(&e, &r);

    Ok((encode_a(&pk, &seed), SecretKey::new(s)))
}

/// Bob: answer a public message, producing the response and the shared
/// secret.
///
/// Re-derives `a` from the transmitted seed, computes
/// `b' = a·s' + e'` and the noisy approximation `v ≈ pk·s'`, then commits
/// to reconciliation hints for `v` and hashes the reconciled raw key.
pub fn respond<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    received: &PublicMessage,
) -> Result<(ResponseMessage, SharedSecret)> {
    let (pka, seed) = decode_a(received);
    let a = Poly::uniform(&seed);

    let mut noise = Zeroizing::new([0u8; NOISE_BYTES]);
    rng.try_fill_bytes(&mut *noise).map_err(|_| Error::Entropy)?;
    let mut sp = Poly::sample_noise(&noise);
    sp.ntt();

    rng.try_fill_bytes(&mut *noise).map_err(|_| Error::Entropy)?;
    let mut ep = Poly::sample_noise(&noise);
    ep.ntt();

    let mut t = Poly::zero();
    t.pointwise_montgomery(&a, &sp);
    let mut bp = Poly::zero();
    bp.add(&t, &ep);

    let mut v = Poly::zero();
    v.pointwise_montgomery(&pka, &sp);
    v.invntt();

    // e'' is added in the normal domain, so it is never transformed.
    rng.try_fill_bytes(&mut *noise).map_err(|_| Error::Entropy)?;
    let epp = Poly::sample_noise(&noise);
    v.add_assign(&epp);

    let mut hrand = [0u8; SYMBYTES];
    rng.try_fill_bytes(&mut hrand).map_err(|_| Error::Entropy)?;
    let mut c = Poly::zero();
    rec::helprec(&mut c, &v, &hrand);

    let msg = encode_b(&bp, &c);

    let mut raw = Zeroizing::new([0u8; SYMBYTES]);
    rec::rec(&mut raw, &v, &c);
    let shared = SharedSecret::from_bytes(hash::sha3_256(&*raw));

    Ok((msg, shared))
}

/// Alice: consume the secret key and Bob's response, producing the shared
/// secret.
///
/// Infallible on well-formed input; the secret key is dropped — and
/// therefore zeroized — before this returns.
pub fn finalize(sk: SecretKey, received: &ResponseMessage) -> SharedSecret {
    let (bp, c) = decode_b(received);

    let mut v = Poly::zero();
    v.pointwise_montgomery(sk.poly(), &bp);
    v.invntt();

    let mut raw = Zeroizing::new([0u8; SYMBYTES]);
    rec::rec(&mut raw, &v, &c);
    SharedSecret::from_bytes(hash::sha3_256(&*raw))
}
