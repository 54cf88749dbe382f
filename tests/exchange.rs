//! Protocol-level exchanges driven by byte-deterministic entropy streams.
//!
//! Three fixture streams (all-zero, cycling counter, SHAKE-128 of the
//! empty string) pin down the regression behavior: with a fixed stream the
//! whole transcript must be reproducible byte-for-byte, and the two
//! parties must always agree on the shared secret.

use newhope_rs::{finalize, keygen, respond, PublicMessage, ResponseMessage, SENDA_BYTES, SENDB_BYTES};
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};
use sha3::digest::{ExtendableOutput, XofReader};
use sha3::Shake128;

/// RNG that repeats a fixed byte pattern forever.
struct PatternRng {
    pattern: Vec<u8>,
    pos: usize,
}

impl PatternRng {
    fn new(pattern: &[u8]) -> Self {
        assert!(!pattern.is_empty());
        Self {
            pattern: pattern.to_vec(),
            pos: 0,
        }
    }
}

impl RngCore for PatternRng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill_bytes(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill_bytes(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for d in dst.iter_mut() {
            *d = self.pattern[self.pos % self.pattern.len()];
            self.pos += 1;
        }
    }
}

impl CryptoRng for PatternRng {}

/// RNG squeezing the SHAKE-128 extendable output of the empty string.
struct ShakeStreamRng(sha3::Shake128Reader);

impl ShakeStreamRng {
    fn new() -> Self {
        Self(Shake128::default().finalize_xof())
    }
}

impl RngCore for ShakeStreamRng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill_bytes(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill_bytes(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.read(dst);
    }
}

impl CryptoRng for ShakeStreamRng {}

/// Run one full exchange, returning the complete transcript.
fn exchange<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> ([u8; SENDA_BYTES], [u8; SENDB_BYTES], [u8; 32], [u8; 32]) {
    let (public_msg, sk) = keygen(rng).expect("keygen");
    let (response, key_b) = respond(rng, &public_msg).expect("respond");
    let key_a = finalize(sk, &response);

    (
        public_msg.into_bytes(),
        response.into_bytes(),
        key_a.as_bytes().try_into().unwrap(),
        key_b.as_bytes().try_into().unwrap(),
    )
}

fn assert_reproducible<R: RngCore + CryptoRng>(mut make_rng: impl FnMut() -> R) {
    let (pm1, rm1, ka1, kb1) = exchange(&mut make_rng());
    let (pm2, rm2, ka2, kb2) = exchange(&mut make_rng());

    // Both parties agree.
    assert_eq!(ka1, kb1, "shared secrets disagree");

    // The whole transcript is a function of the entropy stream.
    assert_eq!(pm1, pm2, "public message not reproducible");
    assert_eq!(rm1, rm2, "response message not reproducible");
    assert_eq!(ka1, ka2, "Alice's key not reproducible");
    assert_eq!(kb1, kb2, "Bob's key not reproducible");
}

#[test]
fn kat_stream_all_zero() {
    assert_reproducible(|| PatternRng::new(&[0x00]));
}

#[test]
fn kat_stream_cycling_counter() {
    let pattern: Vec<u8> = (1..=0xff).collect();
    assert_reproducible(move || PatternRng::new(&pattern));
}

#[test]
fn kat_stream_shake_of_empty() {
    assert_reproducible(ShakeStreamRng::new);
}

#[test]
fn kat_streams_produce_distinct_transcripts() {
    let (pm_zero, ..) = exchange(&mut PatternRng::new(&[0x00]));
    let pattern: Vec<u8> = (1..=0xff).collect();
    let (pm_counter, ..) = exchange(&mut PatternRng::new(&pattern));
    let (pm_shake, ..) = exchange(&mut ShakeStreamRng::new());

    assert_ne!(pm_zero, pm_counter);
    assert_ne!(pm_zero, pm_shake);
    assert_ne!(pm_counter, pm_shake);
}

#[test]
fn agreement_over_seeded_trials() {
    for trial in 0..200u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(trial);
        let (_, _, key_a, key_b) = exchange(&mut rng);
        assert_eq!(key_a, key_b, "keys disagree in trial {trial}");
    }
}

#[test]
fn transcripts_survive_reframing() {
    // Serialize each message to a plain slice and re-admit it through the
    // framing layer, as a transport would.
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let (public_msg, sk) = keygen(&mut rng).expect("keygen");

    let reframed = PublicMessage::try_from(public_msg.as_bytes()).expect("reframe public");
    let (response, key_b) = respond(&mut rng, &reframed).expect("respond");

    let reframed = ResponseMessage::try_from(response.as_bytes()).expect("reframe response");
    let key_a = finalize(sk, &reframed);

    assert_eq!(key_a.as_bytes(), key_b.as_bytes());
}

#[test]
fn framing_rejects_truncated_messages() {
    let mut rng = ChaCha20Rng::seed_from_u64(78);
    let (public_msg, _) = keygen(&mut rng).expect("keygen");

    let bytes = public_msg.as_bytes();
    assert!(PublicMessage::try_from(&bytes[..bytes.len() - 1]).is_err());
    assert!(ResponseMessage::try_from(bytes).is_err());
}
