//! Polynomial type and coefficient-level operations.
//!
//! `Poly` wraps `[u16; N]` (N = 1024) and provides arithmetic, the NTT
//! transforms, serialisation, and sampling. Whether an instance currently
//! sits in the NTT domain is tracked by the caller, as the protocol always
//! knows.

use super::{ntt, pack, reduce, sample};
use crate::hash;
use crate::params::{N, NOISE_BYTES, SYMBYTES};
use zeroize::Zeroize;

/// Polynomial in Rq = Zq[x]/(x^1024 + 1), one unsigned 14-bit
/// coefficient per slot with transient 16-bit headroom.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Poly {
    pub(crate) coeffs: [u16; N],
}

impl Poly {
    /// The zero polynomial.
    #[inline]
    pub const fn zero() -> Self {
        Poly { coeffs: [0u16; N] }
    }

    // ---- Sampling ---------------------------------------------------------

    /// Derive the public polynomial `a` from a 32-byte seed: SHAKE-128
    /// expansion with rejection to [0, q).
    pub fn uniform(seed: &[u8; SYMBYTES]) -> Self {
        let mut xof = hash::xof_absorb(seed);
        let mut p = Poly::zero();
        sample::rej_uniform(&mut p.coeffs, &mut xof);
        p
    }

    /// Sample a noise polynomial from 4096 uniform random bytes (centered
    /// binomial, k = 16).
    pub fn sample_noise(buf: &[u8; NOISE_BYTES]) -> Self {
        let mut p = Poly::zero();
        sample::cbd(&mut p.coeffs, buf);
        p
    }

    // ---- Arithmetic -------------------------------------------------------

    /// Coefficient-wise sum with Barrett reduction: `self = a + b`.
    #[inline]
    pub fn add(&mut self, a: &Poly, b: &Poly) {
        for i in 0..N {
            self.coeffs[i] = reduce::barrett_reduce(a.coeffs[i] + b.coeffs[i]);
        }
    }

    /// In-place sum with Barrett reduction: `self += other`.
    #[inline]
    pub fn add_assign(&mut self, other: &Poly) {
        for i in 0..N {
            self.coeffs[i] = reduce::barrett_reduce(self.coeffs[i] + other.coeffs[i]);
        }
    }

    /// Pointwise product in the NTT domain: `self = a · b`.
    #[inline]
    pub fn pointwise_montgomery(&mut self, a: &Poly, b: &Poly) {
        ntt::pointwise(&mut self.coeffs, &a.coeffs, &b.coeffs);
    }

    // ---- NTT / inverse NTT ------------------------------------------------

    /// Forward negacyclic NTT (in-place).
    #[inline]
    pub fn ntt(&mut self) {
        ntt::forward(&mut self.coeffs);
    }

    /// Inverse negacyclic NTT (in-place), normalisation included.
    #[inline]
    pub fn invntt(&mut self) {
        ntt::inverse(&mut self.coeffs);
    }

    // ---- Serialisation ----------------------------------------------------

    /// Serialize to 1792 bytes (14-bit encoding), reducing on the way out.
    pub fn tobytes(&self, r: &mut [u8]) {
        pack::poly_tobytes(r, &self.coeffs);
    }

    /// Deserialize from 1792 bytes; coefficients land in [0, 2^14).
    pub fn frombytes(a: &[u8]) -> Self {
        let mut p = Poly::zero();
        pack::poly_frombytes(&mut p.coeffs, a);
        p
    }
}

impl Default for Poly {
    #[inline]
    fn default() -> Self {
        Poly::zero()
    }
}

impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl core::fmt::Debug for Poly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Poly")
            .field("coeffs[..4]", &&self.coeffs[..4])
            .finish_non_exhaustive()
    }
}
