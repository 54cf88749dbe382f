//! Negacyclic length-1024 NTT with Gentleman–Sande butterflies.
//!
//! - [`forward`]: twist by the bit-reversed psi powers, then ten butterfly
//!   levels (bit-reversed order in, natural order out).
//! - [`inverse`]: bit-reverse, butterflies over the inverse twiddles, then
//!   the inverse twist (which also absorbs the 1/n normalisation).
//! - [`pointwise`]: coefficient-wise product in the evaluation domain.
//!
//! Coefficients are reduced lazily: even butterfly levels keep raw 16-bit
//! sums, odd levels Barrett-reduce them. The high lane of every butterfly
//! stays below 3q, which keeps the `t + 3q − hi` operand non-negative.

use super::reduce::{barrett_reduce, montgomery_reduce};
use super::tables::{
    BITREV_TABLE, OMEGAS_INV_MONTGOMERY, OMEGAS_MONTGOMERY, PSIS_BITREV_MONTGOMERY,
    PSIS_INV_MONTGOMERY,
};
use crate::params::{N, Q};

/// R^2 mod q; multiplying by it inside a Montgomery reduction lifts a
/// plain coefficient into Montgomery form.
pub const MONT_SQUARED: u32 = 3186;

/// `r[i] ← Mont(r[i] · factors[i])`; the factors must be in Montgomery
/// form.
pub fn mul_coefficients(r: &mut [u16; N], factors: &[u16; N]) {
    for (c, &f) in r.iter_mut().zip(factors.iter()) {
        *c = montgomery_reduce(u32::from(*c) * u32::from(f));
    }
}

/// Ten levels of Gentleman–Sande butterflies, bit-reversed order to
/// natural order, twiddles consumed in table order.
fn butterflies(a: &mut [u16; N], omegas: &[u16; N / 2]) {
    let q3 = 3 * u32::from(Q);
    let mut distance = 1;
    for _ in 0..5 {
        // Even level: the low lane keeps the unreduced sum.
        for start in 0..distance {
            let mut jtwiddle = 0;
            let mut j = start;
            while j < N - 1 {
                let w = u32::from(omegas[jtwiddle]);
                jtwiddle += 1;
                let t = a[j];
                a[j] = t + a[j + distance];
                a[j + distance] =
                    montgomery_reduce(w * (u32::from(t) + q3 - u32::from(a[j + distance])));
                j += 2 * distance;
            }
        }
        distance <<= 1;

        // Odd level: same pairing, Barrett-reduced sums.
        for start in 0..distance {
            let mut jtwiddle = 0;
            let mut j = start;
            while j < N - 1 {
                let w = u32::from(omegas[jtwiddle]);
                jtwiddle += 1;
                let t = a[j];
                a[j] = barrett_reduce(t + a[j + distance]);
                a[j + distance] =
                    montgomery_reduce(w * (u32::from(t) + q3 - u32::from(a[j + distance])));
                j += 2 * distance;
            }
        }
        distance <<= 1;
    }
}

/// Permute coefficients by the 10-bit bit-reversal table.
pub fn bitrev_vector(r: &mut [u16; N]) {
    for i in 0..N {
        let j = usize::from(BITREV_TABLE[i]);
        if i < j {
            r.swap(i, j);
        }
    }
}

/// Forward negacyclic NTT (in-place), natural order in, natural order out.
pub fn forward(r: &mut [u16; N]) {
    mul_coefficients(r, &PSIS_BITREV_MONTGOMERY);
    butterflies(r, &OMEGAS_MONTGOMERY);
}

/// Inverse negacyclic NTT (in-place). `inverse(forward(p)) ≡ p (mod q)`
/// holds exactly; the output may sit in [0, 2q).
pub fn inverse(r: &mut [u16; N]) {
    bitrev_vector(r);
    butterflies(r, &OMEGAS_INV_MONTGOMERY);
    mul_coefficients(r, &PSIS_INV_MONTGOMERY);
}

/// Pointwise product in the evaluation domain:
/// `r[i] = Mont(a[i] · Mont(3186 · b[i]))`.
///
/// The inner reduction lifts `b` into Montgomery form on the fly, so the
/// result carries no stray R factor.
pub fn pointwise(r: &mut [u16; N], a: &[u16; N], b: &[u16; N]) {
    for i in 0..N {
        let t = montgomery_reduce(MONT_SQUARED * u32::from(b[i]));
        r[i] = montgomery_reduce(u32::from(a[i]) * u32::from(t));
    }
}
