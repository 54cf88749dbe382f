//! D4 lattice reconciliation.
//!
//! Bob derives 2-bit hints ([`helprec`]) locating his noisy polynomial
//! relative to the lattice `{x ∈ Z^4 : Σx even}`; both parties then decode
//! ([`rec`]) the same 256-bit raw key from approximately-equal copies of
//! the polynomial. Each output bit comes from one 4-coefficient group
//! (indices i, i+256, i+512, i+768).
//!
//! Every select and rounding here is arithmetic on the sign bit; there are
//! no data-dependent branches.

use crate::math::poly::Poly;
use crate::params::{Q, SYMBYTES};

const QI: i32 = Q as i32;

/// |v| without branching.
#[inline]
fn ct_abs(v: i32) -> i32 {
    let mask = v >> 31;
    (v ^ mask) - mask
}

/// Round x to the nearest multiple of 2q, both for x and for x − q.
///
/// Returns `(round(x/2q), round((x−q)/2q), |x − 2q·round(x/2q)|)`. The
/// quotient ⌊x/q⌋ comes from the 2730 ≈ 2^25/q approximation with a
/// sign-bit correction.
#[inline]
fn f(x: i32) -> (i32, i32, i32) {
    // t = ⌊x / q⌋
    let mut t = (x * 2730) >> 25;
    t -= (12288 - (x - t * 12289)) >> 31;

    // v0 = round(t / 2) = round(x / 2q)
    let r = t & 1;
    let v0 = (t >> 1) + r;

    let t = t - 1;
    let r = t & 1;
    let v1 = (t >> 1) + r;

    (v0, v1, ct_abs(x - v0 * 2 * QI))
}

/// Distance from x to the nearest multiple of 8q.
#[inline]
fn g(x: i32) -> i32 {
    // t = ⌊x / 4q⌋
    let mut t = (x * 2730) >> 27;
    t -= (49155 - (x - t * 49156)) >> 31;

    // t = round(x / 8q)
    let c = t & 1;
    let t = (t >> 1) + c;

    ct_abs(t * 8 * QI - x)
}

/// Decode one key bit from four scaled coordinates: 1 when the point lies
/// closer to the odd coset of D4 than to the even one.
#[inline]
fn ld_decode(xi: [i32; 4]) -> u8 {
    let t = g(xi[0]) + g(xi[1]) + g(xi[2]) + g(xi[3]) - 8 * QI;
    ((t >> 31) & 1) as u8
}

/// HelpRec: derive the 2-bit hint polynomial for `v` from 32 bytes of
/// fresh randomness (one dithering bit per coefficient group).
///
/// The dithering bit randomises which of the two candidate lattice points
/// wins in the balanced case, which is what makes the decoded key bits
/// uniform even though `v` is not.
pub fn helprec(c: &mut Poly, v: &Poly, rand: &[u8; SYMBYTES]) {
    for i in 0..256 {
        let rbit = i32::from((rand[i >> 3] >> (i & 7)) & 1);

        let mut v0 = [0i32; 4];
        let mut v1 = [0i32; 4];
        let mut k = 0i32;
        for j in 0..4 {
            let (lo, hi, dist) = f(8 * i32::from(v.coeffs[256 * j + i]) + 4 * rbit);
            v0[j] = lo;
            v1[j] = hi;
            k += dist;
        }

        // All-ones when the second rounding is closer in l1 norm.
        let k = (2 * QI - 1 - k) >> 31;

        let vt: [i32; 4] = core::array::from_fn(|j| (!k & v0[j]) ^ (k & v1[j]));

        c.coeffs[i] = ((vt[0] - vt[3]) & 3) as u16;
        c.coeffs[256 + i] = ((vt[1] - vt[3]) & 3) as u16;
        c.coeffs[512 + i] = ((vt[2] - vt[3]) & 3) as u16;
        c.coeffs[768 + i] = ((-k + 2 * vt[3]) & 3) as u16;
    }
}

/// Rec: decode the 32-byte raw key from `v` and the hint polynomial `c`.
///
/// Both parties run this; when their copies of `v` differ by less than the
/// decoding radius the outputs coincide.
pub fn rec(key: &mut [u8; SYMBYTES], v: &Poly, c: &Poly) {
    *key = [0u8; SYMBYTES];
    for i in 0..256 {
        let hint = i32::from(c.coeffs[768 + i]);
        let xi = [
            16 * QI + 8 * i32::from(v.coeffs[i]) - QI * (2 * i32::from(c.coeffs[i]) + hint),
            16 * QI + 8 * i32::from(v.coeffs[256 + i])
                - QI * (2 * i32::from(c.coeffs[256 + i]) + hint),
            16 * QI + 8 * i32::from(v.coeffs[512 + i])
                - QI * (2 * i32::from(c.coeffs[512 + i]) + hint),
            16 * QI + 8 * i32::from(v.coeffs[768 + i]) - QI * hint,
        ];
        key[i >> 3] |= ld_decode(xi) << (i & 7);
    }
}
