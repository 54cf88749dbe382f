//! Deterministic sampling: centered-binomial noise ([`cbd`]) and
//! rejection-uniform ([`rej_uniform`]).

use crate::params::{N, NOISE_BYTES, Q};
use sha3::digest::XofReader;

/// SHAKE-128 output rate in bytes (one Keccak-f[1600] squeeze).
pub const SHAKE128_RATE: usize = 168;

/// Centered binomial with k = 16: 4096 uniform bytes → 1024 coefficients
/// `a + q − b`, where `a` and `b` are the popcounts of the low and high 16
/// bits of each little-endian 32-bit word.
///
/// Output coefficients lie in [q − 16, q + 16]. The popcount is bitsliced
/// so the running time does not depend on the sampled bits.
pub fn cbd(r: &mut [u16; N], buf: &[u8; NOISE_BYTES]) {
    for i in 0..N {
        let t = u32::from_le_bytes([buf[4 * i], buf[4 * i + 1], buf[4 * i + 2], buf[4 * i + 3]]);
        let mut d = 0u32;
        for j in 0..8 {
            d += (t >> j) & 0x0101_0101;
        }
        let a = ((d >> 8) & 0xff) + (d & 0xff);
        let b = (d >> 24) + ((d >> 16) & 0xff);
        r[i] = (a + u32::from(Q) - b) as u16;
    }
}

/// Fill `r` with coefficients uniform in [0, q) by rejection from a
/// SHAKE-128 reader.
///
/// Consumes two bytes per trial, masks to 14 bits, and accepts values
/// below q (acceptance rate ≈ 75%). Squeezes one 168-byte rate block at a
/// time and keeps squeezing until the polynomial is full, so an unlucky
/// rejection run can never truncate the output.
pub fn rej_uniform(r: &mut [u16; N], xof: &mut impl XofReader) {
    let mut ctr = 0;
    let mut buf = [0u8; SHAKE128_RATE];

    while ctr < N {
        xof.read(&mut buf);
        let mut pos = 0;
        while ctr < N && pos + 2 <= SHAKE128_RATE {
            let val = (u16::from(buf[pos]) | (u16::from(buf[pos + 1]) << 8)) & 0x3fff;
            if val < Q {
                r[ctr] = val;
                ctr += 1;
            }
            pos += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash;
    use crate::params::SYMBYTES;

    #[test]
    fn cbd_output_range() {
        let buf: [u8; NOISE_BYTES] = core::array::from_fn(|i| (i * 97) as u8);
        let mut r = [0u16; N];
        cbd(&mut r, &buf);
        for &c in r.iter() {
            assert!(
                (Q - 16..=Q + 16).contains(&c),
                "coefficient {c} outside centered range"
            );
        }
    }

    #[test]
    fn cbd_zero_input() {
        // Both popcounts vanish, so every coefficient is exactly q.
        let buf = [0u8; NOISE_BYTES];
        let mut r = [99u16; N];
        cbd(&mut r, &buf);
        assert!(r.iter().all(|&c| c == Q));
    }

    #[test]
    fn cbd_all_ones_input() {
        // 16 set bits on each side cancel to q again.
        let buf = [0xffu8; NOISE_BYTES];
        let mut r = [0u16; N];
        cbd(&mut r, &buf);
        assert!(r.iter().all(|&c| c == Q));
    }

    #[test]
    fn cbd_single_low_bit() {
        let mut buf = [0u8; NOISE_BYTES];
        buf[0] = 0x01;
        let mut r = [0u16; N];
        cbd(&mut r, &buf);
        assert_eq!(r[0], Q + 1);
        assert!(r[1..].iter().all(|&c| c == Q));
    }

    #[test]
    fn rej_uniform_fills_in_range() {
        let seed = [42u8; SYMBYTES];
        let mut xof = hash::xof_absorb(&seed);
        let mut r = [0u16; N];
        rej_uniform(&mut r, &mut xof);
        assert!(r.iter().all(|&c| c < Q));
    }

    #[test]
    fn rej_uniform_is_deterministic() {
        let seed = [3u8; SYMBYTES];
        let mut a = [0u16; N];
        let mut b = [0u16; N];
        rej_uniform(&mut a, &mut hash::xof_absorb(&seed));
        rej_uniform(&mut b, &mut hash::xof_absorb(&seed));
        assert_eq!(a, b);

        let mut c = [0u16; N];
        rej_uniform(&mut c, &mut hash::xof_absorb(&[4u8; SYMBYTES]));
        assert_ne!(a, c);
    }
}
