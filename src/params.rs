//! Fixed NewHope parameters and derived byte sizes.
//!
//! There is no parameter agility: n = 1024, q = 12289, and the binomial
//! noise parameter k = 16 are baked into the arithmetic and the constant
//! tables.

/// Polynomial ring degree.
pub const N: usize = 1024;

/// Field modulus.
pub const Q: u16 = 12289;

/// Size in bytes of seeds, raw reconciled keys, and shared secrets.
pub const SYMBYTES: usize = 32;

/// Size in bytes of a serialised polynomial (14 bits × 1024 / 8).
pub const POLY_BYTES: usize = 1792;

/// Size in bytes of the packed reconciliation hints (2 bits × 1024 / 8).
pub const REC_BYTES: usize = 256;

/// Alice's public message: packed polynomial ‖ seed.
pub const SENDA_BYTES: usize = POLY_BYTES + SYMBYTES;

/// Bob's response message: packed polynomial ‖ packed hints.
pub const SENDB_BYTES: usize = POLY_BYTES + REC_BYTES;

/// Random bytes consumed per noise polynomial (32 bits per coefficient).
pub const NOISE_BYTES: usize = 4 * N;
