//! `newhope-rs` — the NewHope Ring-LWE key encapsulation mechanism.
//!
//! Implements the ephemeral, unauthenticated NewHope KEM over
//! `Zq[x]/(x^1024 + 1)` with q = 12289: a negacyclic NTT with Montgomery
//! arithmetic, centered-binomial noise (k = 16), rejection-sampled public
//! polynomials, and D4 lattice reconciliation.
//!
//! Alice calls [`keygen`] and sends the [`PublicMessage`]; Bob answers it
//! with [`respond`], which also yields his [`SharedSecret`]; Alice turns
//! the [`ResponseMessage`] into hers with [`finalize`]. Both ends hold the
//! same 32 bytes — SHA3-256 of the reconciled raw key — except with
//! probability below 2^-60.
//!
//! # Design principles
//!
//! - **No `unsafe`** — enforced by `#![deny(unsafe_code)]`.
//! - **Fixed-size buffers** — every polynomial and message is an inline
//!   array; nothing is heap-allocated or grows at runtime.
//! - **Branch-free kernels** — reductions, packing, and reconciliation
//!   select on sign bits rather than on secret-dependent branches.
//! - **RAII zeroization** of secret material via the `zeroize` crate.
//!
//! The entropy source and the Keccak permutation are external
//! collaborators: operations accept any [`rand_core::TryCryptoRng`] (a
//! failing source surfaces as [`Error::Entropy`]), and the sponge comes
//! from the `sha3` crate.

#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod kem;
pub mod math;
pub mod params;
pub mod rec;
pub mod types;

// Re-export the public API surface.
pub use error::Error;
pub use kem::{finalize, keygen, respond};
pub use params::{SENDA_BYTES, SENDB_BYTES, SYMBYTES};
pub use types::{PublicMessage, ResponseMessage, SecretKey, SharedSecret};
