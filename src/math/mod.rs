//! Core arithmetic for the NewHope ring Zq[x]/(x^1024 + 1).
//!
//! Zero-allocation polynomial arithmetic on fixed-size arrays. Sub-modules
//! cover modular reduction, the negacyclic Number-Theoretic Transform and
//! its constant tables, byte-level packing, the polynomial wrapper, and
//! deterministic sampling.

pub mod ntt;
pub mod pack;
pub mod poly;
pub mod reduce;
pub mod sample;
pub mod tables;
