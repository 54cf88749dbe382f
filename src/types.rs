//! Message and key newtypes with RAII zeroization.
//!
//! The two wire messages are plain fixed-size byte wrappers; `TryFrom`
//! conversions from slices form the thin framing layer that rejects
//! wrong-length input. Secret types zeroize on drop and redact their
//! `Debug` output.

use crate::error::Error;
use crate::math::poly::Poly;
use crate::params::{SENDA_BYTES, SENDB_BYTES, SYMBYTES};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Alice's public message: packed public polynomial ‖ 32-byte seed
/// (1824 bytes).
#[derive(Clone)]
pub struct PublicMessage {
    pub(crate) bytes: [u8; SENDA_BYTES],
}

impl PublicMessage {
    /// Wrap an existing byte array as a public message.
    #[inline]
    pub fn from_bytes(bytes: [u8; SENDA_BYTES]) -> Self {
        Self { bytes }
    }

    /// View the message as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the wrapper and return the inner byte array.
    #[inline]
    pub fn into_bytes(self) -> [u8; SENDA_BYTES] {
        self.bytes
    }
}

impl AsRef<[u8]> for PublicMessage {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for PublicMessage {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: SENDA_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }
}

impl core::fmt::Debug for PublicMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicMessage")
            .field("len", &SENDA_BYTES)
            .finish_non_exhaustive()
    }
}

/// Bob's response message: packed polynomial ‖ packed reconciliation
/// hints (2048 bytes).
#[derive(Clone)]
pub struct ResponseMessage {
    pub(crate) bytes: [u8; SENDB_BYTES],
}

impl ResponseMessage {
    /// Wrap an existing byte array as a response message.
    #[inline]
    pub fn from_bytes(bytes: [u8; SENDB_BYTES]) -> Self {
        Self { bytes }
    }

    /// View the message as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the wrapper and return the inner byte array.
    #[inline]
    pub fn into_bytes(self) -> [u8; SENDB_BYTES] {
        self.bytes
    }
}

impl AsRef<[u8]> for ResponseMessage {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for ResponseMessage {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: SENDB_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }
}

impl core::fmt::Debug for ResponseMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResponseMessage")
            .field("len", &SENDB_BYTES)
            .finish_non_exhaustive()
    }
}

/// Alice's secret polynomial, kept in the NTT domain between `keygen` and
/// `finalize`. Not cloneable; zeroized on drop.
pub struct SecretKey {
    pub(crate) poly: Poly,
}

impl SecretKey {
    #[inline]
    pub(crate) fn new(poly: Poly) -> Self {
        Self { poly }
    }

    #[inline]
    pub(crate) fn poly(&self) -> &Poly {
        &self.poly
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.poly.zeroize();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// The negotiated shared secret (always 32 bytes). Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    pub(crate) bytes: [u8; SYMBYTES],
}

impl SharedSecret {
    /// Wrap a raw 32-byte array as a shared secret.
    #[inline]
    pub fn from_bytes(bytes: [u8; SYMBYTES]) -> Self {
        Self { bytes }
    }

    /// View the secret as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}
