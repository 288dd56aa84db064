//! Shared Secret Material
//!
//! Generation and encoding of the per-user secret that both sides of the
//! TOTP exchange hold. Secrets come from OS-level entropy only and are
//! zeroized when dropped.

use base32::Alphabet;
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::error::{OtpError, OtpResult};

/// Default secret length in bytes (160 bits, the RFC 4226 recommendation)
pub const DEFAULT_SECRET_LEN: usize = 20;

const BASE32: Alphabet = Alphabet::Rfc4648 { padding: false };

/// Shared TOTP secret
///
/// Owned by the caller for the lifetime of the enrollment; this library
/// never persists it. Zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Generate a fresh secret of the default length (20 bytes)
    pub fn generate() -> OtpResult<Self> {
        Self::generate_with_len(DEFAULT_SECRET_LEN)
    }

    /// Generate a fresh secret from the OS CSPRNG
    ///
    /// Fails only if the secure random source is unavailable, which is
    /// fatal: there is no fallback.
    pub fn generate_with_len(len: usize) -> OtpResult<Self> {
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| OtpError::Rng(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Wrap existing secret material
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Decode an unpadded RFC 4648 base32 string (the enrollment format
    /// used by authenticator apps)
    pub fn from_base32(encoded: &str) -> OtpResult<Self> {
        let bytes = base32::decode(BASE32, encoded).ok_or(OtpError::InvalidBase32)?;
        Ok(Self { bytes })
    }

    /// Raw secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Unpadded RFC 4648 base32 encoding, as embedded in provisioning URIs
    pub fn to_base32(&self) -> String {
        base32::encode(BASE32, &self.bytes)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

// Debug impl that doesn't leak key material
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").finish_non_exhaustive()
    }
}
