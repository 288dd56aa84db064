//! Error Types
//!
//! Parameter errors fail fast before any computation. Validation outcomes
//! are deliberately NOT errors: `verify` collapses every failure cause
//! (bad length, mismatch, replay) into a single `false` so callers cannot
//! build an oracle out of the distinction.

use thiserror::Error;

/// Errors for OTP operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    /// Digit count outside the RFC-supported range [6, 10]
    #[error("digit count must be between 6 and 10, got {0}")]
    InvalidDigits(u32),

    /// Time step must be a positive number of seconds
    #[error("period must be a positive number of seconds")]
    InvalidPeriod,

    /// Issuer or account contains the label separator ':'
    #[error("{0} must not contain ':'")]
    InvalidLabel(&'static str),

    /// Secret is empty or rejected by the MAC implementation
    #[error("secret must be at least one byte")]
    InvalidSecret,

    /// Secret string is not valid unpadded RFC 4648 base32
    #[error("invalid base32 secret")]
    InvalidBase32,

    /// The OS secure random source failed. Fatal: there is no safe
    /// fallback to a non-secure source.
    #[error("secure random source unavailable: {0}")]
    Rng(String),
}

pub type OtpResult<T> = Result<T, OtpError>;
