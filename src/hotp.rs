//! HOTP Engine
//!
//! RFC 4226 HMAC-based one-time passwords: the counter is MACed under the
//! shared secret and the digest is dynamically truncated to an N-digit
//! decimal code. The TOTP adapter and the validator both sit on top of
//! this function.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{OtpError, OtpResult};
use crate::secret::Secret;

type HmacSha1 = Hmac<Sha1>;

/// Minimum supported digit count
pub const MIN_DIGITS: u32 = 6;
/// Maximum supported digit count
pub const MAX_DIGITS: u32 = 10;

pub(crate) fn check_digits(digits: u32) -> OtpResult<()> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(OtpError::InvalidDigits(digits));
    }
    Ok(())
}

/// Compute the HOTP code for a counter value (RFC 4226 §5.3)
///
/// The counter is encoded as an 8-byte big-endian integer and MACed with
/// HMAC-SHA1. Dynamic truncation picks a 31-bit window of the digest using
/// the digest's own trailing nibble as offset; the window is reduced
/// mod `10^digits` and rendered zero-padded to exactly `digits` characters.
///
/// `digits` outside [6, 10] is a caller programming error, rejected before
/// any computation. Deterministic and side-effect free.
pub fn hotp_code(secret: &Secret, counter: u64, digits: u32) -> OtpResult<String> {
    check_digits(digits)?;
    if secret.as_bytes().is_empty() {
        return Err(OtpError::InvalidSecret);
    }

    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).map_err(|_| OtpError::InvalidSecret)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation: low nibble of the last byte selects a 4-byte
    // window; the window's top bit is masked off to stay non-negative.
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let bits = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let code = u64::from(bits) % 10u64.pow(digits);
    Ok(format!("{:0width$}", code, width = digits as usize))
}
