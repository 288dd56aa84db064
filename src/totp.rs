//! TOTP Adapter
//!
//! RFC 6238 time-based codes: wall-clock time plus a period become the
//! moving factor fed to the HOTP engine. All time handling goes through
//! the [`UnixTime`](crate::time::UnixTime) normalization seam.

use serde::{Deserialize, Serialize};

use crate::error::{OtpError, OtpResult};
use crate::hotp::{check_digits, hotp_code};
use crate::secret::Secret;
use crate::time::{UnixTime, time_step};

/// Per-call TOTP parameters
///
/// Defaults match what authenticator apps expect: 30-second windows,
/// 6-digit codes. Validated eagerly on every operation; an out-of-range
/// value is a programming error, never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
    /// Width of the validity window in seconds
    pub period: u64,
    /// Number of decimal digits in the code, in [6, 10]
    pub digits: u32,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            period: 30,
            digits: 6,
        }
    }
}

impl TotpConfig {
    pub(crate) fn validate(&self) -> OtpResult<()> {
        if self.period == 0 {
            return Err(OtpError::InvalidPeriod);
        }
        check_digits(self.digits)
    }
}

/// Compute the TOTP code for a point in time
///
/// The moving factor is `floor(unix_seconds / period)`; a timestamp that is
/// an exact multiple of the period belongs to the window starting at that
/// instant. Two calls inside the same window always produce the same code.
pub fn totp_code(secret: &Secret, time: impl UnixTime, config: &TotpConfig) -> OtpResult<String> {
    config.validate()?;
    let counter = time_step(&time, config.period);
    hotp_code(secret, counter, config.digits)
}
