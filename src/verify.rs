//! Code Validation
//!
//! Checks a submitted code against the freshly computed one. The
//! comparison XOR-accumulates every byte pair via `subtle` rather than
//! short-circuiting, so timing does not reveal the position of the first
//! mismatch. Every failure cause — wrong length, mismatch, replay —
//! collapses to the same `false`.

use subtle::ConstantTimeEq;

use crate::secret::Secret;
use crate::time::{UnixTime, time_step};
use crate::totp::{TotpConfig, totp_code};

/// Validate a candidate code at a point in time
///
/// `false` for a wrong code, a candidate of the wrong length, or an
/// invalid config. Never panics on malformed input. Callers tracking the
/// last accepted code should use [`verify_with_since`] instead.
pub fn verify(secret: &Secret, candidate: &str, time: impl UnixTime, config: &TotpConfig) -> bool {
    check(secret, candidate, &time, config, None)
}

/// Validate a candidate code, rejecting replays
///
/// `since` is the time the last valid code was consumed; a candidate whose
/// window is not strictly newer than that window is rejected even when the
/// code itself matches. Persisting `since` durably between calls is the
/// caller's responsibility.
pub fn verify_with_since(
    secret: &Secret,
    candidate: &str,
    time: impl UnixTime,
    config: &TotpConfig,
    since: impl UnixTime,
) -> bool {
    let last_step = time_step(&since, config.period.max(1));
    check(secret, candidate, &time, config, Some(last_step))
}

fn check(
    secret: &Secret,
    candidate: &str,
    time: &impl UnixTime,
    config: &TotpConfig,
    last_step: Option<u64>,
) -> bool {
    // Length gate before any computation; the constant-time property
    // covers code content, not code length.
    if candidate.len() != config.digits as usize {
        return false;
    }

    let expected = match totp_code(secret, time.unix_seconds(), config) {
        Ok(code) => code,
        Err(_) => return false,
    };

    if !bool::from(candidate.as_bytes().ct_eq(expected.as_bytes())) {
        return false;
    }

    // Anti-replay: the candidate's window must be strictly newer than the
    // last consumed one.
    if let Some(last) = last_step {
        if time_step(time, config.period) <= last {
            return false;
        }
    }

    true
}
