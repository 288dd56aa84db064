//! totp-kit
//!
//! RFC 4226 (HOTP) / RFC 6238 (TOTP) one-time passwords for second-factor
//! authentication: secret generation, `otpauth://` provisioning URIs,
//! time-windowed code computation, and constant-time validation with
//! caller-supplied replay protection.
//!
//! Everything is synchronous and stateless; the only external resource is
//! the OS secure random source during secret generation. Persisting the
//! secret and the last-accepted time window is the caller's job.
//!
//! ```
//! use totp_kit::{Secret, TotpConfig, totp_code, verify};
//!
//! let secret = Secret::generate().unwrap();
//! let config = TotpConfig::default();
//!
//! let now = std::time::SystemTime::now();
//! let code = totp_code(&secret, now, &config).unwrap();
//! assert!(verify(&secret, &code, now, &config));
//! ```

mod error;
mod hotp;
mod secret;
mod time;
mod totp;
mod uri;
mod verify;

pub use error::{OtpError, OtpResult};
pub use hotp::{MAX_DIGITS, MIN_DIGITS, hotp_code};
pub use secret::{DEFAULT_SECRET_LEN, Secret};
pub use time::UnixTime;
pub use totp::{TotpConfig, totp_code};
pub use uri::{provisioning_uri, provisioning_uri_with_issuer};
pub use verify::{verify, verify_with_since};
