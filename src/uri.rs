//! Provisioning URIs
//!
//! Builds the `otpauth://totp/...` Key URI that authenticator apps consume
//! (usually rendered as a QR code by the caller; this crate only produces
//! the string). Pure formatting, no crypto and no I/O.
//!
//! Parameter order is fixed: `secret` first, then `issuer` when present,
//! then caller extras in their given order. Consumers doing literal URI
//! comparison depend on that ordering.

use crate::error::{OtpError, OtpResult};
use crate::secret::Secret;

/// Build a provisioning URI from a single pre-assembled label
///
/// `otpauth://totp/<label>?secret=...&issuer=...&<extras>`. The label and
/// every query key/value are percent-encoded, so a colon inside `label`
/// becomes `%3A`; use [`provisioning_uri_with_issuer`] for the
/// `issuer:account` label convention.
pub fn provisioning_uri(
    label: &str,
    secret: &Secret,
    extra: &[(&str, &str)],
    issuer: Option<&str>,
) -> String {
    let mut uri = format!(
        "otpauth://totp/{}?secret={}",
        urlencoding::encode(label),
        secret.to_base32()
    );
    if let Some(issuer) = issuer {
        push_param(&mut uri, "issuer", issuer);
    }
    for (key, value) in extra {
        push_param(&mut uri, key, value);
    }
    uri
}

/// Build a provisioning URI with an `issuer:account` label
///
/// `otpauth://totp/<issuer>:<account>?secret=...&issuer=<issuer>&<extras>`.
/// The colon is the label separator, so neither part may contain one;
/// offenders are rejected with [`OtpError::InvalidLabel`].
pub fn provisioning_uri_with_issuer(
    issuer: &str,
    account: &str,
    secret: &Secret,
    extra: &[(&str, &str)],
) -> OtpResult<String> {
    if issuer.contains(':') {
        return Err(OtpError::InvalidLabel("issuer"));
    }
    if account.contains(':') {
        return Err(OtpError::InvalidLabel("account"));
    }

    let mut uri = format!(
        "otpauth://totp/{}:{}?secret={}",
        urlencoding::encode(issuer),
        urlencoding::encode(account),
        secret.to_base32()
    );
    push_param(&mut uri, "issuer", issuer);
    for (key, value) in extra {
        push_param(&mut uri, key, value);
    }
    Ok(uri)
}

fn push_param(uri: &mut String, key: &str, value: &str) {
    uri.push('&');
    uri.push_str(&urlencoding::encode(key));
    uri.push('=');
    uri.push_str(&urlencoding::encode(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Secret {
        Secret::from_bytes(*b"abcd")
    }

    #[test]
    fn issuer_account_shape() {
        let uri = provisioning_uri_with_issuer("Acme", "alice", &secret(), &[]).unwrap();
        assert_eq!(uri, "otpauth://totp/Acme:alice?secret=MFRGGZA&issuer=Acme");
    }

    #[test]
    fn legacy_label_shape() {
        let uri = provisioning_uri("alice@example.com", &secret(), &[], None);
        assert_eq!(
            uri,
            "otpauth://totp/alice%40example.com?secret=MFRGGZA"
        );
    }

    #[test]
    fn legacy_shape_with_issuer_param() {
        let uri = provisioning_uri("alice", &secret(), &[], Some("Acme Corp"));
        assert_eq!(
            uri,
            "otpauth://totp/alice?secret=MFRGGZA&issuer=Acme%20Corp"
        );
    }

    #[test]
    fn extras_keep_caller_order() {
        let uri = provisioning_uri_with_issuer(
            "Acme",
            "alice",
            &secret(),
            &[("digits", "8"), ("period", "60")],
        )
        .unwrap();
        assert_eq!(
            uri,
            "otpauth://totp/Acme:alice?secret=MFRGGZA&issuer=Acme&digits=8&period=60"
        );
    }

    #[test]
    fn label_spaces_are_percent_encoded() {
        let uri = provisioning_uri_with_issuer("Acme Corp", "alice smith", &secret(), &[]).unwrap();
        assert_eq!(
            uri,
            "otpauth://totp/Acme%20Corp:alice%20smith?secret=MFRGGZA&issuer=Acme%20Corp"
        );
    }

    #[test]
    fn colon_in_issuer_or_account_rejected() {
        assert_eq!(
            provisioning_uri_with_issuer("Acme:Inc", "alice", &secret(), &[]),
            Err(OtpError::InvalidLabel("issuer"))
        );
        assert_eq!(
            provisioning_uri_with_issuer("Acme", "a:lice", &secret(), &[]),
            Err(OtpError::InvalidLabel("account"))
        );
    }

    #[test]
    fn legacy_label_colon_is_escaped() {
        let uri = provisioning_uri("Acme:alice", &secret(), &[], None);
        assert_eq!(uri, "otpauth://totp/Acme%3Aalice?secret=MFRGGZA");
    }
}
