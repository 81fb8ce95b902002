//! Signed assertions for the Zhipu API
//!
//! A key pair `id.secret` is turned into a JWT-shaped token: a base64url
//! header and payload followed by an HMAC-SHA256 signature keyed by `secret`.
//! Tokens are minted per request and never reused.

use std::{fmt, time::Duration};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use serde_json::json;
use sha2::Sha256;

/// Lifetime of an assertion when none is given
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// The key pair is not of the form `id.secret`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid key format, expected `<id>.<secret>`")]
pub struct InvalidKeyFormat;

/// Compact `header.payload.signature` bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct SignedAssertion(String);

impl SignedAssertion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SignedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignedAssertion([REDACTED])")
    }
}

/// Sign an assertion for `key_pair`, valid for `ttl` from now
pub fn sign(key_pair: &str, ttl: Duration) -> Result<SignedAssertion, InvalidKeyFormat> {
    sign_at(key_pair, ttl, Timestamp::now())
}

/// Sign an assertion as of `now`
///
/// The key pair is split on its first `.`; both halves must be non-empty.
/// The payload carries `api_key`, `exp` and `timestamp`, with times in
/// milliseconds since the Unix epoch.
pub fn sign_at(key_pair: &str, ttl: Duration, now: Timestamp) -> Result<SignedAssertion, InvalidKeyFormat> {
    let (id, secret) = key_pair
        .split_once('.')
        .filter(|(id, secret)| !id.is_empty() && !secret.is_empty())
        .ok_or(InvalidKeyFormat)?;

    let timestamp = now.as_millisecond();
    let exp = timestamp.saturating_add(i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX));

    // serde_json orders object keys, which keeps both segments canonical
    let header = URL_SAFE_NO_PAD.encode(json!({ "alg": "HS256", "sign_type": "SIGN" }).to_string());
    let payload = URL_SAFE_NO_PAD.encode(
        json!({
            "api_key": id,
            "exp": exp,
            "timestamp": timestamp,
        })
        .to_string(),
    );

    let signing_input = format!("{header}.{payload}");

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).map_err(|_| InvalidKeyFormat)?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(SignedAssertion(format!("{signing_input}.{signature}")))
}
