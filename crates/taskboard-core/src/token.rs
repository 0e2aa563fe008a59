//! Local inspection of JWT access tokens.
//!
//! Only the `exp` claim is read. Signatures are never checked here; the
//! backend remains the authority on whether a token is accepted.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::TokenError;

#[derive(Deserialize)]
struct Claims {
    exp: Option<f64>,
}

/// Decodes the `exp` claim (seconds since the Unix epoch) of a JWT.
///
/// The claim is a JSON number and may carry a fractional part.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not a three-part JWT, the
/// payload is not base64url JSON, or no `exp` claim is present.
pub fn decode_expiry(token: &str) -> Result<f64, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))?;

    claims.exp.ok_or(TokenError::MissingExpiry)
}

/// Returns whether `token` has expired at `now` (seconds since the Unix epoch).
///
/// A token whose expiry equals `now` counts as expired.
pub fn is_expired(token: &str, now: u64) -> Result<bool, TokenError> {
    Ok(decode_expiry(token)? <= now as f64)
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
