//! Display-only bearer token decoding.
//!
//! Tokens are `header.payload.signature` with base64url segments. Only the
//! payload is parsed; the header is checked for encoding and the signature is
//! never looked at. A [`ClaimSet`] is therefore untrusted input and must never
//! be used to decide what a user may access. The API remains the only authority.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::{Map, Number, Value};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
}

/// Subject identifier, issued either as a number or a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    Id(Number),
    Name(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Id(id) => write!(formatter, "{id}"),
            Subject::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// Claims carried in the token payload. Unverified; display only.
///
/// Each field is read on its own: a claim with an unexpected type is left
/// empty without affecting the others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimSet {
    pub sub: Option<Subject>,
    pub username: Option<String>,
    pub role: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
}

impl ClaimSet {
    fn from_payload(payload: &Map<String, Value>) -> Self {
        Self {
            sub: payload.get("sub").and_then(|value| match value {
                Value::Number(id) => Some(Subject::Id(id.clone())),
                Value::String(name) => Some(Subject::Name(name.clone())),
                _ => None,
            }),
            username: string_claim(payload, "username"),
            role: string_claim(payload, "role"),
            exp: timestamp_claim(payload, "exp"),
            iat: timestamp_claim(payload, "iat"),
        }
    }
}

fn string_claim(payload: &Map<String, Value>, name: &str) -> Option<String> {
    payload.get(name)?.as_str().map(str::to_string)
}

// Fractional seconds are truncated.
fn timestamp_claim(payload: &Map<String, Value>, name: &str) -> Option<i64> {
    let value = payload.get(name)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|seconds| seconds.is_finite())
            .map(|seconds| seconds.trunc() as i64)
    })
}

/// Decodes the payload of a bearer token without verifying its signature.
///
/// # Errors
///
/// Returns an error if the token is not three dot-separated segments, if the
/// header or payload is not base64url, or if the payload is not a JSON object.
pub fn decode(token: &str) -> Result<ClaimSet, DecodeError> {
    let mut parts = token.trim().split('.');
    let header_b64 = parts.next().ok_or(DecodeError::TokenFormat)?;
    let claims_b64 = parts.next().ok_or(DecodeError::TokenFormat)?;
    parts.next().ok_or(DecodeError::TokenFormat)?;
    if parts.next().is_some() || header_b64.is_empty() || claims_b64.is_empty() {
        return Err(DecodeError::TokenFormat);
    }

    b64d(header_b64)?;
    let payload: Map<String, Value> = serde_json::from_slice(&b64d(claims_b64)?)?;
    Ok(ClaimSet::from_payload(&payload))
}

/// Decodes a token for display, logging and discarding any failure.
pub fn decode_for_display(token: &str) -> Option<ClaimSet> {
    match decode(token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::warn!(error = %err, "token decoding failed");
            None
        }
    }
}

// Producers disagree on padding; accept both forms.
fn b64d(segment: &str) -> Result<Vec<u8>, DecodeError> {
    Base64UrlUnpadded::decode_vec(segment.trim_end_matches('=')).map_err(|_| DecodeError::Base64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(value: &Value) -> String {
        Base64UrlUnpadded::encode_string(value.to_string().as_bytes())
    }

    fn token_with(payload: Value) -> String {
        let header = segment(&serde_json::json!({ "alg": "HS256", "typ": "JWT" }));
        format!("{header}.{}.c2lnbmF0dXJl", segment(&payload))
    }

    fn username_of(token: &str) -> Option<String> {
        decode(token).ok().and_then(|claims| claims.username)
    }

    #[test]
    fn decodes_all_display_claims() {
        let token = token_with(serde_json::json!({
            "sub": 7,
            "username": "alice",
            "role": "admin",
            "exp": 1_700_003_600,
            "iat": 1_700_000_000,
        }));

        let claims = decode(&token).expect("token should decode");

        assert_eq!(claims.sub, Some(Subject::Id(Number::from(7))));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert_eq!(claims.exp, Some(1_700_003_600));
        assert_eq!(claims.iat, Some(1_700_000_000));
    }

    #[test]
    fn string_subjects_and_unknown_claims_are_accepted() {
        let token = token_with(serde_json::json!({
            "sub": "user-42",
            "username": "bob",
            "tenant": "acme",
        }));

        let claims = decode(&token).expect("token should decode");

        assert_eq!(claims.sub, Some(Subject::Name("user-42".to_string())));
        assert_eq!(claims.sub.map(|sub| sub.to_string()), Some("user-42".to_string()));
        assert_eq!(claims.role, None);
    }

    #[test]
    fn mistyped_role_keeps_username() {
        let token = token_with(serde_json::json!({ "username": "alice", "role": ["admin"] }));

        let claims = decode(&token).expect("token should decode");

        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.role, None);
    }

    #[test]
    fn fractional_expiry_is_truncated() {
        let token = token_with(serde_json::json!({
            "username": "alice",
            "exp": 1_700_000_000.5,
        }));

        let claims = decode(&token).expect("token should decode");

        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.exp, Some(1_700_000_000));
    }

    #[test]
    fn oversized_numeric_subject_is_kept() {
        let token = token_with(serde_json::json!({
            "sub": u64::MAX,
            "username": "alice",
        }));

        let claims = decode(&token).expect("token should decode");

        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(
            claims.sub.map(|sub| sub.to_string()),
            Some(u64::MAX.to_string())
        );
    }

    #[test]
    fn non_json_header_is_accepted() {
        let header = Base64UrlUnpadded::encode_string(b"opaque-header");
        let payload = segment(&serde_json::json!({ "username": "alice" }));
        let token = format!("{header}.{payload}.sig");

        assert_eq!(username_of(&token).as_deref(), Some("alice"));
    }

    #[test]
    fn non_string_username_is_ignored() {
        let token = token_with(serde_json::json!({ "username": 12, "exp": "soon" }));

        let claims = decode(&token).expect("token should decode");

        assert_eq!(claims, ClaimSet::default());
    }

    #[test]
    fn rejects_wrong_segment_counts() {
        assert!(matches!(decode("only"), Err(DecodeError::TokenFormat)));
        assert!(matches!(decode("a.b"), Err(DecodeError::TokenFormat)));
        assert!(matches!(decode("a.b.c.d"), Err(DecodeError::TokenFormat)));
        assert!(matches!(decode(".."), Err(DecodeError::TokenFormat)));
    }

    #[test]
    fn rejects_non_base64url_segments() {
        let header = segment(&serde_json::json!({ "alg": "none" }));
        let payload = segment(&serde_json::json!({ "username": "alice" }));

        let bad_payload = format!("{header}.***.sig");
        let bad_header = format!("***.{payload}.sig");

        assert!(matches!(decode(&bad_payload), Err(DecodeError::Base64)));
        assert!(matches!(decode(&bad_header), Err(DecodeError::Base64)));
    }

    #[test]
    fn rejects_payload_that_is_not_an_object() {
        let header = segment(&serde_json::json!({ "alg": "none" }));
        let payload = Base64UrlUnpadded::encode_string(b"[1,2,3]");
        let token = format!("{header}.{payload}.sig");
        assert!(matches!(decode(&token), Err(DecodeError::Json(_))));
        assert!(decode_for_display(&token).is_none());
    }

    #[test]
    fn accepts_padded_segments_and_empty_signature() {
        let header = segment(&serde_json::json!({ "alg": "none" }));
        let payload = segment(&serde_json::json!({ "username": "carol" }));
        let token = format!("{header}==.{payload}=.");
        assert_eq!(username_of(&token).as_deref(), Some("carol"));
    }
}
