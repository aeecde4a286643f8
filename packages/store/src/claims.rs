//! Unverified decoding of the bearer token's claim payload.
//!
//! The client trusts the token it was handed at login; signature validation
//! is the server's job on every API call. Decoding here only extracts the
//! identity and role set embedded in the payload.

use std::collections::BTreeSet;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use thiserror::Error;

/// Namespaced claim key carrying the role name(s).
pub const ROLE_CLAIM: &str =
    "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("token is not a three-part compact JWS")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Payload(String),
    #[error("token payload is not a JSON object: {0}")]
    Json(String),
}

/// Claims extracted from a decoded token payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject identifier.
    pub subject: String,
    pub email: Option<String>,
    /// Role claim, normalized into a set at the decode boundary: a single
    /// string claim becomes a one-element set, an absent claim the empty
    /// set. Nothing downstream re-checks the claim's shape.
    pub roles: BTreeSet<String>,
    pub issued_at: Option<i64>,
    pub expires_at: Option<i64>,
}

impl TokenClaims {
    /// Display name: the subject, falling back to the email claim.
    pub fn display_name(&self) -> &str {
        if self.subject.is_empty() {
            self.email.as_deref().unwrap_or_default()
        } else {
            &self.subject
        }
    }
}

/// Decode the payload segment of a compact token without verifying the
/// signature.
pub fn decode(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(ClaimsError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClaimsError::Payload(e.to_string()))?;
    let claims: Value =
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))?;

    Ok(TokenClaims {
        subject: claims
            .get("sub")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        email: claims.get("email").and_then(Value::as_str).map(String::from),
        roles: roles_from_claim(claims.get(ROLE_CLAIM)),
        issued_at: claims.get("iat").and_then(Value::as_i64),
        expires_at: claims.get("exp").and_then(Value::as_i64),
    })
}

/// The role claim is either a single string, an array of strings, or absent.
fn roles_from_claim(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        Some(Value::String(role)) => BTreeSet::from([role.clone()]),
        Some(Value::Array(roles)) => roles
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        _ => BTreeSet::new(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Build a structurally valid compact token around the given claim set.
    /// The signature is junk; nothing client-side verifies it.
    pub fn token_with(claims: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload =
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let signature = URL_SAFE_NO_PAD.encode(b"test-signature");
        format!("{header}.{payload}.{signature}")
    }
}

#[cfg(test)]
mod tests {
    use super::testing::token_with;
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_subject_email_and_timestamps() {
        let token = token_with(json!({
            "sub": "dana",
            "email": "dana@liftdesk.example",
            "iat": 1_700_000_000,
            "exp": 1_800_000_000,
        }));

        let claims = decode(&token).unwrap();
        assert_eq!(claims.subject, "dana");
        assert_eq!(claims.email.as_deref(), Some("dana@liftdesk.example"));
        assert_eq!(claims.issued_at, Some(1_700_000_000));
        assert_eq!(claims.expires_at, Some(1_800_000_000));
        assert!(claims.roles.is_empty());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let token = token_with(json!({"email": "front-desk@liftdesk.example"}));
        let claims = decode(&token).unwrap();
        assert_eq!(claims.display_name(), "front-desk@liftdesk.example");
    }

    #[test]
    fn rejects_tokens_without_three_parts() {
        assert_eq!(decode("not-a-token"), Err(ClaimsError::Malformed));
        assert_eq!(decode("a.b"), Err(ClaimsError::Malformed));
        assert_eq!(decode("a.b.c.d"), Err(ClaimsError::Malformed));
    }

    #[test]
    fn rejects_garbage_payloads() {
        assert!(matches!(
            decode("aGVhZGVy.!!!.c2ln"),
            Err(ClaimsError::Payload(_))
        ));
        let not_json = format!("aGVhZGVy.{}.c2ln", URL_SAFE_NO_PAD.encode(b"plain"));
        assert!(matches!(decode(&not_json), Err(ClaimsError::Json(_))));
    }
}
