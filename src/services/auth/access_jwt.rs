use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AuthError;

/// Access token (JWT) claims as they appear on the wire.
///
/// NOTE:
/// - older issuers put the account id in `id` instead of `sub`; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(alias = "id")]
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Claim set handed to the rest of the gate.
///
/// - `sub` is promoted to `Uuid` (account ids are UUIDs)
/// - signature and `exp` were already checked by `TokenVerifier::verify`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    pub account_id: Uuid,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// HS256 access-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        validation.validate_nbf = true;
        // No audience is configured for this service.
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature and expiry, then decode the claim set.
    ///
    /// Failures are classified so the policy layer can report them distinctly:
    /// malformed or forged → `InvalidToken`, expired → `ExpiredToken`,
    /// anything else → `Verification`.
    pub fn verify(&self, token: &str) -> Result<ClaimSet, AuthError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|e| classify(&e))?;

        let claims = data.claims;
        let account_id = Uuid::parse_str(claims.sub.trim())
            .map_err(|_| AuthError::Verification("subject is not an account id".into()))?;

        Ok(ClaimSet {
            account_id,
            issued_at: claims
                .iat
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            expires_at: DateTime::from_timestamp(claims.exp, 0),
        })
    }
}

fn classify(err: &jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthError::InvalidToken,
        _ => AuthError::Verification(err.to_string()),
    }
}
