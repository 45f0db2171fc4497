//! Token issuance for forum sessions.
//!
//! Every login hands out a pair: a short-lived HS256 access token whose
//! claims identify the author (id, username, role) to the handlers, and
//! an opaque refresh token whose SHA-256 digest is persisted as a
//! session row. `issue_tokens` is the single entry point; it also
//! computes the refresh expiry so callers never duplicate that math.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use quorum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Claims embedded in every access token.
///
/// `username` rides along so handlers can log and attribute actions
/// without a user lookup per request; `role` gates moderation routes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the author's internal database id.
    pub sub: DbId,
    /// Display name, as shown on questions and answers.
    pub username: String,
    /// Role name (`"superuser"` or `"user"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for revocation / audit.
    pub jti: String,
}

/// Configuration for token issuance and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }
}

/// A freshly issued token pair plus the session bookkeeping values.
///
/// The refresh token is returned in plaintext exactly once; only
/// `refresh_token_hash` goes to the database.
#[derive(Debug)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub refresh_token_hash: String,
    pub refresh_expires_at: Timestamp,
    /// Access token lifetime in seconds, for the response payload.
    pub expires_in: i64,
}

/// Issue an access + refresh token pair for a user.
pub fn issue_tokens(
    user_id: DbId,
    username: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<IssuedTokens, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let expires_in = config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        role: role.to_string(),
        exp: now.timestamp() + expires_in,
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let access_token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    let refresh_token = Uuid::new_v4().to_string();
    let refresh_token_hash = hash_refresh_token(&refresh_token);

    Ok(IssuedTokens {
        access_token,
        refresh_token,
        refresh_token_hash,
        refresh_expires_at: now + Duration::days(config.refresh_token_expiry_days),
        expires_in,
    })
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature, expiration, and issued-at claims automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// SHA-256 hex digest of a refresh token.
///
/// Use this to compare an incoming refresh token against the stored hash.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn test_issued_access_token_round_trips() {
        let config = test_config();
        let tokens =
            issue_tokens(42, "ada", "superuser", &config).expect("issuance should succeed");

        let claims =
            validate_token(&tokens.access_token, &config).expect("validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.role, "superuser");
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_issuance_carries_session_bookkeeping() {
        let config = test_config();
        let before = chrono::Utc::now();
        let tokens = issue_tokens(7, "grace", "user", &config).expect("issuance should succeed");

        assert_eq!(tokens.expires_in, 15 * 60);

        // Refresh expiry lands 7 days out, and the stored hash matches
        // the plaintext handed to the client.
        let days_out = (tokens.refresh_expires_at - before).num_days();
        assert_eq!(days_out, 7);
        assert_eq!(
            tokens.refresh_token_hash,
            hash_refresh_token(&tokens.refresh_token)
        );
        // SHA-256 hex digest.
        assert_eq!(tokens.refresh_token_hash.len(), 64);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            username: "ada".to_string(),
            role: "user".to_string(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            ..test_config()
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            ..test_config()
        };

        let tokens =
            issue_tokens(1, "ada", "user", &config_a).expect("issuance should succeed");

        let result = validate_token(&tokens.access_token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }
}
