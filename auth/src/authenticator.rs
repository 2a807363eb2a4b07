use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Default session token lifetime.
pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 24;

/// Authentication coordinator combining password verification and session tokens.
///
/// One instance is built at startup from the process-wide signing secret and
/// shared by the login handler (issuing) and the authorization gate (verifying).
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Duration,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator issuing tokens valid for 24 hours.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing and verification
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_lifetime: Duration::hours(DEFAULT_TOKEN_LIFETIME_HOURS),
        }
    }

    /// Override the token lifetime.
    pub fn with_expiration_hours(mut self, hours: i64) -> Self {
        self.token_lifetime = Duration::hours(hours);
        self
    }

    /// Token lifetime applied to newly issued tokens.
    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier embedded in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token for `subject` expiring one lifetime from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: impl ToString) -> Result<String, JwtError> {
        self.issue_token_at(subject, Utc::now().timestamp())
    }

    /// Issue a token for `subject` as if the current time were `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token_at(
        &self,
        subject: impl ToString,
        issued_at: i64,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, issued_at, self.token_lifetime);
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and return the subject it was issued for.
    ///
    /// # Errors
    /// * `TokenExpired` - Current time is past the embedded expiry
    /// * `InvalidToken` - Signature mismatch or malformed token
    /// * `MissingClaim` - Token carries no expiry or no subject
    pub fn verify_token(&self, token: &str) -> Result<String, JwtError> {
        self.verify_token_at(token, Utc::now().timestamp())
    }

    /// Verify a token against an explicit current time (Unix timestamp).
    ///
    /// # Errors
    /// See [`Authenticator::verify_token`].
    pub fn verify_token_at(&self, token: &str, now: i64) -> Result<String, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.exp.is_none() {
            return Err(JwtError::MissingClaim("exp".to_string()));
        }
        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        claims
            .sub
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";
    const DAY: i64 = 24 * 60 * 60;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("secret1")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("secret1", &hash, 42)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let subject = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(subject, "42");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("secret1")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 42);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_token_valid_within_lifetime() {
        let authenticator = Authenticator::new(SECRET);
        let issued_at = 1_700_000_000;

        let token = authenticator
            .issue_token_at(7, issued_at)
            .expect("Failed to issue token");

        assert_eq!(authenticator.verify_token_at(&token, issued_at), Ok("7".to_string()));
        assert_eq!(
            authenticator.verify_token_at(&token, issued_at + DAY - 1),
            Ok("7".to_string())
        );
    }

    #[test]
    fn test_token_expires_after_lifetime() {
        let authenticator = Authenticator::new(SECRET);
        let issued_at = 1_700_000_000;

        let token = authenticator
            .issue_token_at(7, issued_at)
            .expect("Failed to issue token");

        assert_eq!(
            authenticator.verify_token_at(&token, issued_at + DAY + 1),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_custom_lifetime() {
        let authenticator = Authenticator::new(SECRET).with_expiration_hours(1);
        assert_eq!(authenticator.token_lifetime().num_hours(), 1);

        let token = authenticator
            .issue_token_at(7, 0)
            .expect("Failed to issue token");

        assert!(authenticator.verify_token_at(&token, 3600).is_ok());
        assert_eq!(
            authenticator.verify_token_at(&token, 3601),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_token_from_other_secret_is_invalid() {
        let issuer = Authenticator::new(b"another_secret_key_at_least_32_bytes");
        let verifier = Authenticator::new(SECRET);

        let token = issuer.issue_token(7).expect("Failed to issue token");

        assert!(matches!(
            verifier.verify_token(&token),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_malformed_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.verify_token("not-a-token");
        assert!(result.is_err());
        assert_ne!(result, Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_token_without_expiry_is_rejected() {
        let authenticator = Authenticator::new(SECRET);
        let token = JwtHandler::new(SECRET)
            .encode(&Claims::new().with_subject(7).with_issued_at(0))
            .expect("Failed to encode token");

        assert_eq!(
            authenticator.verify_token(&token),
            Err(JwtError::MissingClaim("exp".to_string()))
        );
    }

    #[test]
    fn test_token_without_subject() {
        let authenticator = Authenticator::new(SECRET);
        let token = JwtHandler::new(SECRET)
            .encode(&Claims::new().with_expiration(i64::MAX))
            .expect("Failed to encode token");

        assert_eq!(
            authenticator.verify_token(&token),
            Err(JwtError::MissingClaim("sub".to_string()))
        );
    }
}
