//! Authentication utilities for the employee service.
//!
//! Provides:
//! - Password hashing (Argon2id)
//! - Signed, time-limited session tokens (JWT, HS256)
//! - Authentication coordination (verify password, then issue token)
//!
//! Tokens are stateless: they carry the subject, issue time and expiry and are
//! verified against the process-wide signing secret. There is no server-side
//! revocation; a token stays valid until its embedded expiry.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let token = auth.issue_token(42).unwrap();
//! assert_eq!(auth.verify_token(&token).unwrap(), "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, 7).unwrap();
//!
//! // Gate: verify token and recover the subject
//! let subject = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(subject, "7");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_TOKEN_LIFETIME_HOURS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
