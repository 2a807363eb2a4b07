use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Carries the RFC 7519 subject, issued-at and expiration claims. The
/// subject is the numeric user id rendered as a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject issued at `issued_at` and valid for `lifetime`.
    ///
    /// # Arguments
    /// * `subject` - Unique subject identifier
    /// * `issued_at` - Issue time (Unix timestamp)
    /// * `lifetime` - Validity window starting at `issued_at`
    ///
    /// # Returns
    /// Claims with sub, iat and exp set
    pub fn for_subject(subject: impl ToString, issued_at: i64, lifetime: Duration) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: Some(issued_at + lifetime.num_seconds()),
            iat: Some(issued_at),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
