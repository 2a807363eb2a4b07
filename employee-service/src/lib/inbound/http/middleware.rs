use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Why the gate refused a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No usable `authorization` header.
    MissingToken,
    /// Token signature is fine but its expiry has passed.
    TokenExpired,
    /// Any other verification failure.
    VerificationFailed,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::MissingToken => (StatusCode::FORBIDDEN, "No token provided."),
            AuthRejection::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "Token expired. Please login again.",
            ),
            AuthRejection::VerificationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to authenticate token.",
            ),
        };

        (status, Json(json!({ "auth": false, "message": message }))).into_response()
    }
}

impl From<JwtError> for AuthRejection {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AuthRejection::TokenExpired,
            _ => AuthRejection::VerificationFailed,
        }
    }
}

/// Middleware that validates session tokens and adds the user id to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let token = extract_token_from_header(&req).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Request without token");
        AuthRejection::MissingToken
    })?;

    let subject = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        AuthRejection::from(e)
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::error!(error = %e, "Token subject is not a user id");
        AuthRejection::VerificationFailed
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Token from the `authorization` header, either raw or as `Bearer <token>`.
fn extract_token_from_header(req: &Request) -> Option<&str> {
    let value = req
        .headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .trim_start();

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with_header(value: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri("/employees");
        if let Some(value) = value {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_raw_token() {
        let req = request_with_header(Some("abc.def.ghi"));
        assert_eq!(extract_token_from_header(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token_from_header(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_empty_header() {
        assert_eq!(extract_token_from_header(&request_with_header(None)), None);
        assert_eq!(extract_token_from_header(&request_with_header(Some(""))), None);
        assert_eq!(
            extract_token_from_header(&request_with_header(Some("Bearer "))),
            None
        );
    }

    #[test]
    fn test_rejection_mapping() {
        assert_eq!(
            AuthRejection::from(JwtError::TokenExpired),
            AuthRejection::TokenExpired
        );
        assert_eq!(
            AuthRejection::from(JwtError::InvalidToken("bad".to_string())),
            AuthRejection::VerificationFailed
        );
        assert_eq!(
            AuthRejection::MissingToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthRejection::TokenExpired.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::VerificationFailed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
