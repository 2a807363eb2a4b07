use auth::AuthenticationError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let user = state
        .user_service
        .get_user_by_username(&body.username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => ApiError::from(e),
            _ => ApiError::InternalServerError("Error on the server.".to_string()),
        })?;

    // Argon2 verification is CPU-bound; keep it off the async workers.
    let authenticator = state.authenticator.clone();
    let stored_hash = user.password_hash.clone();
    let user_id = user.id;
    let result = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&body.password, &stored_hash, user_id)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Password verification task failed");
        ApiError::InternalServerError("Error on the server.".to_string())
    })?
    .map_err(|e| match e {
        AuthenticationError::InvalidCredentials => {
            tracing::warn!(username = %user.username, "Login with invalid password");
            ApiError::InvalidCredentials
        }
        AuthenticationError::PasswordError(err) => {
            tracing::error!(error = %err, "Password verification failed");
            ApiError::InternalServerError("Error on the server.".to_string())
        }
        AuthenticationError::JwtError(err) => {
            tracing::error!(error = %err, "Token generation failed");
            ApiError::InternalServerError("Error on the server.".to_string())
        }
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            auth: true,
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub auth: bool,
    pub token: String,
}
