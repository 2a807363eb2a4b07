use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldError;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Password;
use crate::user::models::RegisterUserCommand;
use crate::user::models::Username;
use crate::user::ports::UserServicePort;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(|e| match e {
            UserError::UsernameAlreadyExists(_) => ApiError::from(e),
            _ => {
                tracing::error!(error = %e, "Registration failed");
                ApiError::InternalServerError("Error registering user.".to_string())
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        MessageData::new("User registered successfully."),
    ))
}

/// HTTP request body for registration (raw JSON).
///
/// Absent fields read as empty strings so they fail the length rules
/// instead of the JSON extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl RegisterRequestBody {
    /// Validate every field, reporting all failures at once.
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let username = Username::new(self.username);
        let password = Password::new(self.password);

        match (username, password) {
            (Ok(username), Ok(password)) => Ok(RegisterUserCommand::new(username, password)),
            (username, password) => {
                let mut errors = Vec::new();
                if let Err(e) = username {
                    errors.push(FieldError::new("username", e.to_string()));
                }
                if let Err(e) = password {
                    errors.push(FieldError::new("password", e.to_string()));
                }
                Err(ApiError::ValidationFailed(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(username: &str, password: &str) -> RegisterRequestBody {
        RegisterRequestBody {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_body() {
        let command = body("alice", "secret1").try_into_command().unwrap();
        assert_eq!(command.username.as_str(), "alice");
        assert_eq!(command.password.expose(), "secret1");
    }

    #[test]
    fn test_all_failures_reported() {
        let result = body("al", "12345").try_into_command();

        assert_eq!(
            result.unwrap_err(),
            ApiError::ValidationFailed(vec![
                FieldError::new("username", "Username must be at least 3 characters long"),
                FieldError::new("password", "Password must be at least 6 characters long"),
            ])
        );
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let parsed: RegisterRequestBody = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            parsed.try_into_command(),
            Err(ApiError::ValidationFailed(errors)) if errors.len() == 2
        ));
    }
}
