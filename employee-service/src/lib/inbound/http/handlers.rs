use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::employee::errors::EmployeeError;
use crate::employee::models::Employee;
use crate::user::errors::UserError;

pub mod employees;
pub mod index;
pub mod users;

// Re-export handlers for easy access
pub use employees::create_employee;
pub use employees::delete_employee;
pub use employees::get_employee;
pub use employees::list_employees;
pub use employees::update_employee;
pub use index::index;
pub use users::login;
pub use users::register;

/// Successful response: status code plus a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    ValidationFailed(Vec<FieldError>),
    NotFound(String),
    InvalidCredentials,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiErrorData::new(msg))).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ApiErrorData::new(msg))).into_response()
            }
            ApiError::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ApiErrorData::new(msg))).into_response()
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "auth": false, "token": null })),
            )
                .into_response(),
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::InvalidEmployeeId(e) => ApiError::BadRequest(e.to_string()),
            EmployeeError::NotFound(_) => ApiError::NotFound("Employee not found.".to_string()),
            EmployeeError::DatabaseError(_) => {
                ApiError::InternalServerError("Error on the server.".to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByUsername(_) => ApiError::NotFound("User not found.".to_string()),
            UserError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest("Username already exists.".to_string())
            }
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError("Error on the server.".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

impl ApiErrorData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One failed input rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Employee as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeData {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.0,
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary,
        }
    }
}

/// Confirmation returned by operations that produce no entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
