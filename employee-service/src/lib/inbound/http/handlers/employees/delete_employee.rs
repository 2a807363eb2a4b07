use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::employee::errors::EmployeeError;
use crate::employee::models::EmployeeId;
use crate::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

/// Delete an employee. Does not check that the id exists.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;

    state
        .employee_service
        .delete_employee(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|id| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Employee deleted").with_id(id.0),
            )
        })
}
