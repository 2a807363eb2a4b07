use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::EmployeeRequestBody;
use crate::employee::errors::EmployeeError;
use crate::employee::models::EmployeeId;
use crate::employee::models::UpdateEmployeeCommand;
use crate::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

/// Replace every field of an employee. Does not check that the id exists.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EmployeeRequestBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;
    let command = UpdateEmployeeCommand {
        details: body.into(),
    };

    state
        .employee_service
        .update_employee(&employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|id| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Employee updated").with_id(id.0),
            )
        })
}
