use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::EmployeeRequestBody;
use crate::employee::models::CreateEmployeeCommand;
use crate::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EmployeeData;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<EmployeeRequestBody>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let command = CreateEmployeeCommand {
        details: body.into(),
    };

    state
        .employee_service
        .create_employee(command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
