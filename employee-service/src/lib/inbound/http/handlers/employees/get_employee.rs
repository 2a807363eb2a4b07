use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::employee::errors::EmployeeError;
use crate::employee::models::EmployeeId;
use crate::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EmployeeData;
use crate::inbound::http::router::AppState;

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;

    state
        .employee_service
        .get_employee(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
