use axum::extract::State;
use axum::http::StatusCode;

use crate::employee::ports::EmployeeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EmployeeData;
use crate::inbound::http::router::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    state
        .employee_service
        .list_employees()
        .await
        .map_err(ApiError::from)
        .map(|employees| {
            ApiSuccess::new(
                StatusCode::OK,
                employees.iter().map(EmployeeData::from).collect(),
            )
        })
}
