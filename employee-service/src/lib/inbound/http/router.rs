use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_employee;
use super::handlers::delete_employee;
use super::handlers::get_employee;
use super::handlers::index;
use super::handlers::list_employees;
use super::handlers::login;
use super::handlers::register;
use super::handlers::update_employee;
use super::handlers::ApiErrorData;
use super::middleware::authenticate as auth_middleware;
use crate::employee::ports::EmployeeServicePort;
use crate::user::ports::UserServicePort;

/// Shared handler state.
///
/// Services are held behind their ports so the wiring decides the adapters.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP application.
///
/// `/register` and `/login` are the only public routes. Everything else,
/// including unmatched paths, sits behind the token gate.
pub fn create_router(
    employee_service: Arc<dyn EmployeeServicePort>,
    user_service: Arc<dyn UserServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        employee_service,
        user_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/", get(index))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<ApiErrorData>) {
    (StatusCode::NOT_FOUND, Json(ApiErrorData::new("Not found.")))
}
