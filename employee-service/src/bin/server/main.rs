use std::sync::Arc;

use auth::Authenticator;
use employee_service::config::Config;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::domain::user::service::UserService;
use employee_service::inbound::http::router::create_router;
use employee_service::outbound::repositories::PostgresEmployeeRepository;
use employee_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // A missing .env file is fine; variables may come from the real environment.
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "employee-service",
        version = env!("CARGO_PKG_VERSION"),
        dotenv = ?dotenv_path,
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_host = %config.database.host,
        database_port = config.database.port,
        database_name = %config.database.name,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options())
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database schema ready");

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .with_expiration_hours(config.jwt.expiration_hours),
    );
    tracing::info!(
        token_lifetime_hours = authenticator.token_lifetime().num_hours(),
        "Authenticator ready"
    );
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let employee_service = Arc::new(EmployeeService::new(employee_repository));
    let user_service = Arc::new(UserService::new(user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(employee_service, user_service, authenticator);

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
