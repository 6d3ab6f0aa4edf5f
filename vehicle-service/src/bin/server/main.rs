use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vehicle_service::config::Config;
use vehicle_service::domain::user::service::UserService;
use vehicle_service::domain::vehicle::service::VehicleService;
use vehicle_service::inbound::http::router::create_router;
use vehicle_service::inbound::http::router::AppState;
use vehicle_service::outbound::repositories::PostgresStoreHealth;
use vehicle_service::outbound::repositories::PostgresUserRepository;
use vehicle_service::outbound::repositories::PostgresVehicleRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicle_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "vehicle-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        api_prefix = %config.server.api_prefix,
        jwt_algorithm = %config.jwt.algorithm,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        &config.jwt.algorithm,
        config.jwt.expiration_minutes,
    )?);
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let vehicle_repository = Arc::new(PostgresVehicleRepository::new(pg_pool.clone()));

    let state = AppState {
        user_service: Arc::new(UserService::new(
            user_repository,
            Arc::clone(&authenticator),
        )),
        vehicle_service: Arc::new(VehicleService::new(vehicle_repository)),
        store_health: Arc::new(PostgresStoreHealth::new(pg_pool)),
        authenticator,
        api_prefix: config.server.api_prefix.clone(),
    };

    let http_address = format!("{}:{}", config.server.host, config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.cors.allowed_origins);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
