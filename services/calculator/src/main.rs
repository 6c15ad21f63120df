use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod credentials;
mod error;
mod evaluator;
mod jwt;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;

use std::sync::Arc;

use common::database::{DatabaseConfig, health_check, init_pool};

use crate::{
    credentials::{CredentialVerifier, StaticCredentials},
    jwt::{JwtConfig, JwtService},
    repositories::CalculationRepository,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting calculator service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Bring the record store schema up to date
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    info!("Record store schema up to date");

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env();
    let jwt_service = JwtService::new(jwt_config);

    let calculations = CalculationRepository::new(pool.clone());
    let credentials: Arc<dyn CredentialVerifier> = Arc::new(StaticCredentials::default());

    let app_state = AppState {
        db_pool: pool,
        calculations,
        jwt_service,
        credentials,
    };

    info!("Calculator service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    info!("Calculator service listening on 0.0.0.0:8000");

    axum::serve(listener, app).await?;

    Ok(())
}
