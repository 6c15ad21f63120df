//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::credentials::CredentialVerifier;
use crate::jwt::JwtService;
use crate::repositories::CalculationRepository;

/// Application state shared across handlers
///
/// Everything here is constructed once at startup and injected; there is no
/// module-level client and no shared mutable in-process state.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub calculations: CalculationRepository,
    pub jwt_service: JwtService,
    pub credentials: Arc<dyn CredentialVerifier>,
}
