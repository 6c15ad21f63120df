//! Models for request and response payloads

use serde::{Deserialize, Serialize};

pub mod calculation;

pub use calculation::CalculationRecord;

/// Response for the path-based arithmetic routes
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub result: i64,
}

/// Response for the history route: newest first, at most ten entries
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<CalculationRecord>,
}

/// Response for the unbounded listing route
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub data: Vec<CalculationRecord>,
}

/// Login parameters, sent as query parameters on POST
#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Request body for the body-based addition route
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub num1: i64,
    pub num2: i64,
}

/// Response for the body-based addition route
#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub id: String,
    pub num1: i64,
    pub num2: i64,
    pub sum: i64,
}
