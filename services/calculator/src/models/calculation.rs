//! Calculation record entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluator::Operation;

/// One persisted arithmetic operation and its operands/result.
///
/// Records are write-once. `id` is assigned by the record store on insert
/// and serializes as a string; it carries no meaning beyond ordering and
/// display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub operation: Operation,
    pub num1: i64,
    pub num2: i64,
    pub result: i64,
}
