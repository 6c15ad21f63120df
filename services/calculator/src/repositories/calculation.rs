//! Calculation repository for database operations
//!
//! The narrow interface to the record store: insert one record, read the
//! most recent N, read everything. Records are never updated or deleted.

use common::error::{DatabaseError, DatabaseResult};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::evaluator::Operation;
use crate::models::CalculationRecord;

/// Calculation repository
#[derive(Clone)]
pub struct CalculationRepository {
    pool: PgPool,
}

impl CalculationRepository {
    /// Create a new calculation repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one calculation record. The store assigns the identifier.
    pub async fn insert(
        &self,
        operation: Operation,
        num1: i64,
        num2: i64,
        result: i64,
    ) -> DatabaseResult<CalculationRecord> {
        debug!("Inserting calculation: {} {} {}", num1, operation, num2);

        let row = sqlx::query(
            r#"
            INSERT INTO calculations (operation, num1, num2, result)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(operation.as_str())
        .bind(num1)
        .bind(num2)
        .bind(result)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(CalculationRecord {
            id: row.get("id"),
            operation,
            num1,
            num2,
            result,
        })
    }

    /// Read the most recent calculations, newest first, bounded by `limit`
    pub async fn latest(&self, limit: i64) -> DatabaseResult<Vec<CalculationRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, operation, num1, num2, result
            FROM calculations
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        rows.into_iter().map(map_record).collect()
    }

    /// Read every stored calculation, oldest first
    pub async fn all(&self) -> DatabaseResult<Vec<CalculationRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, operation, num1, num2, result
            FROM calculations
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        rows.into_iter().map(map_record).collect()
    }
}

fn map_record(row: PgRow) -> DatabaseResult<CalculationRecord> {
    let operation: String = row.get("operation");
    let operation = operation
        .parse::<Operation>()
        .map_err(|e| DatabaseError::Decode(e.to_string()))?;

    Ok(CalculationRecord {
        id: row.get("id"),
        operation,
        num1: row.get("num1"),
        num2: row.get("num2"),
        result: row.get("result"),
    })
}
