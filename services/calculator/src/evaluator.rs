//! Pure arithmetic evaluation
//!
//! Maps an operation tag and two integers to a result integer. No state,
//! no I/O. Arithmetic is checked: results outside the `i64` range fail
//! with [`EvaluateError::Overflow`] instead of wrapping, so a persisted
//! `result` always equals `num1 OP num2` over the integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// The tag stored in the record store and shown in responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = EvaluateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            other => Err(EvaluateError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Errors from the evaluator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// Operation tag outside the fixed set
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The exact result does not fit in a 64-bit signed integer
    #[error("Integer overflow computing {num1} {operation} {num2}")]
    Overflow {
        operation: Operation,
        num1: i64,
        num2: i64,
    },
}

/// Evaluate `num1 OP num2` with checked 64-bit arithmetic
pub fn evaluate(operation: Operation, num1: i64, num2: i64) -> Result<i64, EvaluateError> {
    let result = match operation {
        Operation::Add => num1.checked_add(num2),
        Operation::Subtract => num1.checked_sub(num2),
        Operation::Multiply => num1.checked_mul(num2),
    };

    result.ok_or(EvaluateError::Overflow {
        operation,
        num1,
        num2,
    })
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn arb_operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            Just(Operation::Add),
            Just(Operation::Subtract),
            Just(Operation::Multiply),
        ]
    }

    proptest! {
        /// Checked evaluation against 128-bit arithmetic as the oracle:
        /// either the exact result fits in i64 and is returned, or the
        /// exact result is out of range and evaluation fails.
        #[test]
        fn evaluate_matches_wide_arithmetic(
            op in arb_operation(),
            num1 in any::<i64>(),
            num2 in any::<i64>(),
        ) {
            let wide = match op {
                Operation::Add => num1 as i128 + num2 as i128,
                Operation::Subtract => num1 as i128 - num2 as i128,
                Operation::Multiply => num1 as i128 * num2 as i128,
            };

            match evaluate(op, num1, num2) {
                Ok(result) => prop_assert_eq!(result as i128, wide),
                Err(EvaluateError::Overflow { .. }) => prop_assert!(
                    wide > i64::MAX as i128 || wide < i64::MIN as i128
                ),
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        #[test]
        fn add_commutes(
            num1 in -1_000_000i64..=1_000_000,
            num2 in -1_000_000i64..=1_000_000,
        ) {
            prop_assert_eq!(
                evaluate(Operation::Add, num1, num2),
                evaluate(Operation::Add, num2, num1)
            );
        }

        #[test]
        fn subtract_then_add_round_trips(
            num1 in -1_000_000i64..=1_000_000,
            num2 in -1_000_000i64..=1_000_000,
        ) {
            let difference = evaluate(Operation::Subtract, num1, num2)
                .expect("in-range subtraction cannot overflow");
            prop_assert_eq!(evaluate(Operation::Add, difference, num2), Ok(num1));
        }
    }
}
