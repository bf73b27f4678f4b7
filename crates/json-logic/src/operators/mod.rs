//! The standard operator set.

pub mod arithmetic;
pub mod array;
pub mod comparison;
pub mod data;
pub mod diagnostic;
pub mod logical;
pub mod string;

use crate::error::{LogicError, Result};
use crate::types::OperatorDefinition;
use crate::value::Value;
use std::sync::Arc;

/// All standard operators combined.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(data::operators());
    ops.extend(arithmetic::operators());
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(string::operators());
    ops.extend(array::operators());
    ops.extend(diagnostic::operators());
    ops
}

/// Coerces an operand that must be numeric.
pub(crate) fn num(operator: &str, value: &Value) -> Result<f64> {
    crate::coerce::to_number(value).ok_or_else(|| LogicError::coercion(operator, value))
}
