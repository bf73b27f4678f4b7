//! The main `evaluate` function.

use crate::error::{LogicError, Result};
use crate::eval_ctx::EvalCtx;
use crate::types::ArgMode;
use crate::value::Value;

/// Evaluates a rule against an execution context.
///
/// - Anything but a single-key mapping is a literal and is returned as is.
/// - `{op: args}` dispatches to the registered operator `op`. A sequence
///   `args` supplies the operands positionally; any other `args` is a single
///   operand.
pub fn evaluate(rule: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let (name, raw_args) = match rule.as_operation() {
        Some(op) => op,
        None => return Ok(rule.clone()),
    };

    let operator = ctx.operators().get(name).ok_or_else(|| {
        tracing::debug!(operator = name, "unknown operator");
        LogicError::UnknownOperator(name.to_string())
    })?;

    let operands = match raw_args {
        Value::Array(arr) => arr.as_slice(),
        single => std::slice::from_ref(single),
    };
    operator.arity().check(name, operands.len())?;

    ctx.enter()?;
    tracing::trace!(
        operator = name,
        operands = operands.len(),
        depth = ctx.depth(),
        "dispatch"
    );
    let result = match operator.mode() {
        ArgMode::Raw => operator.apply(operands, ctx),
        ArgMode::Eager => operands
            .iter()
            .map(|operand| evaluate(operand, ctx))
            .collect::<Result<Vec<_>>>()
            .and_then(|args| operator.apply(&args, ctx)),
    };
    ctx.exit();
    result
}
