//! Array operators.

use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

/// Flattens one level: array operands are spliced in, anything else is appended.
fn merge_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let mut merged = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Array(items) => merged.extend(items.iter().cloned()),
            other => merged.push(other.clone()),
        }
    }
    Ok(Value::Array(merged))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "merge",
        aliases: &[],
        arity: Arity::Any,
        mode: ArgMode::Eager,
        eval_fn: merge_eval,
    })]
}
