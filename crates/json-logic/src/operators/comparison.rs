//! Comparison and equality operators.

use super::num;
use crate::coerce::{loose_eq, strict_eq};
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

/// True iff `holds` is true for every adjacent pair. Every operand is
/// coerced, so a non-numeric operand fails even after a false pair.
fn chain(operator: &str, args: &[Value], holds: fn(f64, f64) -> bool) -> Result<Value> {
    let vals = args
        .iter()
        .map(|v| num(operator, v))
        .collect::<Result<Vec<f64>>>()?;
    Ok(Value::Bool(vals.windows(2).all(|w| holds(w[0], w[1]))))
}

fn lt_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    chain("<", args, |a, b| a < b)
}

fn le_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    chain("<=", args, |a, b| a <= b)
}

fn gt_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    chain(">", args, |a, b| a > b)
}

fn ge_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    chain(">=", args, |a, b| a >= b)
}

fn eq_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Bool(loose_eq(&args[0], &args[1])))
}

fn ne_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Bool(!loose_eq(&args[0], &args[1])))
}

fn strict_eq_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Bool(strict_eq(&args[0], &args[1])))
}

fn strict_ne_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Bool(!strict_eq(&args[0], &args[1])))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "<",
            aliases: &[],
            arity: Arity::Range(2, None),
            mode: ArgMode::Eager,
            eval_fn: lt_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "<=",
            aliases: &[],
            arity: Arity::Range(2, None),
            mode: ArgMode::Eager,
            eval_fn: le_eval,
        }),
        Arc::new(OperatorDefinition {
            name: ">",
            aliases: &[],
            arity: Arity::Range(2, None),
            mode: ArgMode::Eager,
            eval_fn: gt_eval,
        }),
        Arc::new(OperatorDefinition {
            name: ">=",
            aliases: &[],
            arity: Arity::Range(2, None),
            mode: ArgMode::Eager,
            eval_fn: ge_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "==",
            aliases: &[],
            arity: Arity::Fixed(2),
            mode: ArgMode::Eager,
            eval_fn: eq_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!=",
            aliases: &[],
            arity: Arity::Fixed(2),
            mode: ArgMode::Eager,
            eval_fn: ne_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "===",
            aliases: &[],
            arity: Arity::Fixed(2),
            mode: ArgMode::Eager,
            eval_fn: strict_eq_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!==",
            aliases: &[],
            arity: Arity::Fixed(2),
            mode: ArgMode::Eager,
            eval_fn: strict_ne_eval,
        }),
    ]
}
