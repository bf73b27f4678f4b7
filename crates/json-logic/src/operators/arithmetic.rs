//! Arithmetic operators.

use super::num;
use crate::coerce::{to_display_string, to_number};
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

/// `+` adds while both sides read as numbers and concatenates otherwise,
/// so it never fails on a non-numeric operand. Once it has concatenated,
/// the joined text is never read back as a number.
fn add_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let (first, rest) = match args {
        [] => return Ok(Value::Number(0.0)),
        [only] => return Ok(Value::Number(to_number(only).unwrap_or(f64::NAN))),
        [first, rest @ ..] => (first, rest),
    };
    let mut acc = first.clone();
    let mut joined = false;
    for next in rest {
        acc = match (joined, to_number(&acc), to_number(next)) {
            (false, Some(a), Some(b)) => Value::Number(a + b),
            _ => {
                joined = true;
                Value::String(to_display_string(&acc) + &to_display_string(next))
            }
        };
    }
    Ok(acc)
}

fn fold(operator: &str, args: &[Value], step: fn(f64, f64) -> f64) -> Result<Value> {
    let mut operands = args.iter();
    let mut acc = match operands.next() {
        Some(first) => num(operator, first)?,
        None => return Ok(Value::Null),
    };
    for operand in operands {
        acc = step(acc, num(operator, operand)?);
    }
    Ok(Value::Number(acc))
}

fn subtract_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    match args {
        [only] => Ok(Value::Number(-num("-", only)?)),
        _ => fold("-", args, |a, b| a - b),
    }
}

fn multiply_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    fold("*", args, |a, b| a * b)
}

// IEEE semantics: x/0 is ±Infinity (NaN for 0/0) and x%0 is NaN.
fn divide_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    fold("/", args, |a, b| a / b)
}

fn mod_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    fold("%", args, |a, b| a % b)
}

fn extremum(operator: &str, args: &[Value], pick: fn(f64, f64) -> f64) -> Result<Value> {
    let vals = args
        .iter()
        .map(|v| num(operator, v))
        .collect::<Result<Vec<f64>>>()?;
    if vals.iter().any(|v| v.is_nan()) {
        return Ok(Value::Number(f64::NAN));
    }
    Ok(vals
        .into_iter()
        .reduce(pick)
        .map(Value::Number)
        .unwrap_or(Value::Null))
}

fn min_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    extremum("min", args, f64::min)
}

fn max_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    extremum("max", args, f64::max)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "+",
            aliases: &[],
            arity: Arity::Any,
            mode: ArgMode::Eager,
            eval_fn: add_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "-",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Eager,
            eval_fn: subtract_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "*",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Eager,
            eval_fn: multiply_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "/",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Eager,
            eval_fn: divide_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "%",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Eager,
            eval_fn: mod_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "min",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Eager,
            eval_fn: min_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "max",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Eager,
            eval_fn: max_eval,
        }),
    ]
}
