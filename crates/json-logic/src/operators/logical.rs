//! Logical operators.
//!
//! `and`, `or` and `if` take raw operands and evaluate only as far as the
//! result requires.

use crate::coerce::is_truthy;
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

fn and_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let mut acc = Value::Null;
    for arg in args {
        acc = ctx.evaluate(arg)?;
        if !is_truthy(&acc) {
            return Ok(acc);
        }
    }
    Ok(acc)
}

fn or_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let mut acc = Value::Null;
    for arg in args {
        acc = ctx.evaluate(arg)?;
        if is_truthy(&acc) {
            return Ok(acc);
        }
    }
    Ok(acc)
}

fn not_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Bool(!is_truthy(&args[0])))
}

fn truthy_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Bool(is_truthy(&args[0])))
}

/// `[cond, then, cond, then, ..., else]`
fn if_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    for clause in args.chunks(2) {
        match clause {
            [condition, then] => {
                let condition = ctx.evaluate(condition)?;
                if is_truthy(&condition) {
                    return ctx.evaluate(then);
                }
            }
            [otherwise] => return ctx.evaluate(otherwise),
            _ => {}
        }
    }
    Ok(Value::Null)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "and",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Raw,
            eval_fn: and_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "or",
            aliases: &[],
            arity: Arity::Range(1, None),
            mode: ArgMode::Raw,
            eval_fn: or_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!",
            aliases: &[],
            arity: Arity::Fixed(1),
            mode: ArgMode::Eager,
            eval_fn: not_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!!",
            aliases: &[],
            arity: Arity::Fixed(1),
            mode: ArgMode::Eager,
            eval_fn: truthy_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "if",
            aliases: &["?:"],
            arity: Arity::Any,
            mode: ArgMode::Raw,
            eval_fn: if_eval,
        }),
    ]
}
