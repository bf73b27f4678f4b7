//! String operators.

use super::num;
use crate::coerce::{strict_eq, to_display_string};
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

fn cat_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    Ok(Value::String(args.iter().map(to_display_string).collect()))
}

/// Character-based slice. A negative start counts from the end; a negative
/// length drops that many characters from the end.
fn substr_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let chars: Vec<char> = to_display_string(&args[0]).chars().collect();
    let len = chars.len() as i64;

    let start = num("substr", &args[1])?.trunc() as i64;
    let start = if start < 0 {
        (len + start).max(0)
    } else {
        start.min(len)
    };

    let end = match args.get(2) {
        None => len,
        Some(length) => {
            let length = num("substr", length)?.trunc() as i64;
            if length < 0 {
                len + length
            } else {
                start.saturating_add(length).min(len)
            }
        }
    };
    let end = end.max(start);

    Ok(Value::String(
        chars[start as usize..end as usize].iter().collect(),
    ))
}

/// Substring test on strings, strict membership on arrays.
fn in_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let needle = &args[0];
    let found = match &args[1] {
        Value::String(haystack) => haystack.contains(to_display_string(needle).as_str()),
        Value::Array(items) => items.iter().any(|item| strict_eq(item, needle)),
        _ => false,
    };
    Ok(Value::Bool(found))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "cat",
            aliases: &[],
            arity: Arity::Any,
            mode: ArgMode::Eager,
            eval_fn: cat_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "substr",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            mode: ArgMode::Eager,
            eval_fn: substr_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "in",
            aliases: &[],
            arity: Arity::Fixed(2),
            mode: ArgMode::Eager,
            eval_fn: in_eval,
        }),
    ]
}
