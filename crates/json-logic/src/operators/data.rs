//! Data access operators: `var`, `missing`, `missing_some`.

use super::num;
use crate::coerce::to_display_string;
use crate::error::{LogicError, Result};
use crate::eval_ctx::EvalCtx;
use crate::path;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

/// Turns an evaluated path operand into path text. `null` is the empty path.
fn path_text(operator: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(_) | Value::Bool(_) => Ok(to_display_string(value)),
        Value::Array(_) | Value::Object(_) => Err(LogicError::invalid_argument(
            operator,
            format!("path must be a string, got {}", value.type_name()),
        )),
    }
}

/// `var` takes raw operands: the path is evaluated (a literal string is
/// itself), the default only when the path does not resolve.
fn var_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let path_value = match args.first() {
        Some(rule) => ctx.evaluate(rule)?,
        None => Value::Null,
    };
    let path = path_text("var", &path_value)?;
    match path::get(ctx.data(), &path) {
        Some(found) => Ok(found.clone()),
        None => match args.get(1) {
            Some(default) => ctx.evaluate(default),
            None => Ok(Value::Null),
        },
    }
}

fn is_missing(data: &Value, key: &Value) -> bool {
    let path = to_display_string(key);
    match path::get(data, &path) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn missing_keys(data: &Value, keys: &[Value]) -> Vec<Value> {
    keys.iter()
        .filter(|key| is_missing(data, key))
        .cloned()
        .collect()
}

/// Paths may be given as operands or as one sequence operand, so that
/// `{"missing": {"merge": [...]}}` works.
fn missing_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let keys = match args {
        [Value::Array(list), ..] => list.as_slice(),
        _ => args,
    };
    Ok(Value::Array(missing_keys(ctx.data(), keys)))
}

fn missing_some_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let need = num("missing_some", &args[0])?;
    let keys = args[1].as_array().ok_or_else(|| {
        LogicError::invalid_argument(
            "missing_some",
            format!("expected an array of paths, got {}", args[1].type_name()),
        )
    })?;
    let missing = missing_keys(ctx.data(), keys);
    let present = keys.len() - missing.len();
    if present as f64 >= need {
        Ok(Value::Array(Vec::new()))
    } else {
        Ok(Value::Array(missing))
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "var",
            aliases: &[],
            arity: Arity::Range(0, Some(2)),
            mode: ArgMode::Raw,
            eval_fn: var_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "missing",
            aliases: &[],
            arity: Arity::Any,
            mode: ArgMode::Eager,
            eval_fn: missing_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "missing_some",
            aliases: &[],
            arity: Arity::Fixed(2),
            mode: ArgMode::Eager,
            eval_fn: missing_some_eval,
        }),
    ]
}
