use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{ArgMode, Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

/// Emits its operand on the `json_logic::log` target and passes it through.
fn log_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let value = &args[0];
    tracing::info!(target: "json_logic::log", depth = ctx.depth(), %value, "log");
    Ok(value.clone())
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "log",
        aliases: &[],
        arity: Arity::Fixed(1),
        mode: ArgMode::Eager,
        eval_fn: log_eval,
    })]
}
