use crate::error::{LogicError, Result};
use crate::options::EvaluatorOptions;
use crate::registry::OperatorRegistry;
use crate::value::Value;

/// The state of one evaluation, passed to every operator.
///
/// Borrows the data context, the registry and the options for the duration
/// of a single `apply` call.
pub struct EvalCtx<'a> {
    data: &'a Value,
    operators: &'a OperatorRegistry,
    options: &'a EvaluatorOptions,
    depth: usize,
}

impl<'a> EvalCtx<'a> {
    pub fn new(
        data: &'a Value,
        operators: &'a OperatorRegistry,
        options: &'a EvaluatorOptions,
    ) -> Self {
        EvalCtx {
            data,
            operators,
            options,
            depth: 0,
        }
    }

    /// The data context `var` resolves against.
    pub fn data(&self) -> &'a Value {
        self.data
    }

    pub fn operators(&self) -> &'a OperatorRegistry {
        self.operators
    }

    pub fn options(&self) -> &'a EvaluatorOptions {
        self.options
    }

    /// Number of operation nodes currently being evaluated.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Evaluates a sub-rule in this context.
    pub fn evaluate(&mut self, rule: &Value) -> Result<Value> {
        crate::evaluate::evaluate(rule, self)
    }

    pub(crate) fn enter(&mut self) -> Result<()> {
        if let Some(max) = self.options.max_depth {
            if self.depth >= max {
                tracing::debug!(max_depth = max, "rule depth limit reached");
                return Err(LogicError::DepthExceeded(max));
            }
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
