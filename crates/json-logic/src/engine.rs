//! The embeddable evaluator and pre-validated rules.

use crate::error::{LogicError, Result};
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::options::EvaluatorOptions;
use crate::registry::OperatorRegistry;
use crate::types::{ArgMode, Operator};
use crate::value::Value;
use std::sync::Arc;

/// A rule evaluator: an operator registry plus options.
///
/// Register custom operators first, then share the engine (it is cheap to
/// clone and `Send + Sync`) across any number of evaluations.
#[derive(Debug, Clone)]
pub struct JsonLogic {
    operators: Arc<OperatorRegistry>,
    options: EvaluatorOptions,
}

impl Default for JsonLogic {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLogic {
    /// An evaluator with the standard operator set.
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::standard())
    }

    pub fn with_registry(registry: OperatorRegistry) -> Self {
        JsonLogic {
            operators: Arc::new(registry),
            options: EvaluatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvaluatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    /// Registers `operator` under `name`, replacing any operator of that name.
    ///
    /// Engines cloned earlier keep the registry they were cloned with.
    pub fn register<O>(&mut self, name: impl Into<String>, operator: O) -> &mut Self
    where
        O: Operator + 'static,
    {
        Arc::make_mut(&mut self.operators).register(name, operator);
        self
    }

    /// Registers an eager closure operator.
    ///
    /// ```
    /// use json_logic::{JsonLogic, Value};
    /// use serde_json::json;
    ///
    /// let mut logic = JsonLogic::new();
    /// logic.register_fn("double", |args, _ctx| {
    ///     let n = args.first().and_then(Value::as_f64).unwrap_or(0.0);
    ///     Ok(Value::Number(n * 2.0))
    /// });
    /// let out = logic.apply_json(&json!({"double": 21}), &json!(null)).unwrap();
    /// assert_eq!(out, json!(42));
    /// ```
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&[Value], &mut EvalCtx<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.operators).register_fn(name, f);
        self
    }

    /// Evaluates `rule` against `data`.
    pub fn apply(&self, rule: &Value, data: &Value) -> Result<Value> {
        let mut ctx = EvalCtx::new(data, &self.operators, &self.options);
        evaluate(rule, &mut ctx)
    }

    /// Evaluates parser output directly. Non-finite results become `null`.
    pub fn apply_json(
        &self,
        rule: &serde_json::Value,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.apply(&Value::from(rule), &Value::from(data))
            .map(|v| v.to_json())
    }

    /// Validates `rule` against this engine and returns a reusable handle.
    ///
    /// Every operation must name a registered operator with an acceptable
    /// operand count, and nesting must stay within `max_depth`. Operands of
    /// raw operators (`and`, `or`, `if`, `var` and raw custom operators) are
    /// left unchecked: they may be data or branches that never run.
    pub fn compile(&self, rule: impl Into<Value>) -> Result<CompiledRule> {
        let rule = rule.into();
        validate(&rule, &self.operators, &self.options, 0)?;
        Ok(CompiledRule {
            rule,
            operators: Arc::clone(&self.operators),
            options: self.options.clone(),
        })
    }
}

fn validate(
    rule: &Value,
    operators: &OperatorRegistry,
    options: &EvaluatorOptions,
    depth: usize,
) -> Result<()> {
    let Some((name, raw_args)) = rule.as_operation() else {
        return Ok(());
    };
    let operator = operators
        .get(name)
        .ok_or_else(|| LogicError::UnknownOperator(name.to_string()))?;
    if let Some(max) = options.max_depth {
        if depth >= max {
            return Err(LogicError::DepthExceeded(max));
        }
    }
    let operands = match raw_args {
        Value::Array(arr) => arr.as_slice(),
        single => std::slice::from_ref(single),
    };
    operator.arity().check(name, operands.len())?;
    if operator.mode() == ArgMode::Raw {
        return Ok(());
    }
    operands
        .iter()
        .try_for_each(|operand| validate(operand, operators, options, depth + 1))
}

/// A rule that passed [`JsonLogic::compile`], bound to the registry it was
/// checked against.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: Value,
    operators: Arc<OperatorRegistry>,
    options: EvaluatorOptions,
}

impl CompiledRule {
    pub fn rule(&self) -> &Value {
        &self.rule
    }

    pub fn apply(&self, data: &Value) -> Result<Value> {
        let mut ctx = EvalCtx::new(data, &self.operators, &self.options);
        evaluate(&self.rule, &mut ctx)
    }

    pub fn apply_json(&self, data: &serde_json::Value) -> Result<serde_json::Value> {
        self.apply(&Value::from(data)).map(|v| v.to_json())
    }
}
