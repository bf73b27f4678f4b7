//! JSON Logic rule evaluator.
//!
//! # Overview
//!
//! Rules are JSON values. A single-key object `{"op": args}` is an operation;
//! anything else is a literal. Operations are dispatched to an
//! [`OperatorRegistry`] that ships with a standard set (arithmetic,
//! comparison, boolean logic, `var` data access, a few string and array
//! helpers) and can be extended by the host.
//!
//! # Example
//!
//! ```
//! use json_logic::JsonLogic;
//! use serde_json::json;
//!
//! let logic = JsonLogic::new();
//! let rule = json!({"and": [
//!     {">=": [{"var": "age"}, 18]},
//!     {"==": [{"var": ["country", "US"]}, "US"]}
//! ]});
//!
//! let result = logic.apply_json(&rule, &json!({"age": 21})).unwrap();
//! assert_eq!(result, json!(true));
//! ```

pub mod coerce;
pub mod engine;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod options;
pub mod path;
pub mod registry;
pub mod types;
pub mod value;

use std::sync::OnceLock;

// Re-export the core public API
pub use engine::{CompiledRule, JsonLogic};
pub use error::{LogicError, Result};
pub use eval_ctx::EvalCtx;
pub use evaluate::evaluate;
pub use options::EvaluatorOptions;
pub use registry::OperatorRegistry;
pub use types::{ArgMode, Arity, EvalFn, Operator, OperatorDefinition};
pub use value::{Map, Value};

/// Evaluates `rule` against `data` with the standard operator set.
pub fn apply(rule: &Value, data: &Value) -> Result<Value> {
    static STANDARD: OnceLock<JsonLogic> = OnceLock::new();
    STANDARD.get_or_init(JsonLogic::new).apply(rule, data)
}
