use serde::{Deserialize, Serialize};

/// Evaluator configuration.
///
/// Deserializable from any serde format, with every field optional:
///
/// ```
/// use json_logic::EvaluatorOptions;
///
/// let opts: EvaluatorOptions = serde_json::from_str(r#"{"max_depth": 64}"#).unwrap();
/// assert_eq!(opts.max_depth, Some(64));
/// assert_eq!(EvaluatorOptions::default().max_depth, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorOptions {
    /// Maximum nesting of operation nodes. `None` leaves recursion bounded
    /// only by the rule itself, which untrusted input can abuse to exhaust
    /// the stack.
    pub max_depth: Option<usize>,
}

impl EvaluatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
