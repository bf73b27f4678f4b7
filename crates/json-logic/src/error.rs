use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogicError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("\"{operator}\" operand is not numeric: {value}")]
    Coercion { operator: String, value: Value },

    #[error("\"{operator}\" operator expects {expected}.")]
    Arity { operator: String, expected: String },

    #[error("\"{operator}\" operator: {message}")]
    InvalidArgument { operator: String, message: String },

    #[error("Maximum rule depth of {0} exceeded.")]
    DepthExceeded(usize),

    #[error("{0}")]
    Custom(String),
}

impl LogicError {
    pub fn coercion(operator: &str, value: &Value) -> Self {
        LogicError::Coercion {
            operator: operator.to_string(),
            value: value.clone(),
        }
    }

    pub fn invalid_argument(operator: &str, message: impl Into<String>) -> Self {
        LogicError::InvalidArgument {
            operator: operator.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogicError>;
