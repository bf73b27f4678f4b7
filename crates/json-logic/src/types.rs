use crate::error::{LogicError, Result};
use crate::eval_ctx::EvalCtx;
use crate::value::Value;

/// Number of operands an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Skip the arity check.
    Any,
    /// Exactly `n` operands.
    Fixed(usize),
    /// Between `min` and `max` operands. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

impl Arity {
    /// Asserts that `count` operands are acceptable for `operator`.
    pub fn check(&self, operator: &str, count: usize) -> Result<()> {
        let expected = match *self {
            Arity::Any => return Ok(()),
            Arity::Fixed(n) if count != n => format!("{} operand{}", n, plural(n)),
            Arity::Range(min, _) if count < min => {
                format!("at least {} operand{}", min, plural(min))
            }
            Arity::Range(_, Some(max)) if count > max => {
                format!("at most {} operand{}", max, plural(max))
            }
            _ => return Ok(()),
        };
        Err(LogicError::Arity {
            operator: operator.to_string(),
            expected,
        })
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// How an operator wants its operands handed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgMode {
    /// Operands are evaluated left to right before the operator runs.
    #[default]
    Eager,
    /// Operands arrive as raw rules; the operator evaluates what it needs
    /// through [`EvalCtx::evaluate`].
    Raw,
}

/// An operator that can be registered under a name.
pub trait Operator: Send + Sync {
    fn arity(&self) -> Arity {
        Arity::Any
    }

    fn mode(&self) -> ArgMode {
        ArgMode::Eager
    }

    /// Runs the operator. `args` are evaluated values for [`ArgMode::Eager`]
    /// operators and raw rules for [`ArgMode::Raw`] ones.
    fn apply(&self, args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value>;
}

/// Any suitable closure is an eager operator of any arity.
impl<F> Operator for F
where
    F: Fn(&[Value], &mut EvalCtx<'_>) -> Result<Value> + Send + Sync,
{
    fn apply(&self, args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
        self(args, ctx)
    }
}

/// The type of a built-in operator evaluation function.
pub type EvalFn = for<'a> fn(&[Value], &mut EvalCtx<'a>) -> Result<Value>;

/// A statically described operator, as used by the standard set.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub mode: ArgMode,
    pub eval_fn: EvalFn,
}

impl Operator for OperatorDefinition {
    fn arity(&self) -> Arity {
        self.arity
    }

    fn mode(&self) -> ArgMode {
        self.mode
    }

    fn apply(&self, args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
        (self.eval_fn)(args, ctx)
    }
}
