//! Right-hand-side expressions for first-order ODEs.
//!
//! An [`Expression`] is parsed once from text such as `"cos(t) - y"` into an
//! immutable tree, then evaluated at any number of `(t, y)` pairs without
//! re-reading the text.
//!
//! # Grammar
//!
//! - numbers: `2`, `0.5`, `.5`, `1e-3`
//! - variables: `t` and `y` (or custom names, see [`Expression::parse_with`])
//! - constants: `pi`, `e`
//! - operators: `+ - * /`, and `^` (or `**`) for powers
//! - functions of one argument: `sin cos tan asin acos atan sinh cosh tanh
//!   exp ln log log10 log2 sqrt abs`, where `log` is the natural logarithm
//!
//! Any other identifier is rejected with a [`ParseError`].
//!
//! # Evaluation errors
//!
//! Division by zero, arguments outside a function's real domain and NaN
//! results are reported as [`EvalError`]s. Infinite results are returned as
//! is; overflow is the caller's to detect.
//!
//! # Example
//!
//! ```
//! use euler1d_expr::Expression;
//!
//! let f = Expression::parse("cos(t) - y")?;
//! assert_eq!(f.eval(0.0, 0.0)?, 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod function;
mod lexer;
mod node;
mod parser;

use std::{fmt, str::FromStr};

use euler1d_core::Rhs;

pub use error::{EvalError, ParseError, ParseErrorKind};
pub use function::Function;
pub use node::{BinaryOp, Variable};

use node::Node;
use parser::Names;

/// A parsed right-hand side `f(t, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses an expression in the variables `t` and `y`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text does not follow the grammar or
    /// names an unknown identifier.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, "t", "y")
    }

    /// Parses an expression with custom names for the time and state variables.
    ///
    /// Variable names take precedence over the constants `pi` and `e`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if a name is not a valid identifier, both names
    /// are the same, a name collides with a built-in function, or the text
    /// fails to parse.
    pub fn parse_with(text: &str, time: &str, state: &str) -> Result<Self, ParseError> {
        for name in [time, state] {
            if !is_identifier(name) || Function::from_name(name).is_some() {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidVariableName(name.to_owned()),
                    0,
                ));
            }
        }
        if time == state {
            return Err(ParseError::new(
                ParseErrorKind::InvalidVariableName(state.to_owned()),
                0,
            ));
        }

        let root = parser::parse(text, Names { time, state })?;
        Ok(Self {
            source: text.to_owned(),
            root,
        })
    }

    /// Evaluates the expression at time `t` and state `y`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if any operation has no real result.
    pub fn eval(&self, t: f64, y: f64) -> Result<f64, EvalError> {
        self.root.eval(t, y)
    }

    /// Returns the text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the expression references `variable`.
    #[must_use]
    pub fn uses(&self, variable: Variable) -> bool {
        self.root.uses(variable)
    }
}

impl Rhs for Expression {
    type Error = EvalError;

    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        Expression::eval(self, t, y)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
