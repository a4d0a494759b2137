use thiserror::Error;

use crate::{Function, Variable};

/// An expression that could not be parsed.
///
/// Carries the byte offset into the source text where parsing failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Returns what went wrong.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the byte offset into the source text.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The reason an expression failed to parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unexpected `{0}`")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("function `{0}` must be called with parentheses")]
    MissingCall(String),

    #[error("invalid variable name `{0}`")]
    InvalidVariableName(String),

    #[error("expression is nested too deeply")]
    TooDeep,
}

/// A value that an expression cannot produce at a given `(t, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({argument}) is outside the domain of `{function}`")]
    Domain { function: Function, argument: f64 },

    #[error("{base} ^ {exponent} is not a real number")]
    ComplexPower { base: f64, exponent: f64 },

    #[error("`{operation}` produced NaN")]
    NotANumber { operation: &'static str },

    #[error("{0} variable is NaN")]
    NanInput(Variable),
}
