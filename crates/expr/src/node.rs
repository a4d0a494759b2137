use std::fmt;

use crate::{EvalError, Function};

/// One of the two free variables of a right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// The independent variable, conventionally `t`.
    Time,
    /// The dependent variable, conventionally `y`.
    State,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => f.write_str("time"),
            Self::State => f.write_str("state"),
        }
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Returns the operator's symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
            Self::Pow => {
                if lhs == 0.0 && rhs < 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                if lhs < 0.0 && rhs.is_finite() && rhs.fract() != 0.0 {
                    return Err(EvalError::ComplexPower {
                        base: lhs,
                        exponent: rhs,
                    });
                }
                lhs.powf(rhs)
            }
        };

        if value.is_nan() {
            Err(EvalError::NotANumber {
                operation: self.symbol(),
            })
        } else {
            Ok(value)
        }
    }
}

/// A node of a parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Constant(f64),
    Variable(Variable),
    Negate(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        function: Function,
        arg: Box<Node>,
    },
}

impl Node {
    pub(crate) fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub(crate) fn call(function: Function, arg: Node) -> Self {
        Self::Call {
            function,
            arg: Box::new(arg),
        }
    }

    /// Evaluates the subtree at `(t, y)`.
    pub(crate) fn eval(&self, t: f64, y: f64) -> Result<f64, EvalError> {
        match self {
            Self::Constant(value) => Ok(*value),
            Self::Variable(variable) => {
                let value = match variable {
                    Variable::Time => t,
                    Variable::State => y,
                };
                if value.is_nan() {
                    Err(EvalError::NanInput(*variable))
                } else {
                    Ok(value)
                }
            }
            Self::Negate(inner) => Ok(-inner.eval(t, y)?),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(t, y)?, rhs.eval(t, y)?),
            Self::Call { function, arg } => function.apply(arg.eval(t, y)?),
        }
    }

    /// Returns true if the subtree references `variable`.
    pub(crate) fn uses(&self, variable: Variable) -> bool {
        match self {
            Self::Constant(_) => false,
            Self::Variable(v) => *v == variable,
            Self::Negate(inner) => inner.uses(variable),
            Self::Binary { lhs, rhs, .. } => lhs.uses(variable) || rhs.uses(variable),
            Self::Call { arg, .. } => arg.uses(variable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero() {
        let node = Node::binary(BinaryOp::Div, Node::Constant(1.0), Node::Variable(Variable::State));
        assert_eq!(node.eval(0.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(node.eval(0.0, 4.0), Ok(0.25));
    }

    #[test]
    fn powers() {
        let pow = |base, exponent| BinaryOp::Pow.apply(base, exponent);

        assert_eq!(pow(2.0, 10.0), Ok(1024.0));
        assert_eq!(pow(-2.0, 3.0), Ok(-8.0));
        assert_eq!(pow(0.0, 0.0), Ok(1.0));
        assert_eq!(pow(0.0, -1.0), Err(EvalError::DivisionByZero));
        assert_eq!(
            pow(-8.0, 0.5),
            Err(EvalError::ComplexPower {
                base: -8.0,
                exponent: 0.5
            })
        );
    }

    #[test]
    fn infinity_minus_infinity_is_an_error() {
        assert_eq!(
            BinaryOp::Sub.apply(f64::INFINITY, f64::INFINITY),
            Err(EvalError::NotANumber { operation: "-" })
        );
    }

    #[test]
    fn nan_variables_are_rejected() {
        let node = Node::Variable(Variable::State);
        assert_eq!(
            node.eval(0.0, f64::NAN),
            Err(EvalError::NanInput(Variable::State))
        );
    }

    #[test]
    fn tracks_variable_use() {
        let node = Node::call(
            Function::Cos,
            Node::Negate(Box::new(Node::Variable(Variable::Time))),
        );
        assert!(node.uses(Variable::Time));
        assert!(!node.uses(Variable::State));
    }
}
