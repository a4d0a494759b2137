use std::fmt;

use crate::EvalError;

/// A built-in function of one real argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    /// Natural logarithm, also spelled `log`.
    Ln,
    Log10,
    Log2,
    Sqrt,
    Abs,
}

impl Function {
    /// Looks up a function by the name used in expressions.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(function)
    }

    /// Returns the canonical name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies the function to `x`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] when `x` lies outside the real domain of
    /// the function, and [`EvalError::NotANumber`] for any other NaN result
    /// (for example `sin(inf)`).
    pub fn apply(self, x: f64) -> Result<f64, EvalError> {
        let in_domain = match self {
            Self::Sqrt => x >= 0.0,
            Self::Ln | Self::Log10 | Self::Log2 => x > 0.0,
            Self::Asin | Self::Acos => (-1.0..=1.0).contains(&x),
            _ => true,
        };
        if !in_domain {
            return Err(EvalError::Domain {
                function: self,
                argument: x,
            });
        }

        let value = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
        };

        if value.is_nan() {
            Err(EvalError::NotANumber {
                operation: self.name(),
            })
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn log_is_natural() {
        assert_eq!(Function::from_name("log"), Some(Function::Ln));
        assert_relative_eq!(Function::Ln.apply(std::f64::consts::E).unwrap(), 1.0);
    }

    #[test]
    fn names_round_trip() {
        for name in [
            "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "exp", "ln",
            "log10", "log2", "sqrt", "abs",
        ] {
            let function = Function::from_name(name).expect("known function");
            assert_eq!(function.name(), name);
        }
        assert_eq!(Function::from_name("gamma"), None);
    }

    #[test]
    fn domain_errors() {
        assert!(matches!(
            Function::Sqrt.apply(-1.0),
            Err(EvalError::Domain {
                function: Function::Sqrt,
                ..
            })
        ));
        assert!(matches!(
            Function::Ln.apply(0.0),
            Err(EvalError::Domain { .. })
        ));
        assert!(matches!(
            Function::Log10.apply(-3.0),
            Err(EvalError::Domain { .. })
        ));
        assert!(matches!(
            Function::Acos.apply(1.5),
            Err(EvalError::Domain { .. })
        ));
        assert_relative_eq!(Function::Asin.apply(1.0).unwrap(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn nan_results_are_errors() {
        assert_eq!(
            Function::Sin.apply(f64::INFINITY),
            Err(EvalError::NotANumber { operation: "sin" })
        );
    }

    #[test]
    fn overflow_is_not_an_error() {
        assert_eq!(Function::Exp.apply(1000.0), Ok(f64::INFINITY));
    }
}
