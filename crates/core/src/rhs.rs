use std::convert::Infallible;

/// The right-hand side `f(t, y)` of a first-order ODE `dy/dt = f(t, y)`.
///
/// Implementations must be pure, always producing the same result for a given
/// `(t, y)` pair, so a solver may evaluate them in any order and as often as
/// it needs to.
pub trait Rhs {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative `dy/dt` at time `t` and state `y`.
    ///
    /// # Errors
    ///
    /// Each right-hand side defines its own `Error` type for values it cannot
    /// represent, such as a division by zero.
    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error>;
}

impl<R: Rhs + ?Sized> Rhs for &R {
    type Error = R::Error;

    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        (**self).eval(t, y)
    }
}

/// An infallible [`Rhs`] backed by a plain closure.
///
/// Construct with [`rhs_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnRhs<F>(F);

impl<F> Rhs for FnRhs<F>
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(t, y))
    }
}

/// Wraps a closure `|t, y| ...` as an [`Rhs`].
///
/// # Example
///
/// ```
/// use euler1d_core::{Rhs, rhs_fn};
///
/// let decay = rhs_fn(|_t, y| -y);
/// assert_eq!(decay.eval(0.0, 2.0).unwrap(), -2.0);
/// ```
pub fn rhs_fn<F>(f: F) -> FnRhs<F>
where
    F: Fn(f64, f64) -> f64,
{
    FnRhs(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails whenever the state is negative.
    struct NonNegative;

    #[derive(Debug, thiserror::Error)]
    #[error("negative state")]
    struct Negative;

    impl Rhs for NonNegative {
        type Error = Negative;

        fn eval(&self, _t: f64, y: f64) -> Result<f64, Self::Error> {
            if y < 0.0 { Err(Negative) } else { Ok(y.sqrt()) }
        }
    }

    #[test]
    fn closure_rhs_evaluates() {
        let f = rhs_fn(|t, y| t.cos() - y);
        assert_eq!(f.eval(0.0, 0.0).unwrap(), 1.0);
        assert_eq!(f.eval(0.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn references_forward_to_the_rhs() {
        let f = NonNegative;
        let by_ref = &f;

        assert_eq!(by_ref.eval(0.0, 4.0).unwrap(), 2.0);
        assert!(by_ref.eval(0.0, -1.0).is_err());
    }
}
