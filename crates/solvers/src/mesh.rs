//! Uniform time meshes.

use thiserror::Error;

/// Errors that can occur when creating a [`Mesh`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh must have at least one step.
    #[error("number of steps must be positive")]
    ZeroSteps,

    /// One or both domain bounds are non-finite.
    #[error("non-finite domain bound(s)")]
    NonFiniteBound,

    /// The bounds are finite but their span overflows.
    #[error("domain span overflows")]
    NonFiniteStep,

    /// The points cannot be allocated.
    #[error("cannot allocate a mesh of {steps} steps")]
    TooManySteps { steps: usize },
}

/// An ordered, uniformly spaced sequence of `steps + 1` time points.
///
/// Point `i` is computed directly as `start + i * h` rather than by repeated
/// addition, so rounding does not accumulate along the mesh. The last point is
/// exactly `end`.
///
/// The domain may be reversed (`end < start`, negative step) or degenerate
/// (`end == start`, every point equal and a zero step).
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    points: Vec<f64>,
    step_size: f64,
}

impl Mesh {
    /// Creates a mesh of `steps` equal intervals spanning `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ZeroSteps`] if `steps` is zero,
    /// [`MeshError::NonFiniteBound`] or [`MeshError::NonFiniteStep`] if the
    /// domain is not finite, and [`MeshError::TooManySteps`] if the points
    /// cannot be allocated.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(start: f64, end: f64, steps: usize) -> Result<Self, MeshError> {
        if steps == 0 {
            return Err(MeshError::ZeroSteps);
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(MeshError::NonFiniteBound);
        }

        let step_size = (end - start) / steps as f64;
        if !step_size.is_finite() {
            return Err(MeshError::NonFiniteStep);
        }

        let too_many = MeshError::TooManySteps { steps };
        let len = steps.checked_add(1).ok_or(too_many)?;
        let mut points = Vec::new();
        points.try_reserve_exact(len).map_err(|_| too_many)?;

        points.extend((0..=steps).map(|i| start + i as f64 * step_size));
        points[steps] = end;

        Ok(Self { points, step_size })
    }

    /// Returns the first point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Returns the last point.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Returns the number of intervals.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the uniform step size `h = (end - start) / steps`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the number of points, always `steps + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a mesh has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at index `i`, if any.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.points.get(i).copied()
    }

    /// Returns all points in order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }
}
