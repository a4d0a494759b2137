use crate::Mesh;

/// The result of an Euler integration.
///
/// Holds the mesh together with one state value per mesh point, so the two
/// sequences are always index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    mesh: Mesh,
    values: Vec<f64>,
}

impl Solution {
    pub(crate) fn new(mesh: Mesh, values: Vec<f64>) -> Self {
        debug_assert_eq!(mesh.len(), values.len());
        Self { mesh, values }
    }

    /// Returns the mesh the solution was computed on.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns the mesh points.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        self.mesh.points()
    }

    /// Returns the state at each mesh point.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the initial condition.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    /// Returns the state at the last mesh point.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Returns the number of integration steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.mesh.steps()
    }

    /// Iterates over `(t, y)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times().iter().copied().zip(self.values.iter().copied())
    }

    /// Returns true if every state value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|y| y.is_finite())
    }

    /// Returns the index of the first non-finite state, if any.
    ///
    /// A non-finite value means the integration diverged.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|y| !y.is_finite())
    }

    /// Splits the solution into its mesh and state values.
    #[must_use]
    pub fn into_parts(self) -> (Mesh, Vec<f64>) {
        (self.mesh, self.values)
    }
}
