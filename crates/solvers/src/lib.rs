//! Mesh generation and forward Euler integration.
//!
//! - [`mesh`]: uniform time meshes over `[start, end]`
//! - [`euler`]: the explicit Euler recurrence over a mesh

pub mod euler;
pub mod mesh;

pub use mesh::{Mesh, MeshError};
