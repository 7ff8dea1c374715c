//! Symmetry discovery: candidate generation, verification, rotoreflections.
//!
//! Purpose
//! - Find every rigid symmetry of a validated polyhedron by proposing finite
//!   candidate sets from vertex geometry and confirming each candidate by
//!   applying it and testing identity.
//!
//! Pipeline
//! - `candidates`: 2-fold axes (through midpoints of centroid-equidistant vertex
//!   pairs and through vertices), higher-order axes (normals of equidistant
//!   vertex triples, with an upper-bound order refined by GCD), mirror planes
//!   (perpendicular bisectors of equidistant pairs).
//! - `search`: confirm candidates, fold 2-fold hits into collinear higher-order
//!   axes, test inversion, derive rotoreflection axes.
//! - `types`: result types and the `SymOp` tagged union.
//!
//! Every candidate is checked independently against a read-only polyhedron;
//! only the final `Symmetries` value is cached (see `Polyhedron::symmetries`).

mod candidates;
mod search;
mod types;

pub(crate) use search::find_symmetries;
pub use types::{apply, ReflectionPlane, RotationAxis, RotoreflectionAxis, SymOp, Symmetries};

#[cfg(test)]
mod tests;
