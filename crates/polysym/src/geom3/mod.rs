//! 3D primitives: lines, planes, orthogonal affine maps (tolerance-aware).
//!
//! Purpose
//! - Provide the small vocabulary the symmetry search is written in: points and
//!   vectors (nalgebra), `Line3`, `Plane3`, and `Affine3` isometries.
//! - Route every float comparison through `cfg` so equality, parallelism and
//!   containment agree end to end.
//!
//! Assumptions and conventions
//! - Directions and normals are stored as `Unit<Vector3>`; constructors reject
//!   zero-length inputs, so transforms of lines and planes never fail.
//! - `Affine3` only represents maps with an orthogonal linear part (the
//!   isometries a symmetry search needs). Arbitrary `(M, t)` pairs go through
//!   `Affine3::from_parts`, which checks orthogonality.
//!
//! Code cross-refs: `crate::polyhedron::{Face, Polyhedron}` implement
//! `Transformable`; `crate::symmetry::SymOp` lowers to `Affine3`.

mod affine;
pub mod cfg;
mod types;
pub(crate) mod util;

pub use affine::{Affine3, Transformable};
pub use cfg::{approx_eq, is_zero, points_eq, vectors_eq, EPS};
pub use types::{GeomError, Line3, Plane3};
