//! Symmetry discovery and point-group classification for polyhedra.
//!
//! A `Polyhedron` is a list of planar faces. From it the crate derives vertex
//! and edge topology, validates the solid, finds every rotation axis, mirror
//! plane, rotoreflection axis and the inversion center, and names the
//! Schönflies point group those elements form.
//!
//! API Policy
//! - `api` and `prelude` are the supported import surfaces; module paths may
//!   move between versions.
//! - All floating-point comparisons go through `geom3::cfg::EPS`.

pub mod api;
pub mod error;
pub mod geom3;
pub mod point_group;
pub mod polyhedron;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
pub use nalgebra::{Point3 as Pt3, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, StructuralError, ValidationError};
    pub use crate::geom3::{Affine3, Line3, Plane3, Transformable, EPS};
    pub use crate::point_group::{classify, AxisCensus, Family, PointGroup, Subtype};
    pub use crate::polyhedron::{special, Face, Polyhedron};
    pub use crate::symmetry::{apply, SymOp, Symmetries};
    pub use nalgebra::{Point3 as Pt3, Vector3 as Vec3};
}
