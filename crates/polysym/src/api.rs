//! Curated API surface.
//!
//! Prefer these re-exports over deep module paths.

// Geometry primitives
pub use crate::geom3::{
    approx_eq, is_zero, points_eq, vectors_eq, Affine3, GeomError, Line3, Plane3, Transformable,
    EPS,
};
// Solids
pub use crate::polyhedron::hull::from_convex_vertices;
pub use crate::polyhedron::special::{
    antiprism, bipyramid, cube, dodecahedron, icosahedron, octahedron, prism, pyramid,
    random_hull, regular_prism, tetrahedron,
};
pub use crate::polyhedron::{Edge, Face, Polyhedron, Topology};
// Symmetry search and classification
pub use crate::error::{Error, StructuralError, ValidationError};
pub use crate::point_group::{
    classify, AxisCensus, ClassificationError, Family, PointGroup, Subtype,
};
pub use crate::symmetry::{
    apply, ReflectionPlane, RotationAxis, RotoreflectionAxis, SymOp, Symmetries,
};
