//! Polyhedra described by planar faces: topology, validation, identity.
//!
//! Purpose
//! - Hold an immutable face list and derive everything else from it on demand:
//!   vertex/edge incidence (`Topology`) and the confirmed symmetry sets.
//! - Provide the identity relation every symmetry test reduces to.
//!
//! Caching
//! - Derived data lives in write-once cells (`OnceLock`): computed on first
//!   access, never mutated afterwards, safe to share across threads.
//! - Transformed copies start with empty caches; the symmetry search only
//!   compares their faces and never pays for their topology.
//!
//! Conventions
//! - Identity ignores face order, starting point and traversal direction of
//!   each face, but not position: a chiral solid and its mirror image differ.
//! - `is_opposite` is the stricter relation "every face reversed".

mod face;
pub mod hull;
mod identity;
pub mod special;
mod topology;
mod validate;

use std::sync::OnceLock;

use nalgebra::Point3;

pub use face::Face;
pub use topology::{Edge, Topology};

use crate::error::{Error, StructuralError};
use crate::geom3::{Affine3, Transformable};
use crate::point_group::{classify, AxisCensus, PointGroup};
use crate::symmetry::{find_symmetries, Symmetries};

/// Closed solid bounded by planar faces.
///
/// Invariants:
/// - at least 4 faces, each satisfying the `Face` checks;
/// - `topology` and `symmetries` are caches filled at most once.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    faces: Vec<Face>,
    topology: OnceLock<Topology>,
    symmetries: OnceLock<Symmetries>,
}

impl Polyhedron {
    pub fn new(faces: Vec<Face>) -> Result<Self, StructuralError> {
        if faces.len() < 4 {
            return Err(StructuralError::TooFewFaces { count: faces.len() });
        }
        Ok(Self::from_faces_unchecked(faces))
    }

    /// Build from raw point loops; face errors carry the loop's index.
    pub fn from_points(loops: Vec<Vec<Point3<f64>>>) -> Result<Self, StructuralError> {
        let faces = loops
            .into_iter()
            .enumerate()
            .map(|(i, pts)| Face::new(pts).map_err(|e| e.at_face(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(faces)
    }

    fn from_faces_unchecked(faces: Vec<Face>) -> Self {
        Self {
            faces,
            topology: OnceLock::new(),
            symmetries: OnceLock::new(),
        }
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Derived vertices, edges and centroid (computed once).
    pub fn topology(&self) -> &Topology {
        self.topology.get_or_init(|| Topology::extract(&self.faces))
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.topology().vertices
    }

    #[inline]
    pub fn centroid(&self) -> Point3<f64> {
        self.topology().centroid
    }

    /// Check the solid's structural invariants; see `validate` for the order.
    pub fn validate(&self) -> Result<(), Error> {
        validate::validate(self)
    }

    /// Same solid: a face bijection with each pair identical-or-opposite.
    pub fn is_identical(&self, other: &Polyhedron) -> bool {
        identity::faces_match(&self.faces, &other.faces, Face::is_identical_or_opposite)
    }

    /// Same solid with every face traversed the other way.
    pub fn is_opposite(&self, other: &Polyhedron) -> bool {
        identity::faces_match(&self.faces, &other.faces, Face::is_opposite)
    }

    /// Confirmed symmetry sets (validated, searched once, cached).
    ///
    /// Scale: every comparison uses the absolute `geom3::EPS`, including
    /// squared centroid distances. Coordinates are expected at O(1) scale
    /// (roughly 1e-2 to 1e3); rescale inputs far outside that range first.
    pub fn symmetries(&self) -> Result<&Symmetries, Error> {
        if let Some(found) = self.symmetries.get() {
            return Ok(found);
        }
        self.validate()?;
        let found = find_symmetries(self);
        Ok(self.symmetries.get_or_init(|| found))
    }

    /// Schönflies point group of the solid. Same scale caveat as `symmetries`.
    pub fn point_group(&self) -> Result<PointGroup, Error> {
        let census = AxisCensus::from(self.symmetries()?);
        Ok(classify(&census)?)
    }
}

impl Transformable for Polyhedron {
    fn transformed(&self, f: &Affine3) -> Self {
        Self::from_faces_unchecked(self.faces.iter().map(|face| face.transformed(f)).collect())
    }
}

#[cfg(test)]
mod tests_special;
