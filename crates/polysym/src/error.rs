//! Error taxonomy: structural (input shape), validation (derived topology),
//! classification (point-group decision), plus the crate-level wrapper.

use std::fmt;

use crate::geom3::GeomError;
use crate::point_group::ClassificationError;

/// The face list cannot describe a solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructuralError {
    TooFewFaces { count: usize },
    TooFewVertices { count: usize },
    TooFewPoints { face: usize, count: usize },
    ZeroLengthEdge { face: usize, side: usize },
    /// Sides `side` and `side + 1` are collinear.
    CollinearEdges { face: usize, side: usize },
    NonPlanar { face: usize, point: usize },
}

impl StructuralError {
    /// Relabel a face-local error with the face's index in its polyhedron.
    pub(crate) fn at_face(self, index: usize) -> Self {
        match self {
            Self::TooFewPoints { count, .. } => Self::TooFewPoints { face: index, count },
            Self::ZeroLengthEdge { side, .. } => Self::ZeroLengthEdge { face: index, side },
            Self::CollinearEdges { side, .. } => Self::CollinearEdges { face: index, side },
            Self::NonPlanar { point, .. } => Self::NonPlanar { face: index, point },
            other => other,
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFaces { count } => write!(f, "polyhedron needs at least 4 faces, got {count}"),
            Self::TooFewVertices { count } => {
                write!(f, "polyhedron needs at least 4 vertices, got {count}")
            }
            Self::TooFewPoints { face, count } => {
                write!(f, "face {face} needs at least 3 points, got {count}")
            }
            Self::ZeroLengthEdge { face, side } => {
                write!(f, "face {face} has a zero-length edge at side {side}")
            }
            Self::CollinearEdges { face, side } => write!(
                f,
                "face {face} has collinear consecutive edges at sides {side} and {}",
                side + 1
            ),
            Self::NonPlanar { face, point } => {
                write!(f, "face {face} is not planar (point {point} off the face plane)")
            }
        }
    }
}

impl std::error::Error for StructuralError {}

/// The derived topology violates a solid's invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    LowValence { vertex: usize, count: usize },
    EdgeMultiplicity { edge: usize, count: usize },
    /// Two edge-adjacent faces are coplanar (dihedral angle π).
    FlatDihedral { edge: usize, faces: (usize, usize) },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowValence { vertex, count } => {
                write!(f, "vertex {vertex} lies on {count} faces (needs at least 3)")
            }
            Self::EdgeMultiplicity { edge, count } => {
                write!(f, "edge {edge} lies on {count} faces (needs exactly 2)")
            }
            Self::FlatDihedral { edge, faces } => write!(
                f,
                "faces {} and {} meet flat along edge {edge}",
                faces.0, faces.1
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Crate-level error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Geometry(GeomError),
    Structural(StructuralError),
    Validation(ValidationError),
    Classification(ClassificationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Geometry(e) => write!(f, "geometry error: {e}"),
            Error::Structural(e) => write!(f, "structural error: {e}"),
            Error::Validation(e) => write!(f, "validation error: {e}"),
            Error::Classification(e) => write!(f, "classification error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Geometry(e) => Some(e),
            Error::Structural(e) => Some(e),
            Error::Validation(e) => Some(e),
            Error::Classification(e) => Some(e),
        }
    }
}

impl From<GeomError> for Error {
    fn from(e: GeomError) -> Self {
        Error::Geometry(e)
    }
}

impl From<StructuralError> for Error {
    fn from(e: StructuralError) -> Self {
        Error::Structural(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<ClassificationError> for Error {
    fn from(e: ClassificationError) -> Self {
        Error::Classification(e)
    }
}
