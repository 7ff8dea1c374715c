//! Structural invariants over the derived topology.

use crate::error::{Error, StructuralError, ValidationError};
use crate::geom3::is_zero;

use super::Polyhedron;

/// Report the first violated invariant, checked in this order: face shape,
/// vertex count, vertex valence, edge multiplicity, flat dihedral angles.
pub(crate) fn validate(poly: &Polyhedron) -> Result<(), Error> {
    for (i, face) in poly.faces().iter().enumerate() {
        face.check().map_err(|e| e.at_face(i))?;
    }
    let topo = poly.topology();
    if topo.vertices.len() < 4 {
        return Err(StructuralError::TooFewVertices {
            count: topo.vertices.len(),
        }
        .into());
    }
    for v in 0..topo.vertices.len() {
        let count = topo.valence(v);
        if count < 3 {
            return Err(ValidationError::LowValence { vertex: v, count }.into());
        }
    }
    for (ei, edge) in topo.edges.iter().enumerate() {
        if edge.faces.len() != 2 {
            return Err(ValidationError::EdgeMultiplicity {
                edge: ei,
                count: edge.faces.len(),
            }
            .into());
        }
    }
    let normals: Vec<_> = poly.faces().iter().map(|f| f.normal().into_inner()).collect();
    for (ei, edge) in topo.edges.iter().enumerate() {
        let (fa, fb) = (edge.faces[0].0, edge.faces[1].0);
        // Parallel normals: the faces are coplanar along the shared edge.
        if is_zero(&normals[fa].cross(&normals[fb])) {
            return Err(ValidationError::FlatDihedral {
                edge: ei,
                faces: (fa, fb),
            }
            .into());
        }
    }
    Ok(())
}
