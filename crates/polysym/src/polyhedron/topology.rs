//! Vertex/edge extraction from a raw face list.
//!
//! Vertices are deduplicated with the shared point tolerance in first-seen
//! order. Edges are then keyed by their (unordered) vertex-index pair, which
//! is the same relation as identical-or-opposite segment equality once the
//! endpoints have been merged.

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use super::face::Face;
use crate::geom3::points_eq;

/// Undirected edge; `vertices` keeps the direction of its first occurrence.
#[derive(Clone, Debug)]
pub struct Edge {
    pub vertices: (usize, usize),
    /// `(face, side)` pairs; side `s` runs from local point `s` to `s + 1`.
    pub faces: Vec<(usize, usize)>,
}

/// Derived incidence structure of a polyhedron.
#[derive(Clone, Debug)]
pub struct Topology {
    pub vertices: Vec<Point3<f64>>,
    /// Per vertex: `(face, local index)` occurrences.
    pub vertex_faces: Vec<Vec<(usize, usize)>>,
    /// Per face: global vertex index of each local point.
    pub face_vertices: Vec<Vec<usize>>,
    pub edges: Vec<Edge>,
    /// False once any edge is traversed twice in the same direction.
    pub oriented: bool,
    /// Arithmetic mean of the vertices.
    pub centroid: Point3<f64>,
}

impl Topology {
    pub(crate) fn extract(faces: &[Face]) -> Self {
        let mut vertices: Vec<Point3<f64>> = Vec::new();
        let mut vertex_faces: Vec<Vec<(usize, usize)>> = Vec::new();
        let mut face_vertices: Vec<Vec<usize>> = Vec::with_capacity(faces.len());
        for (fi, face) in faces.iter().enumerate() {
            let mut idxs = Vec::with_capacity(face.len());
            for (li, p) in face.points().iter().enumerate() {
                let vi = match vertices.iter().position(|v| points_eq(v, p)) {
                    Some(vi) => vi,
                    None => {
                        vertices.push(*p);
                        vertex_faces.push(Vec::new());
                        vertices.len() - 1
                    }
                };
                vertex_faces[vi].push((fi, li));
                idxs.push(vi);
            }
            face_vertices.push(idxs);
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut by_key: HashMap<(usize, usize), usize> = HashMap::new();
        let mut oriented = true;
        for (fi, idxs) in face_vertices.iter().enumerate() {
            let n = idxs.len();
            for side in 0..n {
                let (a, b) = (idxs[side], idxs[(side + 1) % n]);
                let key = (a.min(b), a.max(b));
                match by_key.get(&key) {
                    Some(&ei) => {
                        if edges[ei].vertices == (a, b) {
                            oriented = false;
                        }
                        edges[ei].faces.push((fi, side));
                    }
                    None => {
                        by_key.insert(key, edges.len());
                        edges.push(Edge {
                            vertices: (a, b),
                            faces: vec![(fi, side)],
                        });
                    }
                }
            }
        }

        let centroid = if vertices.is_empty() {
            Point3::origin()
        } else {
            let sum = vertices
                .iter()
                .fold(Vector3::zeros(), |acc, v| acc + v.coords);
            Point3::from(sum / vertices.len() as f64)
        };

        Self {
            vertices,
            vertex_faces,
            face_vertices,
            edges,
            oriented,
            centroid,
        }
    }

    /// Number of faces meeting at vertex `v`.
    #[inline]
    pub fn valence(&self, v: usize) -> usize {
        self.vertex_faces[v].len()
    }
}
