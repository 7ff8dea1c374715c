//! JSON face-list input and the summary report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Point3;
use polysym::api::{Polyhedron, Symmetries};
use serde::{Deserialize, Serialize};

/// `{ "faces": [[[x, y, z], ...], ...] }`
#[derive(Debug, Deserialize)]
pub struct FaceList {
    pub faces: Vec<Vec<[f64; 3]>>,
}

impl FaceList {
    pub fn into_polyhedron(self) -> Result<Polyhedron> {
        let loops = self
            .faces
            .into_iter()
            .map(|face| face.into_iter().map(Point3::from).collect())
            .collect();
        Ok(Polyhedron::from_points(loops)?)
    }
}

pub fn read_faces(path: &Path) -> Result<Polyhedron> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let list: FaceList =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(faces = list.faces.len(), path = %path.display(), "input loaded");
    list.into_polyhedron()
        .with_context(|| format!("building polyhedron from {}", path.display()))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    pub label: String,
    pub alias: Option<&'static str>,
    pub group_order: usize,
    pub total_symmetries: usize,
    pub reflections: usize,
    pub rotation_axes: usize,
    pub proper_rotations: usize,
    pub rotoreflection_axes: usize,
    pub rotoreflections: usize,
    pub inversion: bool,
    pub faces: usize,
    pub vertices: usize,
    pub edges: usize,
}

impl Report {
    pub fn build(poly: &Polyhedron) -> Result<Self> {
        let group = poly.point_group().context("classifying polyhedron")?;
        let s: &Symmetries = poly.symmetries()?;
        let topo = poly.topology();
        Ok(Self {
            label: group.to_string(),
            alias: group.alias(),
            group_order: group.group_order(),
            total_symmetries: s.total_count(),
            reflections: s.reflection_planes.len(),
            rotation_axes: s.rotation_axes.len(),
            proper_rotations: s.proper_rotations().len(),
            rotoreflection_axes: s.rotoreflection_axes.len(),
            rotoreflections: s.rotoreflections().len(),
            inversion: s.inversion,
            faces: poly.faces().len(),
            vertices: topo.vertices.len(),
            edges: topo.edges.len(),
        })
    }

    pub fn summary(&self) -> String {
        let alias = self.alias.map(|a| format!(" ({a})")).unwrap_or_default();
        format!(
            "{}{alias}: {} symmetries, {} reflections, {} axes, {} rotoreflections, inversion: {}",
            self.label,
            self.total_symmetries,
            self.reflections,
            self.rotation_axes,
            self.rotoreflections,
            if self.inversion { "yes" } else { "no" },
        )
    }
}
