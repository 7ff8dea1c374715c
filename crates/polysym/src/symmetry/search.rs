//! Candidate verification and rotoreflection derivation.

use std::f64::consts::{PI, TAU};

use tracing::debug;

use super::candidates;
use super::types::{ReflectionPlane, RotationAxis, RotoreflectionAxis, Symmetries};
use crate::geom3::util::divisors_desc;
use crate::geom3::{Affine3, Transformable};
use crate::polyhedron::Polyhedron;

/// Search all symmetries of `poly`. Callers validate `poly` first.
pub(crate) fn find_symmetries(poly: &Polyhedron) -> Symmetries {
    let topo = poly.topology();
    let c = topo.centroid;
    let verts = &topo.vertices;
    let holds = |f: &Affine3| poly.transformed(f).is_identical(poly);

    let two = candidates::two_fold(verts, &c);
    let high = candidates::higher_order(verts, &c);
    let mirrors = candidates::mirror_planes(verts, &c);
    debug!(
        vertices = verts.len(),
        two_fold = two.len(),
        higher_order = high.len(),
        mirrors = mirrors.len(),
        "symmetry candidates"
    );

    let mut rotation_axes: Vec<RotationAxis> = Vec::new();
    for cand in &high {
        // Largest divisor of the provisional order that reproduces the solid.
        let confirmed = divisors_desc(cand.order, 3)
            .into_iter()
            .find(|&d| holds(&Affine3::rotation(&cand.line, TAU / d as f64)));
        if let Some(order) = confirmed {
            rotation_axes.push(RotationAxis {
                line: cand.line,
                order,
            });
        }
    }
    for line in &two {
        // Half-turns about an even higher-order axis belong to that axis.
        if rotation_axes
            .iter()
            .any(|a| a.line.is_identical_or_opposite(line))
        {
            continue;
        }
        if holds(&Affine3::rotation(line, PI)) {
            rotation_axes.push(RotationAxis {
                line: *line,
                order: 2,
            });
        }
    }
    rotation_axes.sort_by(|a, b| b.order.cmp(&a.order));

    let reflection_planes: Vec<ReflectionPlane> = mirrors
        .into_iter()
        .filter(|plane| holds(&Affine3::reflection(plane)))
        .map(|plane| ReflectionPlane { plane })
        .collect();

    let inversion = holds(&Affine3::inversion(c));

    let rotoreflection_axes: Vec<RotoreflectionAxis> = rotation_axes
        .iter()
        .filter(|axis| holds(&Affine3::rotoreflection(&axis.line, PI / axis.order as f64)))
        .map(|axis| RotoreflectionAxis {
            line: axis.line,
            order: 2 * axis.order,
            center: c,
        })
        .collect();

    debug!(
        rotation_axes = rotation_axes.len(),
        reflections = reflection_planes.len(),
        rotoreflection_axes = rotoreflection_axes.len(),
        inversion,
        "symmetries confirmed"
    );

    Symmetries {
        centroid: c,
        rotation_axes,
        reflection_planes,
        rotoreflection_axes,
        inversion,
    }
}
