//! Candidate axes and mirror planes proposed from vertex geometry.

use nalgebra::{center, Point3};

use crate::geom3::util::{combinations, gcd};
use crate::geom3::{approx_eq, Line3, Plane3};

/// Axis through the centroid with an upper bound on its rotation order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisCandidate {
    pub line: Line3,
    pub order: u32,
}

/// Absolute tolerance on squared distances; see the scale note in `geom3::cfg`.
#[inline]
fn equidistant(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> bool {
    approx_eq((a - c).norm_squared(), (b - c).norm_squared())
}

fn push_unique_line(out: &mut Vec<Line3>, line: Line3) {
    if !out.iter().any(|l| l.is_identical_or_opposite(&line)) {
        out.push(line);
    }
}

fn index_list(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Lines through the centroid and the midpoint of each equidistant vertex
/// pair, plus lines through the centroid and each vertex.
pub(crate) fn two_fold(verts: &[Point3<f64>], c: &Point3<f64>) -> Vec<Line3> {
    let mut out = Vec::new();
    for pair in combinations(&index_list(verts.len()), 2) {
        let (a, b) = (&verts[pair[0]], &verts[pair[1]]);
        if !equidistant(a, b, c) {
            continue;
        }
        // Antipodal pairs have their midpoint on the centroid.
        if let Ok(line) = Line3::through(*c, center(a, b)) {
            push_unique_line(&mut out, line);
        }
    }
    for v in verts {
        if let Ok(line) = Line3::through(*c, *v) {
            push_unique_line(&mut out, line);
        }
    }
    out
}

/// Normals of planes through mutually equidistant vertex triples.
///
/// The provisional order is the number of vertices on the layer plane through
/// the triple; two estimates for the same axis are reduced to their GCD.
pub(crate) fn higher_order(verts: &[Point3<f64>], c: &Point3<f64>) -> Vec<AxisCandidate> {
    let mut out: Vec<AxisCandidate> = Vec::new();
    for tri in combinations(&index_list(verts.len()), 3) {
        let (a, b, d) = (&verts[tri[0]], &verts[tri[1]], &verts[tri[2]]);
        if !(equidistant(a, b, c) && equidistant(a, d, c)) {
            continue;
        }
        let normal = (b - a).cross(&(d - a));
        let Ok(line) = Line3::new(*c, normal) else {
            continue;
        };
        let layer = Plane3::perpendicular_to(&line, *a);
        let count = verts.iter().filter(|v| layer.contains(v)).count() as u32;
        match out.iter_mut().find(|k| k.line.is_identical_or_opposite(&line)) {
            Some(known) => {
                if known.order != count {
                    known.order = gcd(known.order, count);
                }
            }
            None => out.push(AxisCandidate { line, order: count }),
        }
    }
    out
}

/// Perpendicular bisectors of vertex pairs. Only pairs equidistant from the
/// centroid can be exchanged by a mirror through it.
pub(crate) fn mirror_planes(verts: &[Point3<f64>], c: &Point3<f64>) -> Vec<Plane3> {
    let mut out: Vec<Plane3> = Vec::new();
    for pair in combinations(&index_list(verts.len()), 2) {
        let (a, b) = (&verts[pair[0]], &verts[pair[1]]);
        if !equidistant(a, b, c) {
            continue;
        }
        let Ok(plane) = Plane3::perpendicular_bisector(*a, *b) else {
            continue;
        };
        if !out.iter().any(|p| p.is_identical_or_opposite(&plane)) {
            out.push(plane);
        }
    }
    out
}
