//! Convex polyhedron from a point cloud via supporting planes.
//!
//! Algorithm
//! - Deduplicate points with the shared tolerance.
//! - For each point triple spanning a plane, keep the plane if every point is
//!   on one side; orient its normal outward.
//! - Group points on each kept plane into one face (keyed by the index set)
//!   and keep the extreme ones, counter-clockwise about the outward normal.
//!   Face centres and edge midpoints never become vertices.
//!
//! Complexity O(V^4). Meant for test solids and small inputs.

use std::cmp::Ordering;
use std::collections::HashSet;

use nalgebra::{Point3, Unit, Vector2, Vector3};

use super::{Face, Polyhedron};
use crate::error::StructuralError;
use crate::geom3::util::combinations;
use crate::geom3::{points_eq, Plane3, EPS};

pub fn from_convex_vertices(points: &[Point3<f64>]) -> Result<Polyhedron, StructuralError> {
    let mut pts: Vec<Point3<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if !pts.iter().any(|q| points_eq(p, q)) {
            pts.push(*p);
        }
    }
    if pts.len() < 4 {
        return Err(StructuralError::TooFewVertices { count: pts.len() });
    }
    let idxs: Vec<usize> = (0..pts.len()).collect();
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut faces = Vec::new();
    for tri in combinations(&idxs, 3) {
        let Ok(plane) = Plane3::from_points(pts[tri[0]], pts[tri[1]], pts[tri[2]]) else {
            continue;
        };
        let mut above = false;
        let mut below = false;
        for p in &pts {
            let d = plane.signed_distance(p);
            above |= d > EPS;
            below |= d < -EPS;
        }
        // Flat clouds have no supporting plane with points off it.
        if above == below {
            continue;
        }
        let outward = if above { -plane.normal } else { plane.normal };
        let on: Vec<usize> = idxs.iter().copied().filter(|&i| plane.contains(&pts[i])).collect();
        if !seen.insert(on.clone()) {
            continue;
        }
        let loop_pts: Vec<Point3<f64>> = on.iter().map(|&i| pts[i]).collect();
        let index = faces.len();
        faces.push(Face::new(face_loop(&loop_pts, outward)).map_err(|e| e.at_face(index))?);
    }
    Polyhedron::new(faces)
}

/// Extreme points of a coplanar set, counter-clockwise seen from the tip of
/// `normal` (monotone chain in the face plane). Points on a hull side or
/// inside the polygon are dropped so no two consecutive sides are collinear.
fn face_loop(points: &[Point3<f64>], normal: Unit<Vector3<f64>>) -> Vec<Point3<f64>> {
    let p0 = points[0];
    let far = points.iter().map(|p| p - p0).fold(Vector3::zeros(), |best, d| {
        if d.norm_squared() > best.norm_squared() {
            d
        } else {
            best
        }
    });
    // (u, w, normal) is right-handed, so CCW in (u, w) is CCW about `normal`.
    let u = far.normalize();
    let w = normal.cross(&u);
    let mut keyed: Vec<(Vector2<f64>, Point3<f64>)> = points
        .iter()
        .map(|p| {
            let d = p - p0;
            (Vector2::new(u.dot(&d), w.dot(&d)), *p)
        })
        .collect();
    keyed.sort_by(|a, b| match a.0.x.partial_cmp(&b.0.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.0.y.partial_cmp(&b.0.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    let mut lower: Vec<(Vector2<f64>, Point3<f64>)> = Vec::with_capacity(keyed.len());
    for k in &keyed {
        while lower.len() >= 2
            && turn(lower[lower.len() - 2].0, lower[lower.len() - 1].0, k.0) <= EPS
        {
            lower.pop();
        }
        lower.push(*k);
    }
    let mut upper: Vec<(Vector2<f64>, Point3<f64>)> = Vec::with_capacity(keyed.len());
    for k in keyed.iter().rev() {
        while upper.len() >= 2
            && turn(upper[upper.len() - 2].0, upper[upper.len() - 1].0, k.0) <= EPS
        {
            upper.pop();
        }
        upper.push(*k);
    }
    lower.pop();
    upper.pop();
    lower.into_iter().chain(upper).map(|(_, p)| p).collect()
}

/// Twice the signed area of `(a, b, c)`; positive for a left turn.
#[inline]
fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
