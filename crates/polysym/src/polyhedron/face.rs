//! Planar polygon faces and their cyclic equality relations.

use nalgebra::{Point3, Unit, Vector3};

use crate::error::StructuralError;
use crate::geom3::{approx_eq, is_zero, points_eq, Affine3, Transformable};

/// Ordered, cyclic sequence of at least 3 coplanar points.
///
/// Invariants (checked by `Face::new`):
/// - no zero-length side, no two consecutive collinear sides;
/// - every point lies on the plane of the Newell normal through point 0.
#[derive(Clone, Debug)]
pub struct Face {
    points: Vec<Point3<f64>>,
}

impl Face {
    pub fn new(points: Vec<Point3<f64>>) -> Result<Self, StructuralError> {
        check_points(&points)?;
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Re-run the construction checks (face index reported as 0).
    pub fn check(&self) -> Result<(), StructuralError> {
        check_points(&self.points)
    }

    /// Unit normal by Newell's method; follows the traversal direction
    /// (counter-clockwise seen from the side it points to).
    pub fn normal(&self) -> Unit<Vector3<f64>> {
        Unit::new_normalize(newell(&self.points))
    }

    pub fn centroid(&self) -> Point3<f64> {
        let sum = self
            .points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / self.points.len() as f64)
    }

    /// Opposite traversal direction.
    pub fn reversed(&self) -> Face {
        let mut points = self.points.clone();
        points.reverse();
        Face { points }
    }

    /// Same cyclic sequence, any starting point.
    pub fn is_identical(&self, other: &Face) -> bool {
        cyclic_match(&self.points, &other.points, false)
    }

    /// Same cyclic sequence traversed backwards.
    pub fn is_opposite(&self, other: &Face) -> bool {
        cyclic_match(&self.points, &other.points, true)
    }

    pub fn is_identical_or_opposite(&self, other: &Face) -> bool {
        self.is_identical(other) || self.is_opposite(other)
    }
}

impl Transformable for Face {
    fn transformed(&self, f: &Affine3) -> Self {
        Face {
            points: self.points.iter().map(|p| f.apply_point(p)).collect(),
        }
    }
}

fn newell(points: &[Point3<f64>]) -> Vector3<f64> {
    let p0 = points[0];
    let n = points.len();
    let mut acc = Vector3::zeros();
    for i in 0..n {
        let a = points[i] - p0;
        let b = points[(i + 1) % n] - p0;
        acc += a.cross(&b);
    }
    acc
}

fn check_points(points: &[Point3<f64>]) -> Result<(), StructuralError> {
    let n = points.len();
    if n < 3 {
        return Err(StructuralError::TooFewPoints { face: 0, count: n });
    }
    let mut sides = Vec::with_capacity(n);
    for i in 0..n {
        let side = points[(i + 1) % n] - points[i];
        if is_zero(&side) {
            return Err(StructuralError::ZeroLengthEdge { face: 0, side: i });
        }
        sides.push(side.normalize());
    }
    for i in 0..n {
        // sin of the turning angle between consecutive unit sides
        if is_zero(&sides[i].cross(&sides[(i + 1) % n])) {
            return Err(StructuralError::CollinearEdges { face: 0, side: i });
        }
    }
    let normal = newell(points);
    if is_zero(&normal) {
        return Err(StructuralError::NonPlanar { face: 0, point: 0 });
    }
    let normal = normal.normalize();
    for (i, p) in points.iter().enumerate() {
        if !approx_eq(normal.dot(&(p - points[0])), 0.0) {
            return Err(StructuralError::NonPlanar { face: 0, point: i });
        }
    }
    Ok(())
}

fn cyclic_match(a: &[Point3<f64>], b: &[Point3<f64>], reverse: bool) -> bool {
    let n = a.len();
    if n != b.len() || n == 0 {
        return false;
    }
    (0..n).filter(|&s| points_eq(&a[0], &b[s])).any(|s| {
        (0..n).all(|i| {
            let j = if reverse { (s + n - i) % n } else { (s + i) % n };
            points_eq(&a[i], &b[j])
        })
    })
}
