//! Core 3D types: lines and planes with unit directions, plus their errors.

use std::fmt;

use nalgebra::{Point3, Unit, Vector3};

use super::cfg::{approx_eq, is_zero, vectors_eq};

/// Errors raised by primitive constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A direction or normal had zero length.
    ZeroLength,
    /// Three points meant to span a plane are collinear.
    CollinearPoints,
    /// A matrix offered as an isometry's linear part is not orthogonal.
    NotOrthogonal,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::ZeroLength => write!(f, "direction vector has zero length"),
            GeomError::CollinearPoints => write!(f, "points are collinear and span no plane"),
            GeomError::NotOrthogonal => write!(f, "linear part is not orthogonal"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Unit direction of a vector, rejecting (near-)zero input.
pub(crate) fn unit_dir(v: Vector3<f64>) -> Result<Unit<Vector3<f64>>, GeomError> {
    if is_zero(&v) {
        return Err(GeomError::ZeroLength);
    }
    Ok(Unit::new_normalize(v))
}

/// Infinite line `origin + s·dir`.
#[derive(Clone, Copy, Debug)]
pub struct Line3 {
    pub origin: Point3<f64>,
    pub dir: Unit<Vector3<f64>>,
}

impl Line3 {
    pub fn new(origin: Point3<f64>, dir: Vector3<f64>) -> Result<Self, GeomError> {
        Ok(Self {
            origin,
            dir: unit_dir(dir)?,
        })
    }

    /// Line through `a` and `b` (origin at `a`).
    pub fn through(a: Point3<f64>, b: Point3<f64>) -> Result<Self, GeomError> {
        Self::new(a, b - a)
    }

    /// Distance of `p` to the line.
    #[inline]
    pub fn distance(&self, p: &Point3<f64>) -> f64 {
        (p - self.origin).cross(&self.dir.into_inner()).norm()
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        approx_eq(self.distance(p), 0.0)
    }

    /// Same point set, either direction.
    pub fn is_identical_or_opposite(&self, other: &Line3) -> bool {
        let parallel = vectors_eq(&self.dir, &other.dir) || vectors_eq(&self.dir, &-other.dir.into_inner());
        parallel && self.contains(&other.origin)
    }
}

/// Plane through `point` with unit `normal`.
#[derive(Clone, Copy, Debug)]
pub struct Plane3 {
    pub point: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
}

impl Plane3 {
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Result<Self, GeomError> {
        Ok(Self {
            point,
            normal: unit_dir(normal)?,
        })
    }

    /// Plane through three points, normal `(b - a) × (c - a)`.
    pub fn from_points(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Result<Self, GeomError> {
        let n = (b - a).cross(&(c - a));
        Self::new(a, n).map_err(|_| GeomError::CollinearPoints)
    }

    /// The mirror plane exchanging `a` and `b`.
    pub fn perpendicular_bisector(a: Point3<f64>, b: Point3<f64>) -> Result<Self, GeomError> {
        Self::new(nalgebra::center(&a, &b), b - a)
    }

    /// Plane through `point` orthogonal to `line`.
    #[inline]
    pub fn perpendicular_to(line: &Line3, point: Point3<f64>) -> Self {
        Self {
            point,
            normal: line.dir,
        }
    }

    #[inline]
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        self.normal.dot(&(p - self.point))
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        approx_eq(self.signed_distance(p), 0.0)
    }

    /// Same point set, either orientation of the normal.
    pub fn is_identical_or_opposite(&self, other: &Plane3) -> bool {
        let parallel = vectors_eq(&self.normal, &other.normal)
            || vectors_eq(&self.normal, &-other.normal.into_inner());
        parallel && self.contains(&other.point)
    }
}
