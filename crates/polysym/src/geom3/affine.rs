//! Orthogonal affine maps `x ↦ M x + t` and the `Transformable` contract.

use nalgebra::{Matrix3, Point3, Rotation3, Unit, Vector3};

use super::cfg::{vectors_eq, EPS};
use super::types::{GeomError, Line3, Plane3};

/// 3D affine map with orthogonal linear part.
///
/// Invariants:
/// - `m^T m ≈ I` (checked by `from_parts`, guaranteed by the named constructors).
/// - Composition of two `Affine3` values keeps the invariant.
#[derive(Clone, Copy, Debug)]
pub struct Affine3 {
    m: Matrix3<f64>,
    t: Vector3<f64>,
}

impl Affine3 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::zeros(),
        }
    }

    /// Checked construction from raw parts.
    pub fn from_parts(m: Matrix3<f64>, t: Vector3<f64>) -> Result<Self, GeomError> {
        if (m.transpose() * m - Matrix3::identity()).amax() > EPS {
            return Err(GeomError::NotOrthogonal);
        }
        Ok(Self { m, t })
    }

    /// Right-handed rotation by `angle` about `axis`.
    pub fn rotation(axis: &Line3, angle: f64) -> Self {
        let r = Rotation3::from_axis_angle(&axis.dir, angle).into_inner();
        let o = axis.origin.coords;
        Self { m: r, t: o - r * o }
    }

    /// Mirror through `plane`.
    pub fn reflection(plane: &Plane3) -> Self {
        let n = plane.normal.into_inner();
        let m = Matrix3::identity() - n * n.transpose() * 2.0;
        let t = n * (2.0 * n.dot(&plane.point.coords));
        Self { m, t }
    }

    /// Point inversion `x ↦ 2c - x`.
    pub fn inversion(center: Point3<f64>) -> Self {
        Self {
            m: -Matrix3::identity(),
            t: center.coords * 2.0,
        }
    }

    /// Rotation by `angle` about `axis` followed by the mirror through the plane
    /// orthogonal to `axis` at `axis.origin`.
    pub fn rotoreflection(axis: &Line3, angle: f64) -> Self {
        let mirror = Plane3::perpendicular_to(axis, axis.origin);
        Self::rotation(axis, angle).then(&Self::reflection(&mirror))
    }

    /// `self` first, then `next`.
    #[inline]
    pub fn then(&self, next: &Affine3) -> Self {
        Self {
            m: next.m * self.m,
            t: next.m * self.t + next.t,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        let mt = self.m.transpose();
        Self {
            m: mt,
            t: -(mt * self.t),
        }
    }

    #[inline]
    pub fn linear(&self) -> &Matrix3<f64> {
        &self.m
    }

    #[inline]
    pub fn translation(&self) -> &Vector3<f64> {
        &self.t
    }

    /// Orientation-preserving (rotation or identity).
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.m.determinant() > 0.0
    }

    #[inline]
    pub fn apply_point(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.m * p.coords + self.t)
    }

    #[inline]
    pub fn apply_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.m * v
    }

    pub fn approx_eq(&self, other: &Affine3) -> bool {
        (self.m - other.m).amax() <= EPS && vectors_eq(&self.t, &other.t)
    }
}

/// Values that can be pushed forward under an `Affine3`.
///
/// Every implementor returns its own type; no implementation can fail because
/// `Affine3` never collapses a direction.
pub trait Transformable: Sized {
    fn transformed(&self, f: &Affine3) -> Self;
}

impl Transformable for Point3<f64> {
    #[inline]
    fn transformed(&self, f: &Affine3) -> Self {
        f.apply_point(self)
    }
}

impl Transformable for Line3 {
    fn transformed(&self, f: &Affine3) -> Self {
        Line3 {
            origin: f.apply_point(&self.origin),
            dir: Unit::new_normalize(f.apply_vector(&self.dir)),
        }
    }
}

impl Transformable for Plane3 {
    fn transformed(&self, f: &Affine3) -> Self {
        Plane3 {
            point: f.apply_point(&self.point),
            normal: Unit::new_normalize(f.apply_vector(&self.normal)),
        }
    }
}
