//! Confirmed symmetry elements and the operations they generate.

use std::f64::consts::TAU;

use nalgebra::Point3;

use crate::geom3::{Affine3, Line3, Plane3, Transformable};

/// Proper rotation axis; rotating by `2π/order` maps the solid onto itself and
/// `order` is maximal.
#[derive(Clone, Copy, Debug)]
pub struct RotationAxis {
    pub line: Line3,
    pub order: u32,
}

/// Improper rotation axis of even `order`: rotation by `2π/order` followed by
/// the mirror orthogonal to the axis at `center`.
#[derive(Clone, Copy, Debug)]
pub struct RotoreflectionAxis {
    pub line: Line3,
    pub order: u32,
    pub center: Point3<f64>,
}

#[derive(Clone, Copy, Debug)]
pub struct ReflectionPlane {
    pub plane: Plane3,
}

/// A single rigid symmetry operation.
#[derive(Clone, Copy, Debug)]
pub enum SymOp {
    Identity,
    Rotation { axis: Line3, angle: f64 },
    Reflection { plane: Plane3 },
    Inversion { center: Point3<f64> },
    /// Rotation about `axis` then mirror orthogonal to it at `axis.origin`.
    Rotoreflection { axis: Line3, angle: f64 },
}

impl SymOp {
    pub fn to_affine(&self) -> Affine3 {
        match self {
            SymOp::Identity => Affine3::identity(),
            SymOp::Rotation { axis, angle } => Affine3::rotation(axis, *angle),
            SymOp::Reflection { plane } => Affine3::reflection(plane),
            SymOp::Inversion { center } => Affine3::inversion(*center),
            SymOp::Rotoreflection { axis, angle } => Affine3::rotoreflection(axis, *angle),
        }
    }

    #[inline]
    pub fn is_proper(&self) -> bool {
        matches!(self, SymOp::Identity | SymOp::Rotation { .. })
    }
}

/// Apply a symmetry operation to any transformable value.
pub fn apply<T: Transformable>(value: &T, op: &SymOp) -> T {
    value.transformed(&op.to_affine())
}

/// Point groups of bounded solids have at most 120 elements (Ih).
const MAX_GROUP_ORDER: usize = 120;

/// Everything the search confirmed for one polyhedron.
#[derive(Clone, Debug)]
pub struct Symmetries {
    pub centroid: Point3<f64>,
    pub rotation_axes: Vec<RotationAxis>,
    pub reflection_planes: Vec<ReflectionPlane>,
    pub rotoreflection_axes: Vec<RotoreflectionAxis>,
    pub inversion: bool,
}

impl Symmetries {
    /// Axes of order at least 3.
    pub fn high_order_axes(&self) -> impl Iterator<Item = &RotationAxis> {
        self.rotation_axes.iter().filter(|a| a.order >= 3)
    }

    /// `k·2π/n` for `k = 1..n` on every axis (identity excluded).
    pub fn proper_rotations(&self) -> Vec<SymOp> {
        let mut out = Vec::new();
        for axis in &self.rotation_axes {
            for k in 1..axis.order {
                out.push(SymOp::Rotation {
                    axis: axis.line,
                    angle: TAU * k as f64 / axis.order as f64,
                });
            }
        }
        out
    }

    pub fn reflections(&self) -> Vec<SymOp> {
        self.reflection_planes
            .iter()
            .map(|p| SymOp::Reflection { plane: p.plane })
            .collect()
    }

    /// Odd powers `S_n^i`, `i = 1, 3, .., n-1`, on every rotoreflection axis.
    ///
    /// Listed per axis; `S_n^{n/2}` is the inversion whenever `n/2` is odd, so
    /// the same operation may appear on several axes.
    pub fn rotoreflections(&self) -> Vec<SymOp> {
        let mut out = Vec::new();
        for axis in &self.rotoreflection_axes {
            let line = Line3 {
                origin: axis.center,
                dir: axis.line.dir,
            };
            for i in (1..axis.order).step_by(2) {
                out.push(SymOp::Rotoreflection {
                    axis: line,
                    angle: TAU * i as f64 / axis.order as f64,
                });
            }
        }
        out
    }

    pub fn inversion_op(&self) -> Option<SymOp> {
        self.inversion.then_some(SymOp::Inversion {
            center: self.centroid,
        })
    }

    /// Identity plus every listed operation, with coinciding maps removed.
    pub fn operations(&self) -> Vec<SymOp> {
        let mut ops: Vec<SymOp> = Vec::new();
        let mut maps: Vec<Affine3> = Vec::new();
        let listed = std::iter::once(SymOp::Identity)
            .chain(self.proper_rotations())
            .chain(self.reflections())
            .chain(self.rotoreflections())
            .chain(self.inversion_op());
        for op in listed {
            let f = op.to_affine();
            if !maps.iter().any(|g| g.approx_eq(&f)) {
                maps.push(f);
                ops.push(op);
            }
        }
        ops
    }

    /// The full symmetry group: closure of `operations()` under composition.
    pub fn group(&self) -> Vec<Affine3> {
        let gens: Vec<Affine3> = self.operations().iter().map(SymOp::to_affine).collect();
        let mut elems = vec![Affine3::identity()];
        let mut i = 0;
        while i < elems.len() {
            let e = elems[i];
            for g in &gens {
                let p = e.then(g);
                if !elems.iter().any(|x| x.approx_eq(&p)) {
                    elems.push(p);
                }
            }
            if elems.len() > MAX_GROUP_ORDER {
                tracing::warn!(order = elems.len(), "symmetry closure exceeds 120 elements");
                break;
            }
            i += 1;
        }
        elems
    }

    /// Order of the symmetry group (identity included).
    pub fn total_count(&self) -> usize {
        self.group().len()
    }
}
