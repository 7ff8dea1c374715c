//! Canonical solids used in tests, benchmarks and the CLI.
//!
//! Purpose
//! - Provide the Platonic solids and the axial families (prisms, antiprisms,
//!   pyramids, bipyramids) with circumradius-1 cross sections, plus seeded
//!   random convex hulls.
//! - Everything goes through `hull::from_convex_vertices`, so face orientation
//!   is consistently outward.
//!
//! Expected point groups
//! - tetrahedron Td, cube/octahedron Oh, dodecahedron/icosahedron Ih;
//! - n-prism Dnh, n-antiprism Dnd, n-pyramid Cnv, n-bipyramid Dnh.

use std::f64::consts::TAU;

use nalgebra::{point, Point3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::from_convex_vertices;
use super::Polyhedron;
use crate::error::StructuralError;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

pub fn tetrahedron() -> Result<Polyhedron, StructuralError> {
    from_convex_vertices(&[
        point![1.0, 1.0, 1.0],
        point![1.0, -1.0, -1.0],
        point![-1.0, 1.0, -1.0],
        point![-1.0, -1.0, 1.0],
    ])
}

/// Cube `[-1,1]^3`.
pub fn cube() -> Result<Polyhedron, StructuralError> {
    let mut pts = Vec::with_capacity(8);
    for &x in &[-1.0, 1.0] {
        for &y in &[-1.0, 1.0] {
            for &z in &[-1.0, 1.0] {
                pts.push(point![x, y, z]);
            }
        }
    }
    from_convex_vertices(&pts)
}

pub fn octahedron() -> Result<Polyhedron, StructuralError> {
    from_convex_vertices(&[
        point![1.0, 0.0, 0.0],
        point![-1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
        point![0.0, -1.0, 0.0],
        point![0.0, 0.0, 1.0],
        point![0.0, 0.0, -1.0],
    ])
}

/// Cyclic permutations of `(0, ±a, ±b)`.
fn cyclic_pm(a: f64, b: f64, out: &mut Vec<Point3<f64>>) {
    for &sa in &[-1.0, 1.0] {
        for &sb in &[-1.0, 1.0] {
            out.push(point![0.0, sa * a, sb * b]);
            out.push(point![sa * a, sb * b, 0.0]);
            out.push(point![sb * b, 0.0, sa * a]);
        }
    }
}

pub fn icosahedron() -> Result<Polyhedron, StructuralError> {
    let mut pts = Vec::with_capacity(12);
    cyclic_pm(1.0, PHI, &mut pts);
    from_convex_vertices(&pts)
}

pub fn dodecahedron() -> Result<Polyhedron, StructuralError> {
    let mut pts = Vec::with_capacity(20);
    for &x in &[-1.0, 1.0] {
        for &y in &[-1.0, 1.0] {
            for &z in &[-1.0, 1.0] {
                pts.push(point![x, y, z]);
            }
        }
    }
    cyclic_pm(1.0 / PHI, PHI, &mut pts);
    from_convex_vertices(&pts)
}

fn ring(n: usize, phase: f64, z: f64) -> impl Iterator<Item = Point3<f64>> {
    (0..n).map(move |k| {
        let a = phase + TAU * k as f64 / n as f64;
        point![a.cos(), a.sin(), z]
    })
}

fn need_sides(n: usize) -> Result<(), StructuralError> {
    if n < 3 {
        return Err(StructuralError::TooFewPoints { face: 0, count: n });
    }
    Ok(())
}

/// Prism over a regular `n`-gon; `height` along z.
pub fn prism(n: usize, height: f64) -> Result<Polyhedron, StructuralError> {
    need_sides(n)?;
    let pts: Vec<_> = ring(n, 0.0, -height / 2.0)
        .chain(ring(n, 0.0, height / 2.0))
        .collect();
    from_convex_vertices(&pts)
}

/// Prism whose squares have the base edge as side.
pub fn regular_prism(n: usize) -> Result<Polyhedron, StructuralError> {
    prism(n, 2.0 * (std::f64::consts::PI / n as f64).sin())
}

/// Antiprism: top ring turned by `π/n`.
pub fn antiprism(n: usize, height: f64) -> Result<Polyhedron, StructuralError> {
    need_sides(n)?;
    let pts: Vec<_> = ring(n, 0.0, -height / 2.0)
        .chain(ring(n, TAU / (2 * n) as f64, height / 2.0))
        .collect();
    from_convex_vertices(&pts)
}

/// Pyramid with apex at `height` above the base plane.
pub fn pyramid(n: usize, height: f64) -> Result<Polyhedron, StructuralError> {
    need_sides(n)?;
    let mut pts: Vec<_> = ring(n, 0.0, 0.0).collect();
    pts.push(point![0.0, 0.0, height]);
    from_convex_vertices(&pts)
}

/// Two pyramids glued at the base; apexes at `±height`.
pub fn bipyramid(n: usize, height: f64) -> Result<Polyhedron, StructuralError> {
    need_sides(n)?;
    let mut pts: Vec<_> = ring(n, 0.0, 0.0).collect();
    pts.push(point![0.0, 0.0, height]);
    pts.push(point![0.0, 0.0, -height]);
    from_convex_vertices(&pts)
}

/// Convex hull of `n` seeded random points on the unit sphere.
pub fn random_hull(n: usize, seed: u64) -> Result<Polyhedron, StructuralError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pts = Vec::with_capacity(n);
    while pts.len() < n {
        let v = nalgebra::Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let r = v.norm();
        // rejection sampling keeps the direction uniform
        if r > 0.1 && r <= 1.0 {
            pts.push(Point3::from(v / r));
        }
    }
    from_convex_vertices(&pts)
}
