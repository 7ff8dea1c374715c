use super::*;
use crate::geom3::{points_eq, Affine3, Line3, Plane3, Transformable};
use crate::polyhedron::{hull, special, Polyhedron};
use nalgebra::{point, vector, Matrix3, Point3, Vector3};
use proptest::prelude::*;
use std::f64::consts::TAU;

/// Observable counts of one search result.
#[derive(Debug, PartialEq, Eq)]
struct Counts {
    total: usize,
    reflections: usize,
    axes: usize,
    proper_rotations: usize,
    rotoreflection_axes: usize,
    rotoreflections: usize,
    inversion: bool,
}

fn counts(poly: &Polyhedron) -> Counts {
    let s = poly.symmetries().unwrap();
    Counts {
        total: s.total_count(),
        reflections: s.reflection_planes.len(),
        axes: s.rotation_axes.len(),
        proper_rotations: s.proper_rotations().len(),
        rotoreflection_axes: s.rotoreflection_axes.len(),
        rotoreflections: s.rotoreflections().len(),
        inversion: s.inversion,
    }
}

fn label(poly: &Polyhedron) -> String {
    poly.point_group().unwrap().to_string()
}

#[test]
fn tetrahedron_is_td() {
    let t = special::tetrahedron().unwrap();
    assert_eq!(label(&t), "Td");
    assert_eq!(
        counts(&t),
        Counts {
            total: 24,
            reflections: 6,
            axes: 7,
            proper_rotations: 11,
            rotoreflection_axes: 3,
            rotoreflections: 6,
            inversion: false,
        }
    );
}

#[test]
fn cube_and_octahedron_are_oh() {
    let expected = Counts {
        total: 48,
        reflections: 9,
        axes: 13,
        proper_rotations: 23,
        rotoreflection_axes: 4,
        rotoreflections: 12,
        inversion: true,
    };
    for poly in [special::cube().unwrap(), special::octahedron().unwrap()] {
        assert_eq!(label(&poly), "Oh");
        assert_eq!(counts(&poly), expected);
    }
}

#[test]
fn icosahedron_and_dodecahedron_are_ih() {
    let expected = Counts {
        total: 120,
        reflections: 15,
        axes: 31,
        proper_rotations: 59,
        rotoreflection_axes: 16,
        rotoreflections: 60,
        inversion: true,
    };
    for poly in [special::icosahedron().unwrap(), special::dodecahedron().unwrap()] {
        assert_eq!(label(&poly), "Ih");
        assert_eq!(counts(&poly), expected);
    }
}

#[test]
fn pentagonal_prism_is_d5h() {
    let p = special::regular_prism(5).unwrap();
    assert_eq!(label(&p), "D5h");
    assert_eq!(
        counts(&p),
        Counts {
            total: 20,
            reflections: 6,
            axes: 6,
            proper_rotations: 9,
            rotoreflection_axes: 0,
            rotoreflections: 0,
            inversion: false,
        }
    );
}

#[test]
fn pentagonal_antiprism_is_d5d() {
    let a = special::antiprism(5, 1.0).unwrap();
    assert_eq!(label(&a), "D5d");
    assert_eq!(
        counts(&a),
        Counts {
            total: 20,
            reflections: 5,
            axes: 6,
            proper_rotations: 9,
            rotoreflection_axes: 1,
            rotoreflections: 5,
            inversion: true,
        }
    );
    let s = a.symmetries().unwrap();
    assert_eq!(s.rotoreflection_axes[0].order, 10);
    assert!(s.rotoreflection_axes[0]
        .line
        .is_identical_or_opposite(&s.rotation_axes[0].line));
}

#[test]
fn scalene_tetrahedron_is_c1() {
    let o = point![0.0, 0.0, 0.0];
    let x = point![1.0, 0.0, 0.0];
    let y = point![0.0, 2.0, 0.0];
    let z = point![0.0, 0.0, 3.0];
    let t = Polyhedron::from_points(vec![
        vec![o, y, x],
        vec![o, x, z],
        vec![o, z, y],
        vec![x, y, z],
    ])
    .unwrap();
    assert_eq!(label(&t), "C1");
    assert_eq!(counts(&t).total, 1);
    assert_eq!(t.symmetries().unwrap().operations().len(), 1);
}

#[test]
fn axial_families_by_label() {
    let cases = [
        (special::pyramid(4, 1.0).unwrap(), "C4v"),
        (special::pyramid(3, 0.5).unwrap(), "C3v"),
        (special::prism(6, 0.7).unwrap(), "D6h"),
        (special::antiprism(4, 0.8).unwrap(), "D4d"),
        (special::bipyramid(3, 1.3).unwrap(), "D3h"),
        (special::prism(4, 0.5).unwrap(), "D4h"),
    ];
    for (poly, expected) in cases {
        assert_eq!(label(&poly), expected);
    }
}

#[test]
fn square_antiprism_rotoreflection_has_order_eight() {
    let a = special::antiprism(4, 0.8).unwrap();
    let s = a.symmetries().unwrap();
    assert!(!s.inversion);
    assert_eq!(s.rotoreflection_axes.len(), 1);
    assert_eq!(s.rotoreflection_axes[0].order, 8);
    assert_eq!(s.total_count(), 16);
}

#[test]
fn every_group_element_maps_the_solid_onto_itself() {
    for poly in [
        special::tetrahedron().unwrap(),
        special::cube().unwrap(),
        special::antiprism(5, 1.0).unwrap(),
    ] {
        let s = poly.symmetries().unwrap();
        for f in s.group() {
            assert!(poly.transformed(&f).is_identical(&poly));
        }
        for op in s.operations() {
            assert!(apply(&poly, &op).is_identical(&poly));
            assert_eq!(op.is_proper(), op.to_affine().is_proper());
        }
    }
}

#[test]
fn axis_orders_are_maximal() {
    for poly in [special::cube().unwrap(), special::dodecahedron().unwrap()] {
        let s = poly.symmetries().unwrap();
        for axis in &s.rotation_axes {
            let turn = Affine3::rotation(&axis.line, TAU / axis.order as f64);
            assert!(poly.transformed(&turn).is_identical(&poly));
            let finer = Affine3::rotation(&axis.line, TAU / (2 * axis.order) as f64);
            assert!(!poly.transformed(&finer).is_identical(&poly));
        }
    }
}

#[test]
fn classification_is_idempotent_and_cached() {
    let poly = special::octahedron().unwrap();
    let first = poly.point_group().unwrap();
    let s1: *const Symmetries = poly.symmetries().unwrap();
    let s2: *const Symmetries = poly.symmetries().unwrap();
    assert_eq!(s1, s2);
    assert_eq!(poly.point_group().unwrap(), first);
    assert!(poly.is_identical(&poly));
}

#[test]
fn random_hulls_have_no_symmetry() {
    for seed in [1, 2, 3] {
        let hull = special::random_hull(9, seed).unwrap();
        assert_eq!(label(&hull), "C1");
    }
}

/// Convex hull of the orbit of `seeds` under the group generated by `gens`.
fn orbit_hull(gens: &[Affine3], seeds: &[Point3<f64>]) -> Polyhedron {
    let mut pts: Vec<Point3<f64>> = seeds.to_vec();
    let mut i = 0;
    while i < pts.len() {
        for g in gens {
            let q = g.apply_point(&pts[i]);
            if !pts.iter().any(|p| points_eq(p, &q)) {
                pts.push(q);
            }
        }
        i += 1;
    }
    hull::from_convex_vertices(&pts).unwrap()
}

/// Generic unit vectors; their orbits carry no accidental symmetry.
fn seeds() -> [Point3<f64>; 3] {
    [
        Point3::from(vector![0.61, 0.23, 0.42].normalize()),
        Point3::from(vector![-0.17, 0.71, -0.38].normalize()),
        Point3::from(vector![0.35, -0.52, -0.81].normalize()),
    ]
}

fn axis(x: f64, y: f64, z: f64) -> Line3 {
    Line3::new(Point3::origin(), vector![x, y, z]).unwrap()
}

fn turn(line: &Line3, n: u32) -> Affine3 {
    Affine3::rotation(line, TAU / n as f64)
}

fn check_orbit(gens: &[Affine3], seeds: &[Point3<f64>], expected: &str, order: usize) {
    let poly = orbit_hull(gens, seeds);
    let group = poly.point_group().unwrap();
    assert_eq!(group.to_string(), expected);
    assert_eq!(poly.symmetries().unwrap().total_count(), order, "{expected}");
    assert_eq!(group.group_order(), order, "{expected}");
}

#[test]
fn axial_orbits_classify_end_to_end() {
    let z = axis(0.0, 0.0, 1.0);
    let x = axis(1.0, 0.0, 0.0);
    let sigma_h = Affine3::reflection(&Plane3::perpendicular_to(&z, Point3::origin()));
    let s = seeds();
    let cases = [
        (vec![turn(&z, 2)], "C2", 2),
        (vec![turn(&z, 3)], "C3", 3),
        (vec![turn(&z, 4)], "C4", 4),
        (vec![turn(&z, 3), sigma_h], "C3h", 6),
        (vec![turn(&z, 2), sigma_h], "C2h", 4),
        (vec![Affine3::inversion(Point3::origin())], "S2", 2),
        (vec![Affine3::rotoreflection(&z, TAU / 4.0)], "S4", 4),
        (vec![Affine3::rotoreflection(&z, TAU / 6.0)], "S6", 6),
        (vec![turn(&z, 3), turn(&x, 2)], "D3", 6),
        (vec![turn(&z, 4), turn(&x, 2)], "D4", 8),
    ];
    for (gens, expected, order) in cases {
        check_orbit(&gens, &s, expected, order);
    }
}

#[test]
fn polyhedral_orbits_classify_end_to_end() {
    let z = axis(0.0, 0.0, 1.0);
    let diag = axis(1.0, 1.0, 1.0);
    let all = seeds();
    let s = &all[..1];
    let t = vec![turn(&z, 2), turn(&diag, 3)];
    check_orbit(&t, s, "T", 12);
    let mut th = t.clone();
    th.push(Affine3::inversion(Point3::origin()));
    check_orbit(&th, s, "Th", 24);
    check_orbit(&[turn(&z, 4), turn(&diag, 3)], s, "O", 24);
    // Five-fold axis through an icosahedron vertex, three-fold through a face.
    let five = axis(0.0, 1.0, 1.618_033_988_749_895);
    check_orbit(&[turn(&five, 5), turn(&diag, 3)], s, "I", 60);
}

fn rigid_motion(theta: f64, phi: f64, angle: f64, shift: (f64, f64, f64)) -> Affine3 {
    let dir = vector![
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos()
    ];
    let axis = Line3::new(point![0.0, 0.0, 0.0], dir).unwrap();
    let shift = Affine3::from_parts(
        Matrix3::identity(),
        Vector3::new(shift.0, shift.1, shift.2),
    )
    .unwrap();
    Affine3::rotation(&axis, angle).then(&shift)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn point_group_survives_rigid_motions(
        theta in 0.1f64..3.0,
        phi in 0.0f64..TAU,
        angle in -3.0f64..3.0,
        shift in (-5.0f64..5.0, -5.0f64..5.0, -5.0f64..5.0),
    ) {
        let motion = rigid_motion(theta, phi, angle, shift);
        for (poly, expected) in [
            (special::antiprism(5, 1.0).unwrap(), "D5d"),
            (special::pyramid(4, 1.0).unwrap(), "C4v"),
            (special::tetrahedron().unwrap(), "Td"),
        ] {
            let moved = poly.transformed(&motion);
            prop_assert_eq!(label(&moved), expected);
            prop_assert_eq!(counts(&moved), counts(&poly));
        }
    }
}
