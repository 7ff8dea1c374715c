use super::special::*;
use super::*;
use crate::error::StructuralError;
use nalgebra::point;

fn check_solid(poly: &Polyhedron, faces: usize, vertices: usize, edges: usize) {
    poly.validate().unwrap();
    let topo = poly.topology();
    assert_eq!(poly.faces().len(), faces);
    assert_eq!(topo.vertices.len(), vertices);
    assert_eq!(topo.edges.len(), edges);
    assert!(topo.oriented);
    check_outward(poly);
}

fn check_outward(poly: &Polyhedron) {
    let c = poly.centroid();
    for face in poly.faces() {
        assert!(face.normal().dot(&(face.centroid() - c)) > 0.0);
    }
}

#[test]
fn platonic_solids() {
    check_solid(&tetrahedron().unwrap(), 4, 4, 6);
    check_solid(&cube().unwrap(), 6, 8, 12);
    check_solid(&octahedron().unwrap(), 8, 6, 12);
    check_solid(&dodecahedron().unwrap(), 12, 20, 30);
    check_solid(&icosahedron().unwrap(), 20, 12, 30);
}

#[test]
fn axial_families() {
    for n in 3..=7 {
        check_solid(&prism(n, 1.0).unwrap(), n + 2, 2 * n, 3 * n);
        check_solid(&antiprism(n, 1.0).unwrap(), 2 * n + 2, 2 * n, 4 * n);
        check_solid(&pyramid(n, 1.0).unwrap(), n + 1, n + 1, 2 * n);
        check_solid(&bipyramid(n, 1.5).unwrap(), 2 * n, n + 2, 3 * n);
    }
    check_solid(&regular_prism(4).unwrap(), 6, 8, 12);
}

#[test]
fn fewer_than_three_sides_is_rejected() {
    assert!(matches!(
        prism(2, 1.0),
        Err(StructuralError::TooFewPoints { count: 2, .. })
    ));
    assert!(antiprism(1, 1.0).is_err());
}

#[test]
fn random_hulls_are_valid_and_replayable() {
    for seed in 0..4 {
        let hull = random_hull(10, seed).unwrap();
        hull.validate().unwrap();
        check_outward(&hull);
        let topo = hull.topology();
        let euler = topo.vertices.len() as i64 - topo.edges.len() as i64 + hull.faces().len() as i64;
        assert_eq!(euler, 2);
        let again = random_hull(10, seed).unwrap();
        assert!(hull.is_identical(&again));
    }
}

#[test]
fn hull_of_flat_cloud_has_no_faces() {
    let flat = [
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![1.0, 1.0, 0.0],
        point![0.0, 1.0, 0.0],
    ];
    assert_eq!(
        hull::from_convex_vertices(&flat).unwrap_err(),
        StructuralError::TooFewFaces { count: 0 }
    );
    assert_eq!(
        hull::from_convex_vertices(&flat[..3]).unwrap_err(),
        StructuralError::TooFewVertices { count: 3 }
    );
}

#[test]
fn hull_ignores_interior_and_repeated_points() {
    let mut pts: Vec<_> = cube().unwrap().vertices().to_vec();
    pts.push(point![0.1, -0.2, 0.3]);
    pts.push(pts[0]);
    let hull = hull::from_convex_vertices(&pts).unwrap();
    check_solid(&hull, 6, 8, 12);
    assert!(hull.is_identical(&cube().unwrap()));
}

#[test]
fn hull_drops_points_inside_faces_and_on_edges() {
    let cube = cube().unwrap();
    let corners: Vec<_> = cube.vertices().to_vec();

    let mut with_centre = corners.clone();
    with_centre.push(point![0.0, 0.0, 1.0]);
    let hull = hull::from_convex_vertices(&with_centre).unwrap();
    check_solid(&hull, 6, 8, 12);
    assert!(hull.faces().iter().all(|f| f.len() == 4));
    assert!(hull.is_identical(&cube));

    let mut with_midpoint = corners;
    with_midpoint.push(point![1.0, 1.0, 0.0]);
    with_midpoint.push(point![-1.0, 0.0, -1.0]);
    let hull = hull::from_convex_vertices(&with_midpoint).unwrap();
    check_solid(&hull, 6, 8, 12);
    assert!(hull.is_identical(&cube));
}

#[test]
fn hull_keeps_polygon_faces_of_dense_clouds() {
    // A prism sampled with extra points along its vertical edges.
    let prism = prism(5, 1.0).unwrap();
    let mut pts: Vec<_> = prism.vertices().to_vec();
    for p in prism.vertices().iter().filter(|p| p.z > 0.0) {
        pts.push(point![p.x, p.y, 0.0]);
    }
    let hull = hull::from_convex_vertices(&pts).unwrap();
    check_solid(&hull, 7, 10, 15);
    assert!(hull.is_identical(&prism));
}
