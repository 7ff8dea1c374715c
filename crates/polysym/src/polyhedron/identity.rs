//! Face-bijection equality between polyhedra.
//!
//! Matching is greedy: each face of `a` takes the first unused face of `b`
//! that satisfies the relation. A valid solid never holds two faces with the
//! same cyclic point sequence (their shared sides would be on more than two
//! faces), so at most one face of `b` can match a given face of `a` and the
//! greedy pass decides the bijection exactly for validated inputs.

use super::face::Face;

pub(crate) fn faces_match(a: &[Face], b: &[Face], rel: impl Fn(&Face, &Face) -> bool) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    for fa in a {
        let hit = b
            .iter()
            .enumerate()
            .position(|(j, fb)| !used[j] && rel(fa, fb));
        match hit {
            Some(j) => used[j] = true,
            None => return false,
        }
    }
    true
}
