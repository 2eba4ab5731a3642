//! Boolean intersection tests.

use crate::math::Vector;
use crate::query::gjk::{self, GJKResult, MinkowskiDiff, Simplex};
use crate::shape::SupportMap;

/// Tests whether the given shapes overlap.
pub fn intersection_test<G1, G2, const D: usize>(g1: &G1, g2: &G2) -> bool
where
    G1: ?Sized + SupportMap<D>,
    G2: ?Sized + SupportMap<D>,
{
    let mut axis = Vector::zeros();
    intersection_test_with_axis(g1, g2, &mut axis)
}

/// Tests whether the given shapes overlap, with an in-out witness axis.
///
/// A non-zero `axis` seeds the initial search direction, which speeds the
/// test up when a good guess is available (e.g. the axis returned by the
/// same query on the previous frame). On return, `axis` holds an overlap
/// axis when the shapes overlap, or a separating axis when they do not;
/// neither is necessarily minimal. Use
/// [`minimal_separation_axis`](crate::query::minimal_separation_axis) for
/// the minimal vector.
pub fn intersection_test_with_axis<G1, G2, const D: usize>(
    g1: &G1,
    g2: &G2,
    axis: &mut Vector<D>,
) -> bool
where
    G1: ?Sized + SupportMap<D>,
    G2: ?Sized + SupportMap<D>,
{
    let diff = MinkowskiDiff { g1, g2 };
    let mut simplex = Simplex::new();

    match gjk::intersection(&diff, &mut simplex, *axis) {
        GJKResult::Intersection(dir) => {
            *axis = dir;
            true
        }
        GJKResult::NoIntersection(dir) => {
            *axis = dir;
            false
        }
    }
}
