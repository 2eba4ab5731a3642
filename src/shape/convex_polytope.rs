//! Support mapping over an explicit convex vertex set.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use num::Bounded;

/// A convex shape described by the vertices of its convex hull.
///
/// The vertex set is taken as-is: points interior to the hull are harmless
/// but make every support query slightly more expensive.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolytope<const D: usize> {
    points: Vec<Point<D>>,
}

impl<const D: usize> ConvexPolytope<D> {
    /// Creates a polytope from the vertices of its convex hull.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points(points: Vec<Point<D>>) -> Option<ConvexPolytope<D>> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexPolytope { points })
        }
    }

    /// The vertices of this polytope.
    #[inline]
    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }
}

impl<const D: usize> SupportMap<D> for ConvexPolytope<D> {
    fn local_support_point(&self, dir: &Vector<D>) -> Point<D> {
        let mut best = 0;
        let mut best_dot = -Real::max_value();

        for (i, p) in self.points.iter().enumerate() {
            let dot = p.coords.dot(dir);

            if dot > best_dot {
                best = i;
                best_dot = dot;
            }
        }

        self.points[best]
    }
}
