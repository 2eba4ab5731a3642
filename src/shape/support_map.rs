//! Traits for support mapping based shapes.

use crate::math::{Point, UnitVector, Vector};

/// Trait of convex shapes representable by a support mapping function.
///
/// A support function maps a direction to the shape point which maximizes
/// their dot product. It is the only capability the queries of this crate
/// require from a shape.
pub trait SupportMap<const D: usize> {
    /// Evaluates the support function of this shape.
    fn local_support_point(&self, dir: &Vector<D>) -> Point<D>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &UnitVector<D>) -> Point<D> {
        self.local_support_point(dir.as_ref())
    }
}
