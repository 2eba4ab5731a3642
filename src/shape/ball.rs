//! Support mapping based Ball shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;
use na::Unit;

/// A ball shape.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball<const D: usize> {
    /// The center of the ball.
    pub center: Point<D>,
    /// The radius of the ball.
    pub radius: Real,
}

impl<const D: usize> Ball<D> {
    /// Creates a new ball from its center and radius.
    #[inline]
    pub fn new(center: Point<D>, radius: Real) -> Ball<D> {
        Ball { center, radius }
    }
}

impl<const D: usize> SupportMap<D> for Ball<D> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<D>) -> Point<D> {
        if let Some(dir) = Unit::try_new(*dir, DEFAULT_EPSILON) {
            self.center + *dir * self.radius
        } else {
            // Any boundary point supports a degenerate direction.
            self.center + Vector::ith(0, self.radius)
        }
    }
}
