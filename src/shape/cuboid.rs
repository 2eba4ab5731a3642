//! Support mapping based Cuboid shape.

use crate::math::{Point, Vector};
use crate::shape::SupportMap;

/// Shape of an axis-aligned box.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid<const D: usize> {
    /// The center of the cuboid.
    pub center: Point<D>,
    /// The half-extents of the cuboid. Each half-extent is the box half-width
    /// along the corresponding axis and must be positive.
    pub half_extents: Vector<D>,
}

impl<const D: usize> Cuboid<D> {
    /// Creates a new box from its center and half-extents.
    #[inline]
    pub fn new(center: Point<D>, half_extents: Vector<D>) -> Cuboid<D> {
        Cuboid {
            center,
            half_extents,
        }
    }

    /// This box translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<D>) -> Cuboid<D> {
        Cuboid::new(self.center + shift, self.half_extents)
    }
}

impl<const D: usize> SupportMap<D> for Cuboid<D> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<D>) -> Point<D> {
        let mut res = self.half_extents;

        for i in 0..D {
            if dir[i] < 0.0 {
                res[i] = -res[i];
            }
        }

        self.center + res
    }
}
