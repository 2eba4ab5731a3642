use crate::math::{Point, UnitVector, Vector};
use crate::shape::SupportMap;

/// A support mapping that is the point at the origin.
pub struct ConstantOrigin;

impl<const D: usize> SupportMap<D> for ConstantOrigin {
    #[inline]
    fn local_support_point(&self, _: &Vector<D>) -> Point<D> {
        Point::origin()
    }

    #[inline]
    fn local_support_point_toward(&self, _: &UnitVector<D>) -> Point<D> {
        Point::origin()
    }
}

/// The Minkowski difference of two support-mapped shapes.
///
/// Each of its points is the difference of a point of the first shape and a
/// point of the second. Two shapes overlap if and only if this difference
/// contains the origin, so every query of this crate runs on the difference
/// rather than on the shapes themselves.
pub struct MinkowskiDiff<'a, G1: ?Sized, G2: ?Sized> {
    /// The first shape of the difference.
    pub g1: &'a G1,
    /// The second shape of the difference.
    pub g2: &'a G2,
}

impl<const D: usize, G1, G2> SupportMap<D> for MinkowskiDiff<'_, G1, G2>
where
    G1: ?Sized + SupportMap<D>,
    G2: ?Sized + SupportMap<D>,
{
    #[inline]
    fn local_support_point(&self, dir: &Vector<D>) -> Point<D> {
        let sp1 = self.g1.local_support_point(dir);
        let sp2 = self.g2.local_support_point(&-*dir);

        Point::from(sp1 - sp2)
    }
}
