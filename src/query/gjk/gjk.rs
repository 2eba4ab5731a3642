//! The Gilbert-Johnson-Keerthi intersection algorithm.
//!
//! GJK operates on the Minkowski difference of two convex shapes: the shapes
//! overlap if and only if the difference contains the origin. The loop grows
//! a simplex of support points of the difference, repeatedly replacing it by
//! the sub-simplex nearest the origin and probing the support function in the
//! direction from that feature toward the origin, until the origin is either
//! enclosed or proven unreachable.

use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::Simplex;
use crate::shape::SupportMap;

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Hard iteration cap of the GJK loop.
///
/// The loop converges in a handful of iterations in practice; the cap only
/// guards against numerical non-termination and grows with the dimension.
fn max_iterations(dim: usize) -> usize {
    10 * (1 << dim.saturating_sub(2))
}

/// Results of the GJK algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult<const D: usize> {
    /// The Minkowski difference contains the origin: the shapes overlap.
    ///
    /// The vector is the search direction of the final iteration, an
    /// overlap axis of the two shapes.
    Intersection(Vector<D>),
    /// The shapes do not overlap.
    ///
    /// The vector is a separating axis, not necessarily the minimal one.
    NoIntersection(Vector<D>),
}

/// Runs the GJK loop on the support-mapped Minkowski difference `diff`.
///
/// A non-zero `init_dir` seeds the first support query; the zero vector
/// falls back on an arbitrary axis. On return, `simplex` holds the terminal
/// working set, which the penetration and separation refiners start from.
pub fn intersection<G, const D: usize>(
    diff: &G,
    simplex: &mut Simplex<D>,
    init_dir: Vector<D>,
) -> GJKResult<D>
where
    G: ?Sized + SupportMap<D>,
{
    let init_dir = if init_dir.norm_squared() > eps_tol() {
        init_dir
    } else {
        Vector::ith(0, 1.0)
    };

    let a = diff.local_support_point(&init_dir);
    simplex.reset(a);

    if a.coords.norm_squared() <= eps_tol() {
        // The very first support point is the origin: boundary contact.
        return GJKResult::Intersection(init_dir);
    }

    let mut dir = -a.coords;

    for _ in 0..max_iterations(D) {
        let a = diff.local_support_point(&dir);

        if a.coords.dot(&dir) < 0.0 {
            // The support point did not cross the origin along the search
            // direction: the origin lies outside the difference.
            let sep = dir * (-a.coords.dot(&dir) / dir.norm_squared());
            return GJKResult::NoIntersection(sep);
        }

        let progressed = simplex.add_point(a);
        let (new_dir, contained) = simplex.project_origin_and_reduce(false);

        if contained {
            return GJKResult::Intersection(dir);
        }

        if !progressed {
            // The support function keeps returning a known vertex: the
            // simplex cannot approach the origin any further.
            return GJKResult::NoIntersection(new_dir);
        }

        dir = new_dir;
    }

    // The cap tripped before either exit condition; assuming an overlap is
    // the conservative answer.
    log::debug!("GJK iteration cap reached, assuming an intersection");
    GJKResult::Intersection(dir)
}
