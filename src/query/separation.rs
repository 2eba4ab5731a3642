//! Minimal translation and closest-approach vector computation.

use crate::math::{Real, Vector};
use crate::query::epa::EPA;
use crate::query::gjk::{self, GJKResult, MinkowskiDiff, Simplex};
use crate::shape::SupportMap;

/// Computes the minimal separation axis between two shapes.
///
/// Returns `true` if the shapes overlap. On return, `axis` holds the minimum
/// translation vector when they do (its magnitude is the penetration depth),
/// or the closest-approach vector when they do not (its magnitude is the
/// separation distance, and translating the second shape by `-axis` brings
/// the pair into contact). A non-zero input value of `axis` seeds the
/// underlying GJK search direction.
///
/// Equivalent to [`minimal_separation_axis_with_params`] with a fractional
/// tolerance of `1.0e-3` and an iteration limit of 100.
pub fn minimal_separation_axis<G1, G2, const D: usize>(
    g1: &G1,
    g2: &G2,
    axis: &mut Vector<D>,
) -> bool
where
    G1: ?Sized + SupportMap<D>,
    G2: ?Sized + SupportMap<D>,
{
    minimal_separation_axis_with_params(g1, g2, axis, 1.0e-3, Some(100))
}

/// Computes the minimal separation axis between two shapes, with explicit
/// convergence parameters.
///
/// `fractional_tolerance` bounds the relative change of the projected-origin
/// estimate below which the refinement loops declare convergence.
/// `iteration_limit` caps the number of refinement steps; `None` leaves the
/// loops bounded only by their convergence and duplicate-support-point
/// checks. When a loop runs out of budget, the current best estimate is
/// returned rather than an error.
pub fn minimal_separation_axis_with_params<G1, G2, const D: usize>(
    g1: &G1,
    g2: &G2,
    axis: &mut Vector<D>,
    fractional_tolerance: Real,
    iteration_limit: Option<usize>,
) -> bool
where
    G1: ?Sized + SupportMap<D>,
    G2: ?Sized + SupportMap<D>,
{
    let diff = MinkowskiDiff { g1, g2 };
    let mut simplex = Simplex::new();
    let limit = iteration_limit.unwrap_or(usize::MAX);

    match gjk::intersection(&diff, &mut simplex, *axis) {
        GJKResult::Intersection(_) => {
            if explode_simplex(&diff, &mut simplex) {
                let mut epa = EPA::new();
                *axis = epa.project_origin(&diff, &simplex, fractional_tolerance, limit);
            } else {
                // The difference is flat along some axis, so the polytope
                // refinement cannot run; the simplex walk still yields a
                // usable estimate.
                *axis = closest_separation(&diff, &mut simplex, fractional_tolerance, limit);
            }

            true
        }
        GJKResult::NoIntersection(_) => {
            let _ = explode_simplex(&diff, &mut simplex);
            *axis = closest_separation(&diff, &mut simplex, fractional_tolerance, limit);

            false
        }
    }
}

/// Computes the separation distance between two shapes, zero when they
/// overlap.
pub fn distance<G1, G2, const D: usize>(g1: &G1, g2: &G2) -> Real
where
    G1: ?Sized + SupportMap<D>,
    G2: ?Sized + SupportMap<D>,
{
    let mut axis = Vector::zeros();

    if minimal_separation_axis(g1, g2, &mut axis) {
        0.0
    } else {
        axis.norm()
    }
}

/// Promotes a possibly rank-deficient simplex to a full-volume `D + 1` point
/// simplex by probing the support function of `diff` along both signs of the
/// null-space directions of the simplex's affine hull.
///
/// Duplicates are removed first, and only points extending the affine hull
/// are accepted, so a probe round without progress terminates the expansion
/// instead of re-inserting a known vertex forever. Returns `false` when the
/// difference itself is degenerate and full volume cannot be reached.
fn explode_simplex<G, const D: usize>(diff: &G, simplex: &mut Simplex<D>) -> bool
where
    G: ?Sized + SupportMap<D>,
{
    simplex.dedup_points();

    while simplex.len() < D + 1 {
        let basis = simplex.null_space_basis();
        let mut progressed = false;

        'probe: for b in &basis {
            for dir in [*b, -*b] {
                let pt = diff.local_support_point(&dir);

                if simplex.extends_hull(&pt) {
                    let _ = simplex.add_point(pt);
                    progressed = true;
                    break 'probe;
                }
            }
        }

        if !progressed {
            return false;
        }
    }

    true
}

/// Refines the terminal GJK simplex toward the point of the Minkowski
/// difference `diff` closest to the origin.
///
/// Each step reduces the simplex to its feature nearest the origin (also
/// considering features that exclude the latest vertex) and probes the
/// support function toward the origin from there. The returned vector goes
/// from the closest point of the difference to the origin.
fn closest_separation<G, const D: usize>(
    diff: &G,
    simplex: &mut Simplex<D>,
    fractional_tolerance: Real,
    iteration_limit: usize,
) -> Vector<D>
where
    G: ?Sized + SupportMap<D>,
{
    let mut prev: Option<Vector<D>> = None;
    let mut niter = 0;

    loop {
        let (dir, contained) = simplex.project_origin_and_reduce(true);

        if contained {
            // The origin lies on the simplex: zero separation.
            return dir;
        }

        let support = diff.local_support_point(&dir);

        // `-dir` is the current closest-point estimate; stop once the
        // support point cannot improve on it.
        if (support.coords + dir).dot(&dir) <= gjk::eps_tol() * dir.norm() {
            return dir;
        }

        if let Some(prev) = prev {
            if (dir - prev).norm() <= fractional_tolerance * dir.norm() {
                return dir;
            }
        }
        prev = Some(dir);

        if !simplex.add_point(support) {
            return dir;
        }

        niter += 1;
        if niter >= iteration_limit {
            log::debug!("separation refinement iteration limit reached");
            return dir;
        }
    }
}
