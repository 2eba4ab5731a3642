//! Simplex bookkeeping and the nearest-to-origin facet search.

use crate::math::{Point, Vector, DEFAULT_EPSILON, MAX_DIM, SIMPLEX_CAP};
use crate::query::gjk;
use crate::utils::{self, Basis};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// An ordered set of up to `D + 1` points used as the working set of the GJK
/// loop and the separation refiners.
///
/// Insertion order is significant: the most recently inserted point is the
/// distinguished vertex every facet basis is anchored on.
#[derive(Clone, Debug)]
pub struct Simplex<const D: usize> {
    pts: ArrayVec<Point<D>, SIMPLEX_CAP>,
}

impl<const D: usize> Simplex<D> {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex<D> {
        assert!(
            D >= 1 && D <= MAX_DIM,
            "simplex dimension out of the supported range"
        );

        Simplex {
            pts: ArrayVec::new(),
        }
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: Point<D>) {
        self.pts.clear();
        self.pts.push(pt);
    }

    /// Adds a point to this simplex.
    ///
    /// Returns `false` without modifying the simplex if the point duplicates
    /// one of its current vertices. Re-inserting a known vertex is how both
    /// refinement loops stall, so the check is load-bearing, not cosmetic.
    pub fn add_point(&mut self, pt: Point<D>) -> bool {
        for old in &self.pts {
            if (*old - pt).norm_squared() < gjk::eps_tol() {
                return false;
            }
        }

        self.pts.push(pt);
        true
    }

    /// Tests if the given point is already a vertex of this simplex.
    pub fn contains_point(&self, pt: &Point<D>) -> bool {
        self.pts
            .iter()
            .any(|old| (*old - *pt).norm_squared() < gjk::eps_tol())
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Whether this simplex contains no point at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// The i-th point of this simplex.
    #[inline]
    pub fn point(&self, i: usize) -> &Point<D> {
        assert!(i < self.pts.len(), "Index out of bounds.");
        &self.pts[i]
    }

    /// The points of this simplex, in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point<D>] {
        &self.pts
    }

    /// Removes every point duplicating an earlier one, preserving order.
    pub(crate) fn dedup_points(&mut self) {
        let mut unique: ArrayVec<Point<D>, SIMPLEX_CAP> = ArrayVec::new();

        for pt in &self.pts {
            if !unique
                .iter()
                .any(|old| (*old - *pt).norm_squared() < gjk::eps_tol())
            {
                unique.push(*pt);
            }
        }

        self.pts = unique;
    }

    /// An orthonormal basis of the directions orthogonal to the affine hull
    /// of this simplex.
    pub(crate) fn null_space_basis(&self) -> Basis<D> {
        let a = self.pts[self.pts.len() - 1].coords;
        let mut span: ArrayVec<Vector<D>, { MAX_DIM + 1 }> = ArrayVec::new();

        for pt in &self.pts[..self.pts.len() - 1] {
            span.push(pt.coords - a);
        }

        utils::orthonormal_complement(&utils::orthonormalize(&span))
    }

    /// `true` if `pt` lies meaningfully outside the affine hull of the
    /// current points.
    pub(crate) fn extends_hull(&self, pt: &Point<D>) -> bool {
        let a = self.pts[self.pts.len() - 1].coords;
        let mut span: ArrayVec<Vector<D>, { MAX_DIM + 1 }> = ArrayVec::new();

        for old in &self.pts[..self.pts.len() - 1] {
            span.push(old.coords - a);
        }

        let hull = utils::orthonormalize(&span);
        let w = pt.coords - a;
        let rejection = w - utils::project_onto_basis(&w, &hull);

        rejection.norm() > DEFAULT_EPSILON.sqrt() * (1.0 + w.norm())
    }

    /// Keeps only the points at the given sorted indices, preserving order.
    fn retain_indices(&mut self, keep: &[usize]) {
        let mut next = 0;
        let mut i = 0;

        self.pts.retain(|_| {
            let kept = next < keep.len() && keep[next] == i;
            if kept {
                next += 1;
            }
            i += 1;
            kept
        });
    }

    /// Finds the minimal facet of this simplex whose affine hull is nearest
    /// the origin, reduces the simplex to that facet's vertices, and returns
    /// the direction from the facet toward the origin.
    ///
    /// With `full_check`, facets excluding the most recent vertex are also
    /// candidates. The GJK loop never needs those (its latest support point
    /// always belongs to the closest feature), the disjoint separation
    /// solver does.
    ///
    /// The returned flag is `true` when the origin's projection lies on the
    /// winning facet itself, i.e. the direction has (near-)zero magnitude.
    pub fn project_origin_and_reduce(&mut self, full_check: bool) -> (Vector<D>, bool) {
        let root = SubSimplex::from_simplex(self);

        // Breadth-first walk of the candidate facets. The queue acts as an
        // arena with a read cursor; its inline capacity covers regular runs
        // and it spills to the heap instead of overflowing on pathological
        // input.
        let mut queue: SmallVec<[SubSimplex<D>; 8]> = SmallVec::new();
        queue.push(root);
        let mut cursor = 0;
        let mut winner = None;

        while cursor < queue.len() {
            let cand = queue[cursor].clone();
            cursor += 1;

            let nchildren = if full_check && !cand.span.is_empty() {
                cand.span.len() + 1
            } else {
                cand.span.len()
            };

            let mut any_outside = false;
            for drop in 0..nchildren {
                if let Some(child) = cand.derive(self, drop) {
                    if child.origin_outside(self) {
                        any_outside = true;
                        queue.push(child);
                    }
                }
            }

            if !any_outside {
                winner = Some(cand);
                break;
            }
        }

        let winner = winner.unwrap_or_else(|| {
            log::debug!("nearest-origin search exhausted its queue, keeping the last candidate");
            queue.pop().unwrap()
        });

        let dir = winner.dir_to_origin(self);
        let contained =
            winner.null_basis.is_empty() || dir.norm_squared() <= gjk::eps_tol() * gjk::eps_tol();

        let keep = winner.member_ids();
        self.retain_indices(&keep);

        (dir, contained)
    }
}

impl<const D: usize> Default for Simplex<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// One facet of a simplex, owned by value.
///
/// `null_basis` is an orthonormal basis of the orthogonal complement of the
/// facet's spanning vectors. For facets derived by dropping a vertex its last
/// element is the facet's outward wall normal, sign-corrected to point away
/// from the dropped vertex (away from the remaining simplex volume).
#[derive(Clone, Debug)]
struct SubSimplex<const D: usize> {
    /// Index of the base vertex the spanning vectors are anchored on: the
    /// simplex's last point, unless this facet was derived by dropping it.
    base: usize,
    /// Indices of the other member vertices.
    span_ids: ArrayVec<usize, { MAX_DIM + 1 }>,
    /// Vectors from the base vertex to the other members.
    span: ArrayVec<Vector<D>, { MAX_DIM + 1 }>,
    null_basis: Basis<D>,
}

impl<const D: usize> SubSimplex<D> {
    /// The facet covering the whole of `simplex`, based at its last point.
    fn from_simplex(simplex: &Simplex<D>) -> SubSimplex<D> {
        let base = simplex.len() - 1;
        let a = simplex.point(base).coords;
        let mut span_ids = ArrayVec::new();
        let mut span = ArrayVec::new();

        for i in 0..base {
            span_ids.push(i);
            span.push(simplex.point(i).coords - a);
        }

        let null_basis = utils::orthonormal_complement(&utils::orthonormalize(&span));

        SubSimplex {
            base,
            span_ids,
            span,
            null_basis,
        }
    }

    /// The facet obtained by dropping the `drop`-th spanning vertex.
    ///
    /// `drop == self.span.len()` drops the base vertex instead, re-basing the
    /// spanning vectors on the first remaining member.
    ///
    /// Returns `None` when the facet's wall normal is not uniquely
    /// determined, which only happens for rank-deficient geometry; such a
    /// child cannot witness the origin being outside its parent.
    fn derive(&self, simplex: &Simplex<D>, drop: usize) -> Option<SubSimplex<D>> {
        let mut span_ids = ArrayVec::new();
        let mut span = ArrayVec::new();
        let base;
        let dropped;

        if drop == self.span.len() {
            base = self.span_ids[0];
            dropped = simplex.point(self.base).coords;
            let b = simplex.point(base).coords;

            for &id in &self.span_ids[1..] {
                span_ids.push(id);
                span.push(simplex.point(id).coords - b);
            }
        } else {
            base = self.base;
            dropped = simplex.point(self.span_ids[drop]).coords;

            for (i, &id) in self.span_ids.iter().enumerate() {
                if i != drop {
                    span_ids.push(id);
                    span.push(self.span[i]);
                }
            }
        }

        // The wall normal is the one direction orthogonal to both the
        // parent's null space and this facet's own span.
        let mut walled = self.null_basis.clone();
        utils::orthonormalize_extend(&mut walled, &span);

        if walled.len() + 1 != D {
            return None;
        }

        let comp = utils::orthonormal_complement(&walled);
        if comp.len() != 1 {
            return None;
        }

        let mut normal = comp[0];
        let child_base = simplex.point(base).coords;

        if (dropped - child_base).dot(&normal) > 0.0 {
            normal = -normal;
        }

        let mut null_basis = self.null_basis.clone();
        null_basis.push(normal);

        Some(SubSimplex {
            base,
            span_ids,
            span,
            null_basis,
        })
    }

    /// `true` if the origin lies strictly beyond this facet's wall.
    ///
    /// Only meaningful for derived facets, whose wall normal is the last
    /// element of `null_basis`.
    fn origin_outside(&self, simplex: &Simplex<D>) -> bool {
        let normal = self.null_basis.last().unwrap();
        simplex.point(self.base).coords.dot(normal) < 0.0
    }

    /// Direction from this facet's feature nearest the origin toward the
    /// origin: the projection of `-base` onto the facet's null space.
    fn dir_to_origin(&self, simplex: &Simplex<D>) -> Vector<D> {
        let a = simplex.point(self.base).coords;
        -utils::project_onto_basis(&a, &self.null_basis)
    }

    /// The indices of this facet's members, sorted ascending.
    fn member_ids(&self) -> ArrayVec<usize, SIMPLEX_CAP> {
        let mut ids: ArrayVec<usize, SIMPLEX_CAP> = ArrayVec::new();
        ids.extend(self.span_ids.iter().copied());
        ids.push(self.base);
        ids.sort_unstable();
        ids
    }
}
