//! Penetration depth queries using the Expanding Polytope Algorithm.
//!
//! EPA starts from a full-volume simplex of the Minkowski difference that
//! encloses the origin and grows it into a polytope approximating the
//! difference from the inside. At each step the boundary face nearest the
//! origin is pushed outward by a support query along its normal; once no face
//! can move any further, the projection of the origin onto the nearest face
//! is the minimum translation vector separating the two shapes.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON, MAX_DIM};
use crate::query::gjk::{self, Simplex};
use crate::shape::SupportMap;
use crate::utils;
use arrayvec::ArrayVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Copy, Clone, PartialEq)]
struct FaceId {
    id: usize,
    neg_dist: Real,
}

impl FaceId {
    fn new(id: usize, neg_dist: Real) -> Option<Self> {
        if neg_dist > gjk::eps_tol() {
            log::debug!("the origin lies behind face {}, dropping it from the heap", id);
            None
        } else {
            Some(FaceId { id, neg_dist })
        }
    }
}

impl Eq for FaceId {}

impl PartialOrd for FaceId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.neg_dist < other.neg_dist {
            Ordering::Less
        } else if self.neg_dist > other.neg_dist {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// A boundary face of the expanding polytope: `D` vertex indices and a unit
/// normal pointing away from the polytope's interior.
#[derive(Clone, Debug)]
struct Face<const D: usize> {
    pts: [usize; D],
    normal: UnitVector<D>,
    dist: Real,
    deleted: bool,
    degenerate: bool,
}

impl<const D: usize> Face<D> {
    /// Builds the face with the given vertices, orienting its normal away
    /// from the interior reference point.
    fn new(vertices: &[Point<D>], pts: [usize; D], interior: &Point<D>) -> Face<D> {
        let p0 = vertices[pts[0]];
        let mut edges: ArrayVec<Vector<D>, MAX_DIM> = ArrayVec::new();

        for &i in &pts[1..] {
            edges.push(vertices[i] - p0);
        }

        if let Some(mut normal) = utils::hyperplane_normal(&edges) {
            if (p0 - *interior).dot(&normal) < 0.0 {
                normal = -normal;
            }

            let dist = p0.coords.dot(&normal);

            Face {
                pts,
                normal,
                dist,
                deleted: false,
                degenerate: false,
            }
        } else {
            // Degenerate faces are kept in the list so hole patching stays
            // watertight, but they never enter the heap and any nearby
            // expansion deletes them.
            Face {
                pts,
                normal: UnitVector::new_unchecked(Vector::zeros()),
                dist: 0.0,
                deleted: false,
                degenerate: true,
            }
        }
    }

    fn can_be_seen_by(&self, vertices: &[Point<D>], pt: &Point<D>) -> bool {
        self.degenerate || (*pt - vertices[self.pts[0]]).dot(&self.normal) > gjk::eps_tol()
    }
}

/// A `(D - 1)`-vertex boundary ridge of a deleted face, keyed by its sorted
/// vertex set. A ridge interior to the deleted region occurs exactly twice
/// and annihilates with its twin; a ridge on the hole boundary survives.
type Ridge = ArrayVec<usize, MAX_DIM>;

/// The Expanding Polytope Algorithm in `D` dimensions.
///
/// Computes the minimum translation vector between two overlapping shapes,
/// starting from the full-volume simplex produced by the GJK loop. The same
/// instance can be reused across queries to avoid repeated allocations.
#[derive(Default)]
pub struct EPA<const D: usize> {
    vertices: Vec<Point<D>>,
    faces: Vec<Face<D>>,
    heap: BinaryHeap<FaceId>,
    ridges: Vec<Ridge>,
}

impl<const D: usize> EPA<D> {
    /// Creates a new instance of the Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.heap.clear();
        self.ridges.clear();
    }

    /// Projects the origin onto the boundary of the Minkowski difference
    /// `diff`, starting from a simplex enclosing the origin.
    ///
    /// `simplex` must hold `D + 1` points of the difference whose hull
    /// contains the origin. The returned vector goes from the origin to the
    /// nearest boundary point found within `iteration_limit` refinements:
    /// the minimum translation vector of the overlapping pair.
    pub fn project_origin<G>(
        &mut self,
        diff: &G,
        simplex: &Simplex<D>,
        fractional_tolerance: Real,
        iteration_limit: usize,
    ) -> Vector<D>
    where
        G: ?Sized + SupportMap<D>,
    {
        let _eps_tol = DEFAULT_EPSILON * 100.0;

        self.reset();
        self.vertices.extend_from_slice(simplex.points());
        assert_eq!(
            self.vertices.len(),
            D + 1,
            "the polytope seed must be a full-volume simplex"
        );

        // Interior reference point used to orient every face normal: the
        // polytope only ever grows, so the seed centroid stays interior.
        let mut centroid = Vector::zeros();
        for pt in &self.vertices {
            centroid += pt.coords;
        }
        let interior = Point::from(centroid / (D as Real + 1.0));

        /*
         * Initialization: the D + 1 boundary faces of the seed simplex, each
         * excluding one vertex and oriented away from it.
         */
        for excluded in 0..D + 1 {
            let mut pts = [0usize; D];
            let mut next = 0;

            for i in 0..D + 1 {
                if i != excluded {
                    pts[next] = i;
                    next += 1;
                }
            }

            let face = Face::new(&self.vertices, pts, &interior);

            if !face.degenerate {
                if let Some(fid) = FaceId::new(self.faces.len(), -face.dist) {
                    self.heap.push(fid);
                }
            }

            self.faces.push(face);
        }

        let mut niter = 0;
        let mut best_proj: Option<Vector<D>> = None;

        /*
         * Run the expansion.
         */
        while let Some(face_id) = self.heap.pop() {
            if self.faces[face_id.id].deleted {
                continue;
            }

            let normal = self.faces[face_id.id].normal;
            let dist = self.faces[face_id.id].dist;

            // Projection of the origin onto the nearest face: the current
            // best estimate of the minimum translation vector.
            let proj = *normal * dist;

            if dist <= _eps_tol {
                // Zero-depth contact.
                return proj;
            }

            if let Some(prev) = best_proj {
                if (proj - prev).norm() <= fractional_tolerance * dist {
                    return proj;
                }
            }
            best_proj = Some(proj);

            let support = diff.local_support_point(&normal);
            let support_dist = support.coords.dot(&normal);

            if support_dist - dist <= fractional_tolerance * dist.max(_eps_tol) {
                // No point of the difference lies meaningfully beyond the
                // nearest face: the polytope cannot be refined further.
                return proj;
            }

            if self
                .vertices
                .iter()
                .any(|pt| (*pt - support).norm_squared() < gjk::eps_tol())
            {
                // The support function returned a known vertex; expanding
                // with it would spin forever without progress.
                return proj;
            }

            let support_id = self.vertices.len();
            self.vertices.push(support);

            // Delete every face the new vertex can see and collect the
            // ridges bounding the hole.
            self.ridges.clear();

            for id in 0..self.faces.len() {
                if self.faces[id].deleted
                    || !self.faces[id].can_be_seen_by(&self.vertices, &support)
                {
                    continue;
                }

                self.faces[id].deleted = true;

                for excluded in 0..D {
                    let mut ridge = Ridge::new();

                    for (k, &pt) in self.faces[id].pts.iter().enumerate() {
                        if k != excluded {
                            ridge.push(pt);
                        }
                    }

                    ridge.sort_unstable();
                    self.ridges.push(ridge);
                }
            }

            if self.ridges.is_empty() {
                // The support point saw no face at all; numerical trouble.
                log::debug!("EPA found no face visible from the new support point");
                return proj;
            }

            // Identical ridges came from two deleted faces and annihilate;
            // the survivors, joined to the new vertex, patch the hole.
            self.ridges.sort_unstable();

            let mut i = 0;
            while i < self.ridges.len() {
                if i + 1 < self.ridges.len() && self.ridges[i] == self.ridges[i + 1] {
                    i += 2;
                    continue;
                }

                let mut pts = [0usize; D];
                pts[..D - 1].copy_from_slice(&self.ridges[i]);
                pts[D - 1] = support_id;

                let face = Face::new(&self.vertices, pts, &interior);

                if !face.degenerate {
                    if let Some(fid) = FaceId::new(self.faces.len(), -face.dist) {
                        self.heap.push(fid);
                    }
                }

                self.faces.push(face);
                i += 1;
            }

            niter += 1;
            if niter >= iteration_limit {
                // Out of budget; the current projection is the best estimate.
                return proj;
            }
        }

        best_proj.unwrap_or_else(|| {
            log::debug!("EPA could not project the origin onto the initial polytope");
            Vector::zeros()
        })
    }
}
