//! Dimension-generic orthonormal basis construction.

use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON, MAX_DIM};
use arrayvec::ArrayVec;

/// A small, fixed-capacity set of orthonormal vectors.
pub type Basis<const D: usize> = ArrayVec<Vector<D>, MAX_DIM>;

/// Relative cutoff below which a Gram-Schmidt remainder is treated as
/// linearly dependent on the vectors already collected.
fn dependence_cutoff() -> Real {
    DEFAULT_EPSILON.sqrt()
}

/// Subtracts from `v` its projection onto every vector of the orthonormal
/// set `basis`.
fn reject<const D: usize>(mut v: Vector<D>, basis: &[Vector<D>]) -> Vector<D> {
    for b in basis {
        v -= b * v.dot(b);
    }
    v
}

/// Builds an orthonormal basis of the subspace spanned by `vs` using modified
/// Gram-Schmidt.
///
/// Vectors linearly dependent on their predecessors are dropped, so the
/// result's length is the numerical rank of `vs`.
pub fn orthonormalize<const D: usize>(vs: &[Vector<D>]) -> Basis<D> {
    let mut basis = Basis::new();
    orthonormalize_extend(&mut basis, vs);
    basis
}

/// Extends the orthonormal set `basis` with the vectors of `vs`, dropping the
/// linearly dependent ones.
pub fn orthonormalize_extend<const D: usize>(basis: &mut Basis<D>, vs: &[Vector<D>]) {
    for v in vs {
        let scale = v.norm();
        if scale <= DEFAULT_EPSILON {
            continue;
        }

        // A second rejection pass keeps the result orthonormal even when the
        // input is poorly conditioned.
        let mut w = reject(*v, basis);
        w = reject(w, basis);

        let norm = w.norm();
        if norm > dependence_cutoff() * scale {
            basis.push(w / norm);
        }
    }
}

/// Builds an orthonormal basis of the orthogonal complement of the
/// orthonormal set `basis`.
///
/// The result has `D - basis.len()` vectors. Candidate canonical axes are
/// drafted greedily, largest rejection first, so the construction stays
/// stable when `basis` nearly contains one of the axes.
pub fn orthonormal_complement<const D: usize>(basis: &[Vector<D>]) -> Basis<D> {
    let mut res = Basis::new();
    let missing = D.saturating_sub(basis.len());

    while res.len() < missing {
        let mut best = None;
        let mut best_norm: Real = 0.0;

        for i in 0..D {
            let mut axis = Vector::<D>::zeros();
            axis[i] = 1.0;
            let w = reject(reject(axis, basis), &res);
            let norm = w.norm();

            if norm > best_norm {
                best_norm = norm;
                best = Some(w / norm);
            }
        }

        match best {
            Some(b) if best_norm > dependence_cutoff() => res.push(b),
            // `basis` was not orthonormal after all; stop rather than spin.
            _ => break,
        }
    }

    res
}

/// The component of `v` lying in the subspace spanned by the orthonormal set
/// `basis`.
pub fn project_onto_basis<const D: usize>(v: &Vector<D>, basis: &[Vector<D>]) -> Vector<D> {
    let mut res = Vector::zeros();
    for b in basis {
        res += b * v.dot(b);
    }
    res
}

/// Computes a unit normal of the hyperplane spanned by `edges` (the vectors
/// from one vertex of a face to all its other vertices).
///
/// Returns `None` if the face is degenerate, i.e. its edges span fewer than
/// `D - 1` dimensions.
pub fn hyperplane_normal<const D: usize>(edges: &[Vector<D>]) -> Option<UnitVector<D>> {
    let span = orthonormalize(edges);
    if span.len() + 1 != D {
        return None;
    }

    let comp = orthonormal_complement(&span);
    if comp.len() == 1 {
        Some(na::Unit::new_unchecked(comp[0]))
    } else {
        None
    }
}
