//! Scalar and linear-algebra type aliases.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Real = f32;

#[cfg(not(any(feature = "f32", feature = "f64")))]
std::compile_error!("At least one of the `f32` or `f64` features must be enabled.");

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The largest space dimension supported by the simplex machinery.
///
/// The fixed-capacity buffers backing simplices, facet bases, and polytope
/// faces are all sized by this bound. Instantiating a query with `D` greater
/// than `MAX_DIM` panics on entry.
pub const MAX_DIM: usize = 8;

/// Capacity of a simplex buffer: `MAX_DIM + 1` vertices, plus one slot for a
/// freshly inserted support point awaiting reduction.
pub const SIMPLEX_CAP: usize = MAX_DIM + 2;

/// A vector with `D` components.
pub type Vector<const D: usize> = na::SVector<Real, D>;

/// A point of `D`-dimensional space.
pub type Point<const D: usize> = na::Point<Real, D>;

/// A unit-length vector with `D` components.
pub type UnitVector<const D: usize> = na::Unit<na::SVector<Real, D>>;
