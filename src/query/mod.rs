//! Non-persistent geometric queries.
//!
//! The most general methods provided by this module are:
//!
//! * [`intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`minimal_separation_axis()`] to compute the minimum translation vector of
//!   two overlapping shapes, or the closest-approach vector of two disjoint ones.
//! * [`distance()`] to compute the distance between two shapes.
//!
//! Every query operates on the Minkowski difference of the two shapes and only
//! requires them to implement [`SupportMap`](crate::shape::SupportMap).

pub use self::intersection::{intersection_test, intersection_test_with_axis};
pub use self::separation::{
    distance, minimal_separation_axis, minimal_separation_axis_with_params,
};

pub mod epa;
pub mod gjk;
mod intersection;
mod separation;
