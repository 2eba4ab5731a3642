//! Penetration depth computation using the Expanding Polytope Algorithm.

pub use self::epa::EPA;

mod epa;
