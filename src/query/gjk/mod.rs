//! The GJK algorithm for intersection tests.

pub use self::gjk::{eps_tol, intersection, GJKResult};
pub use self::simplex::Simplex;
pub use self::special_support_maps::{ConstantOrigin, MinkowskiDiff};

mod gjk;
mod simplex;
mod special_support_maps;
