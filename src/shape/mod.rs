//! Support mapping based shapes.

pub use self::ball::Ball;
pub use self::convex_polytope::ConvexPolytope;
pub use self::cuboid::Cuboid;
pub use self::support_map::SupportMap;

mod ball;
mod convex_polytope;
mod cuboid;
mod support_map;
