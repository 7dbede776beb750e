// private sub-module defined in other files
mod convex_hull;
mod minimum_enclosing_circle;

// exports identifiers from private sub-modules in the current module namespace
pub use self::convex_hull::ConvexHull;
pub use self::minimum_enclosing_circle::MinimumEnclosingCircle;
