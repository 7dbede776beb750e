// private sub-module defined in other files
mod random_points;

// exports identifiers from private sub-modules in the current module namespace
pub use self::random_points::RandomPoints;
