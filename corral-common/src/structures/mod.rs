// private sub-module defined in other files
mod circle;
mod point2d;

// exports identifiers from private sub-modules in the current module namespace
pub use self::circle::Circle;
pub use self::point2d::Direction;
pub use self::point2d::Point2D;
