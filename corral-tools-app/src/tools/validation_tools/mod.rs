// private sub-module defined in other files
mod validate_enclosing_circle;

// exports identifiers from private sub-modules in the current module namespace
pub use self::validate_enclosing_circle::ValidateEnclosingCircle;
