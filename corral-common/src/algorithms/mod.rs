/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 19/05/2023
Last Modified: 30/05/2023
License: MIT
*/
// private sub-module defined in other files
mod convex_hull;
mod smallest_enclosing_circle;
mod smallest_enclosing_circle_naive;

// exports identifiers from private sub-modules in the current module namespace
pub use self::convex_hull::convex_hull;
pub use self::smallest_enclosing_circle::{
    circle_from_four_points, circle_from_three_points, circle_from_two_points,
    smallest_enclosing_circle, smallest_enclosing_circle_with_rng,
};
pub use self::smallest_enclosing_circle_naive::smallest_enclosing_circle_naive;
