/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 12/05/2023
Last Modified: 03/02/2024
License: MIT
*/

use super::Point2D;

#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2D, // Center
    pub radius: f64,     // Radius
}

impl Circle {
    /// Creates a new Circle.
    pub fn new(center: Point2D, radius: f64) -> Circle {
        Circle {
            center: center,
            radius: radius,
        }
    }

    /// Tests whether `p` lies inside or on the circle, within `tolerance`.
    ///
    /// The overshoot of the squared distance beyond the squared radius is
    /// compared against both a relative bound (`radius^2 * tolerance`) and an
    /// absolute bound (`tolerance`), so the test remains usable for very large
    /// and for zero-radius circles alike. A point exactly on the boundary
    /// passes even with a tolerance of zero.
    ///
    /// A NaN radius or coordinate produces a zero overshoot, so a non-finite
    /// circle reports every point as contained; callers that care must screen
    /// with `radius.is_finite()`.
    pub fn contains(&self, p: Point2D, tolerance: f64) -> bool {
        let r_sqr = self.radius * self.radius;
        let err = (self.center.square_distance(&p) - r_sqr).max(0f64);
        err <= r_sqr * tolerance || err <= tolerance
    }
}
