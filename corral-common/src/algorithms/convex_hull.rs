/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 19/05/2023
Last Modified: 26/09/2023
License: MIT
*/
use crate::structures::{Direction, Point2D};
use std::cmp::Ordering;

/// Returns the convex hull of a set of Point2D in counter-clockwise order,
/// built with Andrew's monotone chain scan. Collinear points interior to a
/// hull edge are not reported as vertices, so a fully collinear input
/// collapses to its two extremes. Inputs with fewer than three distinct
/// points are returned sorted, without further processing.
pub fn convex_hull(points: &[Point2D]) -> Vec<Point2D> {
    let mut sorted: Vec<Point2D> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull: Vec<Point2D> = Vec::with_capacity(sorted.len() + 1);

    // lower chain, left to right
    for p in &sorted {
        while hull.len() >= 2
            && hull[hull.len() - 2].direction(&hull[hull.len() - 1], p) != Direction::Left
        {
            hull.pop();
        }
        hull.push(*p);
    }

    // upper chain, right to left; pops must not eat into the lower chain
    let lower_len = hull.len() + 1;
    for p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && hull[hull.len() - 2].direction(&hull[hull.len() - 1], p) != Direction::Left
        {
            hull.pop();
        }
        hull.push(*p);
    }

    // the start point closes the chain and is already first in the hull
    hull.pop();
    hull
}

#[cfg(test)]
mod test {
    use super::convex_hull;
    use crate::structures::Point2D;

    #[test]
    fn test_convex_hull() {
        let mut points: Vec<Point2D> = Vec::new();
        // These points form a triangle, so only the 3 vertices should be in the convex hull.
        for i in 1..10 {
            points.push(Point2D::new(i as f64, i as f64));
            points.push(Point2D::new(i as f64, (-i) as f64));
            points.push(Point2D::new(i as f64, 0.0));
        }
        points.push(Point2D::new(0.0, 0.0));
        let hull = convex_hull(&points);
        let hull_should_be = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(9.0, -9.0),
            Point2D::new(9.0, 9.0),
        ];
        assert_eq!(hull, hull_should_be);
    }

    #[test]
    fn test_square_hull_is_counter_clockwise() {
        let points = vec![
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(1.5, 0.5),
            Point2D::new(0.0, 2.0),
            Point2D::new(0.0, 0.0),
        ];
        let hull = convex_hull(&points);
        let hull_should_be = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ];
        assert_eq!(hull, hull_should_be);
    }

    #[test]
    fn test_collinear_points_collapse_to_extremes() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(3.0, 3.0),
            Point2D::new(1.0, 1.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull, vec![Point2D::new(0.0, 0.0), Point2D::new(3.0, 3.0)]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(convex_hull(&[]).is_empty());

        let single = vec![Point2D::new(4.0, -2.0); 3];
        assert_eq!(convex_hull(&single), vec![Point2D::new(4.0, -2.0)]);

        let pair = vec![
            Point2D::new(5.0, 1.0),
            Point2D::new(-1.0, 0.0),
            Point2D::new(5.0, 1.0),
        ];
        assert_eq!(
            convex_hull(&pair),
            vec![Point2D::new(-1.0, 0.0), Point2D::new(5.0, 1.0)]
        );
    }
}
