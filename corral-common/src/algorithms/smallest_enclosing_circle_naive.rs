/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 30/05/2023
Last Modified: 03/02/2024
License: MIT
*/
use crate::algorithms::{circle_from_three_points, circle_from_two_points, convex_hull};
use crate::structures::{Circle, Point2D};

/// Returns the smallest enclosing circle by exhaustive search, as an
/// independent cross-check on [`smallest_enclosing_circle`]. Every circle
/// defined by a triple of candidate points is tried, keeping the smallest one
/// that covers all candidates within `tolerance`. The candidates are the
/// convex hull vertices; when the hull degenerates to fewer than three
/// vertices the raw point set is searched instead. Cubic in the candidate
/// count, so only suitable for validation-sized inputs.
///
/// [`smallest_enclosing_circle`]: crate::algorithms::smallest_enclosing_circle
pub fn smallest_enclosing_circle_naive(points: &[Point2D], tolerance: f64) -> Circle {
    let hull = convex_hull(points);
    let candidates: Vec<Point2D> = if hull.len() >= 3 {
        hull
    } else {
        points.to_vec()
    };

    match candidates.len() {
        0 => Circle::new(Point2D::new(0f64, 0f64), 0f64),
        1 => Circle::new(candidates[0], 0f64),
        2 => circle_from_two_points(candidates[0], candidates[1]),
        _ => {
            let mut smallest = Circle::new(Point2D::new(0f64, 0f64), f64::INFINITY);
            for i in 2..candidates.len() {
                for j in 1..i {
                    for k in 0..j {
                        let c = circle_from_three_points(candidates[i], candidates[j], candidates[k]);
                        // a NaN candidate circle never compares below the
                        // running best, so degenerate triples drop out here
                        if c.radius < smallest.radius
                            && candidates.iter().all(|p| c.contains(*p, tolerance))
                        {
                            smallest = c;
                        }
                    }
                }
            }
            smallest
        }
    }
}

#[cfg(test)]
mod test {
    use super::smallest_enclosing_circle_naive;
    use crate::algorithms::{circle_from_two_points, smallest_enclosing_circle_with_rng};
    use crate::structures::{Circle, Point2D};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOLERANCE: f64 = 1e-8;

    #[test]
    fn test_small_inputs() {
        assert_eq!(
            smallest_enclosing_circle_naive(&[], TOLERANCE),
            Circle::new(Point2D::new(0.0, 0.0), 0.0)
        );

        let single = [Point2D::new(5.0, 5.0)];
        assert_eq!(
            smallest_enclosing_circle_naive(&single, TOLERANCE),
            Circle::new(single[0], 0.0)
        );

        let pair = [Point2D::new(1.0, 1.0), Point2D::new(3.0, 5.0)];
        assert_eq!(
            smallest_enclosing_circle_naive(&pair, TOLERANCE),
            circle_from_two_points(pair[0], pair[1])
        );

        let triangle = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(0.0, 3.0),
        ];
        assert_eq!(
            smallest_enclosing_circle_naive(&triangle, TOLERANCE),
            Circle::new(Point2D::new(2.0, 1.5), 2.5)
        );
    }

    #[test]
    fn test_square_corners() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ];
        let circle = smallest_enclosing_circle_naive(&points, TOLERANCE);
        assert_eq!(circle, Circle::new(Point2D::new(1.0, 1.0), 2f64.sqrt()));
    }

    #[test]
    fn test_collinear_fallback_searches_raw_points() {
        // the hull of a collinear run has only two vertices, so the raw set
        // is searched; the winner is the diameter circle of the two extremes
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(3.0, 3.0),
            Point2D::new(1.0, 1.0),
        ];
        let circle = smallest_enclosing_circle_naive(&points, TOLERANCE);
        assert_eq!(circle, Circle::new(Point2D::new(1.5, 1.5), 4.5f64.sqrt()));
    }

    #[test]
    fn test_two_locations_under_duplicates() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 0.0),
        ];
        let circle = smallest_enclosing_circle_naive(&points, TOLERANCE);
        assert_eq!(circle, Circle::new(Point2D::new(1.0, 0.0), 1.0));
    }

    #[test]
    fn test_agrees_with_randomized_solver() {
        let mut data_rng = StdRng::seed_from_u64(2718);
        let points: Vec<Point2D> = (0..150)
            .map(|_| {
                Point2D::new(
                    data_rng.gen_range(0f64..1000f64),
                    data_rng.gen_range(0f64..1000f64),
                )
            })
            .collect();

        let expected = smallest_enclosing_circle_naive(&points, TOLERANCE);
        let mut rng = StdRng::seed_from_u64(9);
        let actual = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut rng);

        assert!(actual.center.square_distance(&expected.center) <= TOLERANCE);
        assert!((actual.radius - expected.radius).abs() <= TOLERANCE);
        for p in &points {
            assert!(expected.contains(*p, TOLERANCE));
        }
    }
}
