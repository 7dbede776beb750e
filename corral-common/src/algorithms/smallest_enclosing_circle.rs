/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 22/05/2023
Last Modified: 03/02/2024
License: MIT

NOTES: The incremental update scheme follows the move-to-front variant of
       Welzl's algorithm, E. Welzl (1991), "Smallest enclosing disks
       (balls and ellipsoids)".
*/
use crate::structures::{Circle, Point2D};
use rand::prelude::*;

/// Returns the smallest circle that encloses all the given points. Runs in
/// expected O(n) time, randomized. The scan order is drawn from `thread_rng`;
/// use [`smallest_enclosing_circle_with_rng`] to supply a seeded source.
/// Note: If 0 points are given, a circle of radius 0f64 at the origin is
/// returned. If 1 point is given, a circle of radius 0f64 at that point is
/// returned.
pub fn smallest_enclosing_circle(points: &[Point2D], tolerance: f64) -> Circle {
    let mut rng = thread_rng();
    smallest_enclosing_circle_with_rng(points, tolerance, &mut rng)
}

/// Same as [`smallest_enclosing_circle`], but drawing the randomized scan
/// order from the supplied source. Equal seeds give bitwise-equal circles.
pub fn smallest_enclosing_circle_with_rng<R: Rng + ?Sized>(
    points: &[Point2D],
    tolerance: f64,
    rng: &mut R,
) -> Circle {
    // Four or fewer points are handled by the closed forms directly.
    match points.len() {
        0 => return Circle::new(Point2D::new(0f64, 0f64), 0f64),
        1 => return Circle::new(points[0], 0f64),
        2 => return circle_from_two_points(points[0], points[1]),
        3 => return circle_from_three_points(points[0], points[1], points[2]),
        4 => {
            return circle_from_four_points(points[0], points[1], points[2], points[3], tolerance)
        }
        _ => {}
    }

    // Clone the list to preserve the caller's data, then shuffle the clone so
    // the scan order is independent of the input order.
    let mut shuffled: Vec<Point2D> = points.to_vec();
    shuffled.shuffle(rng);

    // Progressively add points, recomputing the circle whenever a scanned
    // point falls outside it. A point that triggers a recompute is on the
    // boundary of every circle built until the next trigger.
    let mut c = Circle::new(shuffled[0], 0f64);
    for i in 1..shuffled.len() {
        let p0 = shuffled[i];
        if !c.contains(p0, tolerance) {
            // One boundary point known.
            c = Circle::new(p0, 0f64);
            for j in 0..i {
                let p1 = shuffled[j];
                if !c.contains(p1, tolerance) {
                    // Two boundary points known.
                    c = circle_from_two_points(p0, p1);
                    for k in 0..j {
                        let p2 = shuffled[k];
                        if !c.contains(p2, tolerance) {
                            c = circle_from_three_points(p0, p1, p2);
                        }
                    }
                }
            }
        }
    }
    c
}

/// Returns the circle having the segment from `a` to `b` as a diameter.
pub fn circle_from_two_points(a: Point2D, b: Point2D) -> Circle {
    let c = Point2D::midpoint(&a, &b);
    Circle::new(c, (c.distance(&a)).max(c.distance(&b)))
}

/// Returns the smallest circle enclosing the three given points. An obtuse or
/// right triangle is covered by the circle on its longest side; only an acute
/// triangle needs its circumscribed circle. The vertex tests run in a fixed
/// order and the first side to qualify wins, which pins down the result for a
/// right triangle, where the circumcircle ties the diameter circle.
pub fn circle_from_three_points(p0: Point2D, p1: Point2D, p2: Point2D) -> Circle {
    if (p1 - p0) * (p2 - p0) <= 0f64 {
        return circle_from_two_points(p1, p2);
    }
    if (p0 - p1) * (p2 - p1) <= 0f64 {
        return circle_from_two_points(p0, p2);
    }
    if (p0 - p2) * (p1 - p2) <= 0f64 {
        return circle_from_two_points(p0, p1);
    }
    circumcircle(p0, p1, p2)
}

/// Returns the smallest circle enclosing the four given points, built from
/// the closed form for three. The first three-point circle that covers the
/// left-out point, tested within `tolerance`, is taken.
pub fn circle_from_four_points(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    tolerance: f64,
) -> Circle {
    let c = circle_from_three_points(p0, p1, p2);
    if c.contains(p3, tolerance) {
        return c;
    }
    let c = circle_from_three_points(p0, p1, p3);
    if c.contains(p2, tolerance) {
        return c;
    }
    let c = circle_from_three_points(p0, p2, p3);
    if c.contains(p1, tolerance) {
        return c;
    }
    circle_from_three_points(p1, p2, p3)
}

// Circumscribed circle, solved about the midpoint of the triple's bounding
// box to keep the intermediate products small. A degenerate triple makes the
// determinant zero and the division sends the centre and radius non-finite;
// callers that need to detect that screen with radius.is_finite().
fn circumcircle(a: Point2D, b: Point2D, c: Point2D) -> Circle {
    let ox = ((a.x.min(b.x)).min(c.x) + (a.x.max(b.x)).max(c.x)) / 2f64;
    let oy = ((a.y.min(b.y)).min(c.y) + (a.y.max(b.y)).max(c.y)) / 2f64;
    let ax = a.x - ox;
    let ay = a.y - oy;
    let bx = b.x - ox;
    let by = b.y - oy;
    let cx = c.x - ox;
    let cy = c.y - oy;
    let d = (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)) * 2f64;
    let x = ((ax * ax + ay * ay) * (by - cy)
        + (bx * bx + by * by) * (cy - ay)
        + (cx * cx + cy * cy) * (ay - by))
        / d;
    let y = ((ax * ax + ay * ay) * (cx - bx)
        + (bx * bx + by * by) * (ax - cx)
        + (cx * cx + cy * cy) * (bx - ax))
        / d;
    let p = Point2D::new(ox + x, oy + y);
    let r = (p.distance(&a).max(p.distance(&b))).max(p.distance(&c));

    Circle::new(p, r)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::structures::{Circle, Point2D};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-8;

    #[test]
    fn test_smallest_enclosing_circle() {
        // make a square
        let side_length = 2f64;
        let mut points: Vec<Point2D> = Vec::new();
        points.push(Point2D::new(0f64, 0f64)); // origin
        points.push(Point2D::new(side_length, 0f64));
        points.push(Point2D::new(side_length, side_length));
        points.push(Point2D::new(0f64, side_length));

        // add some interior points
        points.push(Point2D::new(side_length * 0.5, side_length * 0.5));
        points.push(Point2D::new(side_length * 0.25, side_length * 0.7));
        points.push(Point2D::new(side_length * 0.1, side_length * 0.9));

        let circle = smallest_enclosing_circle(&points, TOLERANCE);

        let centre = Point2D::new(side_length / 2f64, side_length / 2f64);
        let r = centre.distance(&Point2D::new(side_length, side_length));
        assert_eq!(circle, Circle::new(centre, r));
    }

    #[test]
    fn test_right_triangle_covered_by_hypotenuse() {
        let circle = circle_from_three_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(0.0, 3.0),
        );
        assert_eq!(circle, Circle::new(Point2D::new(2.0, 1.5), 2.5));
    }

    #[test]
    fn test_acute_triangle_takes_circumcircle() {
        let circle = circle_from_three_points(
            Point2D::new(-1.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 2.0),
        );
        assert_eq!(circle, Circle::new(Point2D::new(0.0, 0.75), 1.25));
    }

    #[test]
    fn test_right_angle_takes_first_qualifying_side() {
        // right angle at the first vertex; the circle on the far side wins
        let circle = circle_from_three_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(0.0, 1.0),
        );
        assert_eq!(circle, Circle::new(Point2D::new(1.0, 0.5), 1.25f64.sqrt()));

        // right angle at the last vertex; its circumcircle and the circle on
        // the opposite side coincide, and the side form is the one returned
        let circle = circle_from_three_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(1.0, 1.0),
        );
        assert_eq!(circle, Circle::new(Point2D::new(1.0, 0.0), 1.0));
    }

    #[test]
    fn test_four_point_cascade() {
        // all four corners are covered by the first three-point candidate
        let circle = circle_from_four_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
            TOLERANCE,
        );
        assert_eq!(circle.center, Point2D::new(1.0, 1.0));
        assert!((circle.radius - 2f64.sqrt()).abs() < 1e-12);

        // the far point forces the cascade past the first candidate
        let circle = circle_from_four_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 0.5),
            Point2D::new(10.0, 10.0),
            TOLERANCE,
        );
        assert_eq!(circle, Circle::new(Point2D::new(5.0, 5.0), 50f64.sqrt()));
    }

    #[test]
    fn test_small_inputs_match_closed_forms() {
        let pts = [
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 0.5),
            Point2D::new(10.0, 10.0),
        ];
        assert_eq!(
            smallest_enclosing_circle(&pts[..0], TOLERANCE),
            Circle::new(Point2D::new(0.0, 0.0), 0.0)
        );
        assert_eq!(
            smallest_enclosing_circle(&pts[..1], TOLERANCE),
            Circle::new(pts[0], 0.0)
        );
        assert_eq!(
            smallest_enclosing_circle(&pts[..2], TOLERANCE),
            circle_from_two_points(pts[0], pts[1])
        );
        assert_eq!(
            smallest_enclosing_circle(&pts[..3], TOLERANCE),
            circle_from_three_points(pts[0], pts[1], pts[2])
        );
        assert_eq!(
            smallest_enclosing_circle(&pts, TOLERANCE),
            circle_from_four_points(pts[0], pts[1], pts[2], pts[3], TOLERANCE)
        );
    }

    #[test]
    fn test_duplicate_points() {
        // triplicated right triangle; the duplicates must not disturb the circle
        let mut points: Vec<Point2D> = Vec::new();
        for _ in 0..3 {
            points.push(Point2D::new(0.0, 0.0));
            points.push(Point2D::new(4.0, 0.0));
            points.push(Point2D::new(0.0, 3.0));
        }
        let mut rng = StdRng::seed_from_u64(99);
        let circle = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut rng);
        assert_eq!(circle, Circle::new(Point2D::new(2.0, 1.5), 2.5));
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut data_rng = StdRng::seed_from_u64(42);
        let points: Vec<Point2D> = (0..60)
            .map(|_| {
                Point2D::new(
                    data_rng.gen_range(0f64..1000f64),
                    data_rng.gen_range(0f64..1000f64),
                )
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        let c1 = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut rng);
        let mut rng = StdRng::seed_from_u64(7);
        let c2 = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut rng);
        assert_eq!(c1, c2);

        // a different seed shuffles differently but lands on the same circle
        let mut rng = StdRng::seed_from_u64(8);
        let c3 = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut rng);
        assert!(c1.center.square_distance(&c3.center) < 1e-9);
        assert!((c1.radius - c3.radius).abs() < 1e-9);
    }

    #[test]
    fn test_encloses_random_cloud() {
        let mut data_rng = StdRng::seed_from_u64(314);
        let points: Vec<Point2D> = (0..200)
            .map(|_| {
                Point2D::new(
                    data_rng.gen_range(0f64..1000f64),
                    data_rng.gen_range(0f64..1000f64),
                )
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(1);
        let circle = smallest_enclosing_circle_with_rng(&points, TOLERANCE, &mut rng);
        assert!(circle.radius.is_finite());
        assert!(circle.radius > 0f64);
        for p in &points {
            assert!(circle.contains(*p, TOLERANCE));
        }
    }

    #[test]
    fn test_nan_coordinates_propagate() {
        let circle = circle_from_three_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(f64::NAN, 1.0),
        );
        assert!(circle.radius.is_nan());
    }
}
