//! Simple-polygon triangulation by ear clipping.
//!
//! The mesh assembler consumes triangle indices through this seam; any
//! routine with the same contract (simple, consistently-wound polygon in,
//! triangle index list out) could stand in for it.

use crate::geometry::{signed_area, Point};

/// Triangulate a simple closed polygon, returning triangle vertex indices.
///
/// Works for convex and concave outlines in either winding. A simple
/// n-gon always yields n - 2 triangles; degenerate input (collinear runs,
/// near-duplicate points) falls back to force-clipping so the result is
/// still usable.
pub fn triangulate(points: &[Point]) -> Vec<u32> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let clockwise = signed_area(points) < 0.0;
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity((n - 2) * 3);

    while remaining.len() > 3 {
        let len = remaining.len();
        let mut clipped = false;

        for i in 0..len {
            let prev = remaining[(i + len - 1) % len];
            let curr = remaining[i];
            let next = remaining[(i + 1) % len];

            if is_ear(prev, curr, next, &remaining, points, clockwise) {
                triangles.extend_from_slice(&[prev as u32, curr as u32, next as u32]);
                remaining.remove(i);
                clipped = true;
                break;
            }
        }

        // Degenerate polygon: no ear found, force-clip to keep moving
        if !clipped {
            triangles.extend_from_slice(&[
                remaining[0] as u32,
                remaining[1] as u32,
                remaining[2] as u32,
            ]);
            remaining.remove(1);
        }
    }

    triangles.extend_from_slice(&[
        remaining[0] as u32,
        remaining[1] as u32,
        remaining[2] as u32,
    ]);

    triangles
}

/// A vertex is an ear when its corner is convex and no other remaining
/// vertex lies inside the candidate triangle.
fn is_ear(
    prev: usize,
    curr: usize,
    next: usize,
    remaining: &[usize],
    points: &[Point],
    clockwise: bool,
) -> bool {
    let a = points[prev];
    let b = points[curr];
    let c = points[next];

    let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
    let convex = if clockwise { cross <= 0.0 } else { cross >= 0.0 };
    if !convex {
        return false;
    }

    for &idx in remaining {
        if idx == prev || idx == curr || idx == next {
            continue;
        }
        if point_in_triangle(points[idx], a, b, c) {
            return false;
        }
    }

    true
}

fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

#[inline]
fn edge_sign(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangulates_square() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let indices = triangulate(&square);
        assert_eq!(indices.len(), 6, "square splits into 2 triangles");
        assert!(indices.iter().all(|&i| (i as usize) < square.len()));
    }

    #[test]
    fn triangulates_pentagon() {
        let pentagon = vec![
            Point::new(50.0, 0.0),
            Point::new(100.0, 38.0),
            Point::new(81.0, 100.0),
            Point::new(19.0, 100.0),
            Point::new(0.0, 38.0),
        ];
        let indices = triangulate(&pentagon);
        assert_eq!(indices.len(), 9, "pentagon splits into 3 triangles");
    }

    #[test]
    fn handles_concave_polygon() {
        // L-shape
        let poly = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(50.0, 50.0),
            Point::new(50.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let indices = triangulate(&poly);
        assert_eq!(indices.len(), 12, "L-shape splits into 4 triangles");
    }

    #[test]
    fn handles_clockwise_winding() {
        let square_cw = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
        ];
        let indices = triangulate(&square_cw);
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn sampled_outline_triangulates_fully() {
        // A dense sampled outline like the outline builder produces
        let n = 32;
        let circle: Vec<Point> = (0..n)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                Point::new(a.cos(), a.sin())
            })
            .collect();
        let indices = triangulate(&circle);
        assert_eq!(indices.len(), (n - 2) * 3);
    }

    #[test]
    fn too_few_points_yield_nothing() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).is_empty());
    }
}
