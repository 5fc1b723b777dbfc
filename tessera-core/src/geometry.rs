//! Regular-polygon vertex generation
//!
//! Shapes with three or more edges are drawn as regular polygons
//! inscribed in the shape's bounding circle.

use core::f32::consts::TAU;

use heapless::Vec;
use libm::{cosf, roundf, sinf};

/// Vertex capacity; edge counts are capped at 6 by the splitter but
/// the buffer leaves headroom up to 12.
pub const MAX_VERTICES: usize = 12;

/// An integer pixel position, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Compute the vertices of a regular polygon inscribed in the circle
/// of the given diameter around `center`.
///
/// Vertex 0 sits directly above the center; the rest follow clockwise
/// at equal angular spacing, so the sequence always describes a simple
/// convex polygon.
///
/// # Panics
///
/// Panics if `edge_count` is outside `3..=MAX_VERTICES`.
pub fn polygon_vertices(center: Point, diameter: i32, edge_count: u8) -> Vec<Point, MAX_VERTICES> {
    assert!(
        (3..=MAX_VERTICES as u8).contains(&edge_count),
        "edge count out of range"
    );

    let radius = (diameter / 2) as f32;
    let step = TAU / edge_count as f32;

    let mut vertices = Vec::new();
    for i in 0..edge_count {
        let angle = step * i as f32;
        let x = center.x as f32 + radius * sinf(angle);
        let y = center.y as f32 - radius * cosf(angle);
        // Capacity check is the assert above
        let _ = vertices.push(Point::new(roundf(x) as i32, roundf(y) as i32));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let center = Point::new(50, 50);
        for n in 3..=MAX_VERTICES as u8 {
            assert_eq!(polygon_vertices(center, 30, n).len(), n as usize);
        }
    }

    #[test]
    fn test_first_vertex_straight_up() {
        let center = Point::new(72, 84);
        let vertices = polygon_vertices(center, 28, 5);
        assert_eq!(vertices[0], Point::new(72, 84 - 14));
    }

    #[test]
    fn test_square_symmetry() {
        // Four vertices at 90° spacing, symmetric about the center
        let center = Point::new(100, 100);
        let v = polygon_vertices(center, 30, 4);
        assert_eq!(v[0], Point::new(100, 85));
        assert_eq!(v[1], Point::new(115, 100));
        assert_eq!(v[2], Point::new(100, 115));
        assert_eq!(v[3], Point::new(85, 100));
    }

    #[test]
    fn test_vertices_on_circle() {
        let center = Point::new(0, 0);
        let radius = 20i32;
        for n in 3..=6u8 {
            for v in polygon_vertices(center, radius * 2, n) {
                let dist_sq = v.x * v.x + v.y * v.y;
                // Rounding moves a vertex less than one pixel off the circle
                assert!((dist_sq - radius * radius).abs() <= 2 * radius + 1);
            }
        }
    }

    #[test]
    #[should_panic(expected = "edge count out of range")]
    fn test_rejects_degenerate_polygon() {
        let _ = polygon_vertices(Point::new(0, 0), 30, 2);
    }
}
