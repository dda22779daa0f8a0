//! Small geometry support for the loaded model.

pub mod point;
pub mod winding;

use point::Point;

/// Geometric precision
pub(crate) const EPS: f64 = 1e-13;

/// Area of a planar polygon in 3D via Newell's method.
///
/// Degenerate loops (fewer than 3 vertices) have zero area.
pub fn polygon_area(pts: &[Point]) -> f64 {
    if pts.len() < 3 {
        return 0.0;
    }
    let mut nx = 0.0;
    let mut ny = 0.0;
    let mut nz = 0.0;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        nx += (a.y - b.y) * (a.z + b.z);
        ny += (a.z - b.z) * (a.x + b.x);
        nz += (a.x - b.x) * (a.y + b.y);
    }
    0.5 * (nx * nx + ny * ny + nz * nz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_area_square() {
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(2.0, 2.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        ];
        assert!((polygon_area(&pts) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_polygon_area_vertical_wall() {
        // Winding direction must not matter for the magnitude
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 3.0, 0.0),
            Point::new(0.0, 3.0, 2.5),
            Point::new(0.0, 0.0, 2.5),
        ];
        assert!((polygon_area(&pts) - 7.5).abs() < 1e-10);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(polygon_area(&[]), 0.0);
        let pts = vec![Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
        assert_eq!(polygon_area(&pts), 0.0);
    }
}
