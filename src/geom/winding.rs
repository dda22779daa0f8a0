//! Vertex-winding conversion between the producing tool's convention and the
//! geometry engine's.
//!
//! The producing tool emits polygon loops viewed from the outside face,
//! counter-clockwise, starting at a tool-defined corner. The geometry engine
//! expects the loop viewed from the inside face, counter-clockwise, starting
//! at its "lower-left" corner. The mapping between the two is a fixed
//! re-indexing of the same points; no coordinates are transformed.

use crate::Point;

/// Reorders a vertex loop from the source convention into the engine's.
///
/// For a loop `[v0, v1, ..., v(n-1)]` the result is
/// `[v2, v1, v0, v(n-1), ..., v3]`: the first three vertices reversed,
/// followed by the remaining vertices in descending index order. Downstream
/// shading and meshing registration depends on this exact ordering.
///
/// Loops with fewer than three vertices (possible only through a malformed
/// vertex count, which degrades to zero) are returned unchanged.
pub fn to_inside_lower_left(pts: &[Point]) -> Vec<Point> {
    if pts.len() < 3 {
        return pts.to_vec();
    }
    let mut out = Vec::with_capacity(pts.len());
    out.push(pts[2]);
    out.push(pts[1]);
    out.push(pts[0]);
    for i in (3..pts.len()).rev() {
        out.push(pts[i]);
    }
    out
}
