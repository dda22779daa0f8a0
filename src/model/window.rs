use crate::model::limits::ZSHADE_SLOTS;
use crate::name::HasName;
use crate::Point;
use serde::{Deserialize, Serialize};

/// A window cut into a parent surface.
///
/// Both vertex loops list the same points: `vertices` exactly as read from
/// the stream (outside face, CCW) and `vertices_inside` reordered for the
/// geometry engine. The glazing type is a name-only reference resolved
/// against the library by the downstream engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    pub name: String,
    pub glass_type: String,
    pub shade_flag: i64,
    /// Shading-type name, present only when `shade_flag` is set.
    pub shade_type: Option<String>,
    /// Overhang/fin zone-shade depths.
    pub zshade_depth: [f64; ZSHADE_SLOTS],
    /// Overhang/fin zone-shade distances from the window.
    pub zshade_dist: [f64; ZSHADE_SLOTS],
    /// Vertex loop as read: outside face, counter-clockwise.
    pub vertices: Vec<Point>,
    /// The same loop reordered: inside face, CCW, lower-left start.
    pub vertices_inside: Vec<Point>,
}

impl HasName for Window {
    fn get_name(&self) -> &str {
        &self.name
    }
}
