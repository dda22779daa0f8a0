use crate::model::cfs::{CfsPlacement, CfsSystem};
use crate::model::window::Window;
use crate::name::{find_by_name, HasName};
use crate::Point;
use serde::{Deserialize, Serialize};

/// An opaque surface of a zone, with its windows and CFS placements.
///
/// Azimuth and tilt are stored in both the building and zone coordinate
/// systems: the zone-system tilt equals the building-system tilt, and the
/// zone-system azimuth is the building-system azimuth minus the zone azimuth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub azimuth_bldg: f64,
    pub azimuth_zone: f64,
    pub tilt_bldg: f64,
    pub tilt_zone: f64,
    /// Interior visible reflectance.
    pub vis_refl: f64,
    /// Exterior visible reflectance.
    pub ext_vis_refl: f64,
    /// Ground reflectance seen by this surface.
    pub gnd_refl: f64,
    /// Vertex loop as read: outside face, counter-clockwise.
    pub vertices: Vec<Point>,
    /// The same loop reordered: inside face, CCW, lower-left start.
    pub vertices_inside: Vec<Point>,
    pub windows: Vec<Window>,
    /// Distinct CFS system definitions discovered on this surface, in
    /// first-use order.
    pub cfs_systems: Vec<CfsSystem>,
    /// One placement per CFS record, referencing `cfs_systems` by index.
    pub cfs_placements: Vec<CfsPlacement>,
}

impl HasName for Surface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Surface {
    /// Gets a window by name.
    pub fn get_window(&self, name: &str) -> Option<&Window> {
        find_by_name(&self.windows, name)
    }

    /// Resolves a placement's shared system definition.
    pub fn placement_system(&self, placement: &CfsPlacement) -> Option<&CfsSystem> {
        self.cfs_systems.get(placement.system)
    }
}
