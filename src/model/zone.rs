use crate::model::refpoint::ReferencePoint;
use crate::model::schedule::LightingSchedule;
use crate::model::surface::Surface;
use crate::name::{find_by_name, HasName};
use crate::Point;
use serde::{Deserialize, Serialize};

/// A thermal/daylighting zone of the building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    /// Zone origin in the building coordinate system.
    pub origin: Point,
    /// Zone azimuth in the building coordinate system.
    pub azimuth: f64,
    /// Occupancy multiplier.
    pub multiplier: f64,
    pub floor_area: f64,
    pub volume: f64,
    /// Installed lighting power.
    pub lighting_power: f64,
    /// Minimum power fraction for dimming control.
    pub min_power_frac: f64,
    /// Minimum light fraction for dimming control.
    pub min_light_frac: f64,
    /// Discrete lighting-control step count.
    pub control_steps: i64,
    /// Lighting-control probability.
    pub control_prob: f64,
    pub view_azimuth: f64,
    /// Target maximum mesh cell area. Meshing may raise this when a polygon
    /// would otherwise exceed the grid-node budget.
    pub max_grid_node_area: f64,
    pub schedules: Vec<LightingSchedule>,
    pub surfaces: Vec<Surface>,
    pub ref_points: Vec<ReferencePoint>,
}

impl HasName for Zone {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Zone {
    /// Gets a surface by name.
    pub fn get_surface(&self, name: &str) -> Option<&Surface> {
        find_by_name(&self.surfaces, name)
    }

    /// Gets a lighting schedule by name.
    pub fn get_schedule(&self, name: &str) -> Option<&LightingSchedule> {
        find_by_name(&self.schedules, name)
    }

    /// Gets a reference point by name.
    pub fn get_ref_point(&self, name: &str) -> Option<&ReferencePoint> {
        find_by_name(&self.ref_points, name)
    }

    /// Total number of windows across all surfaces of the zone.
    pub fn window_count(&self) -> usize {
        self.surfaces.iter().map(|s| s.windows.len()).sum()
    }
}
