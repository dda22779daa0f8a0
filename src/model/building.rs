//! Building container - the top level of the hierarchy.
//!
//! Hierarchy: Building → Zone → {LightingSchedule, Surface → {Window, CFS},
//! ReferencePoint}, plus building-level shades.

use crate::model::limits::MONTHS;
use crate::model::zone::Zone;
use crate::name::{find_by_name, HasName};
use crate::Point;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Site location parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Site {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    /// Building azimuth relative to true north.
    pub azimuth: f64,
    /// Timezone offset in hours from UTC.
    pub timezone: f64,
}

/// A free-standing shading object at building level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingShade {
    pub name: String,
    /// Origin in the building coordinate system.
    pub origin: Point,
    pub height: f64,
    pub width: f64,
    pub azimuth: f64,
    pub tilt: f64,
    pub vis_refl: f64,
    pub gnd_refl: f64,
}

impl HasName for BuildingShade {
    fn get_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub site: Site,
    /// Monthly atmospheric moisture.
    pub atm_moisture: [f64; MONTHS],
    /// Monthly atmospheric turbidity.
    pub atm_turbidity: [f64; MONTHS],
    pub zones: Vec<Zone>,
    pub shades: Vec<BuildingShade>,
}

impl HasName for Building {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Building {
    /// Gets a zone by name.
    pub fn get_zone(&self, name: &str) -> Option<&Zone> {
        find_by_name(&self.zones, name)
    }

    /// Gets a building shade by name.
    pub fn get_shade(&self, name: &str) -> Option<&BuildingShade> {
        find_by_name(&self.shades, name)
    }

    /// Validates the structural integrity of the loaded model.
    ///
    /// Checks for duplicate entity names within each container, the dual
    /// vertex-loop length invariant on surfaces and windows, CFS placement
    /// indices in range, and reference-point slot matrices shaped to their
    /// zone's surfaces and windows.
    pub fn validate(&self) -> Result<()> {
        let mut zone_names: HashSet<&str> = HashSet::new();
        for zone in &self.zones {
            if !zone_names.insert(&zone.name) {
                return Err(anyhow!("Duplicate zone name: {}", zone.name));
            }

            let mut surf_names: HashSet<&str> = HashSet::new();
            for surface in &zone.surfaces {
                if !surf_names.insert(&surface.name) {
                    return Err(anyhow!(
                        "Duplicate surface name in zone '{}': {}",
                        zone.name,
                        surface.name
                    ));
                }
                if surface.vertices.len() != surface.vertices_inside.len() {
                    return Err(anyhow!(
                        "Surface '{}' vertex loops differ in length: {} vs {}",
                        surface.name,
                        surface.vertices.len(),
                        surface.vertices_inside.len()
                    ));
                }

                let mut wndo_names: HashSet<&str> = HashSet::new();
                for window in &surface.windows {
                    if !wndo_names.insert(&window.name) {
                        return Err(anyhow!(
                            "Duplicate window name on surface '{}': {}",
                            surface.name,
                            window.name
                        ));
                    }
                    if window.vertices.len() != window.vertices_inside.len() {
                        return Err(anyhow!(
                            "Window '{}' vertex loops differ in length: {} vs {}",
                            window.name,
                            window.vertices.len(),
                            window.vertices_inside.len()
                        ));
                    }
                }

                for placement in &surface.cfs_placements {
                    if placement.system >= surface.cfs_systems.len() {
                        return Err(anyhow!(
                            "CFS placement on surface '{}' references system {} of {}",
                            surface.name,
                            placement.system,
                            surface.cfs_systems.len()
                        ));
                    }
                }
            }

            for rp in &zone.ref_points {
                if rp.window_lum.len() != zone.surfaces.len() {
                    return Err(anyhow!(
                        "Reference point '{}' has {} slot rows for {} surfaces",
                        rp.name,
                        rp.window_lum.len(),
                        zone.surfaces.len()
                    ));
                }
                for (slots, surface) in rp.window_lum.iter().zip(&zone.surfaces) {
                    if slots.len() != surface.windows.len() {
                        return Err(anyhow!(
                            "Reference point '{}' has {} slots for {} windows on '{}'",
                            rp.name,
                            slots.len(),
                            surface.windows.len(),
                            surface.name
                        ));
                    }
                }
            }
        }

        let mut shade_names: HashSet<&str> = HashSet::new();
        for shade in &self.shades {
            if !shade_names.insert(&shade.name) {
                return Err(anyhow!("Duplicate building shade name: {}", shade.name));
            }
        }

        Ok(())
    }
}
