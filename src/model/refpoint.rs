use crate::name::HasName;
use crate::Point;
use serde::{Deserialize, Serialize};

/// Luminance-factor slot for one (surface, window) pair, seen from one
/// reference point. All factors are zero until the calculation engine fills
/// them in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WindowLum {
    pub overcast_sky: f64,
    pub clear_sky: f64,
    pub clear_sun: f64,
}

/// A fixed location in a zone where illuminance is later evaluated.
///
/// The source stream carries world-referenced coordinates, so the zone-system
/// and building-system locations coincide at load time. The `window_lum`
/// matrix is allocated when the point is constructed, with one slot for every
/// window that exists in the parent zone at that moment; reference points are
/// read only after all surfaces and windows, so the allocation is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    /// Location in zone-system coordinates.
    pub zone_coords: Point,
    /// Location in building-system coordinates.
    pub bldg_coords: Point,
    /// Fraction of the zone's illuminance this point controls.
    pub zone_fraction: f64,
    /// Target light-level setpoint.
    pub light_setpoint: f64,
    /// Lighting-control type code.
    pub control_type: i64,
    /// Luminance-factor slots indexed `[surface][window]`.
    pub window_lum: Vec<Vec<WindowLum>>,
}

impl HasName for ReferencePoint {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl ReferencePoint {
    /// Total number of luminance slots, one per window in the parent zone.
    pub fn lum_slot_count(&self) -> usize {
        self.window_lum.iter().map(|w| w.len()).sum()
    }
}
