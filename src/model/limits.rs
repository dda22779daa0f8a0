//! Static capacity limits and fixed dimensions of the building-description
//! format.
//!
//! A count field exceeding its limit aborts the whole load; see
//! [`crate::io::LoadError::CapacityExceeded`].

/// Maximum zones per building.
pub const MAX_ZONES: usize = 32;
/// Maximum lighting schedules per zone.
pub const MAX_LIGHT_SCHEDULES: usize = 16;
/// Maximum surfaces per zone.
pub const MAX_ZONE_SURFACES: usize = 100;
/// Maximum windows per surface.
pub const MAX_SURFACE_WINDOWS: usize = 50;
/// Maximum CFS records per surface.
pub const MAX_SURFACE_CFS: usize = 50;
/// Maximum reference points per zone.
pub const MAX_REF_POINTS: usize = 100;
/// Maximum building-level shades.
pub const MAX_BLDG_SHADES: usize = 100;
/// Maximum glass types in the library.
pub const MAX_GLASS_TYPES: usize = 200;

/// Months in the atmospheric-moisture and turbidity sequences.
pub const MONTHS: usize = 12;
/// Hourly values per lighting schedule.
pub const HOURS: usize = 24;
/// Overhang/fin slots per window zone-shade array.
pub const ZSHADE_SLOTS: usize = 4;

/// Grid-node budget per meshed polygon; the node area is raised when a
/// polygon would need more cells than this.
pub const MAX_GRID_NODES: usize = 2500;

/// Inbound photometric sampling resolution applied to every CFS system.
pub const BTDF_RES_IN: usize = 300;
/// Outbound photometric sampling resolution applied to every CFS system.
pub const BTDF_RES_OUT: usize = 2500;
