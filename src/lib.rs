//! Building-model ingestion for a daylighting calculation engine.
//!
//! Reads a fixed-schema, line-oriented building description produced by an
//! external energy-simulation tool and materializes it into an in-memory
//! hierarchy:
//!
//! Building → Zone → {LightingSchedule, Surface → {Window, CFS}, ReferencePoint}
//!
//! plus building-level shades and, from a separate stream, a library of
//! glazing types. The loaded model is consumed by the downstream daylighting
//! engine; this crate performs no photometric computation itself.

pub mod geom;
pub mod io;
pub mod mesh;
pub mod model;
mod name;

// Prelude
pub use geom::point::Point;
pub use geom::winding::to_inside_lower_left;
pub use io::eplus::{read_building, read_building_file};
pub use io::library::{read_library, read_library_file};
pub use io::record::RecordReader;
pub use io::LoadError;
pub use mesh::{GridMesher, MeshInit};
pub use model::building::{Building, BuildingShade, Site};
pub use model::cfs::{CaretDecoder, CfsDecoder, CfsParams, CfsPlacement, CfsSystem, DecodeError};
pub use model::library::{GlassType, Library};
pub use model::refpoint::{ReferencePoint, WindowLum};
pub use model::schedule::LightingSchedule;
pub use model::surface::Surface;
pub use model::window::Window;
pub use model::zone::Zone;
pub use name::HasName;
