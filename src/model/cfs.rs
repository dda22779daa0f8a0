//! Complex fenestration systems: shared system definitions and per-surface
//! placements.
//!
//! A CFS system definition carries expensive photometric sampling state, so
//! definitions are deduplicated per surface by their parameter signature
//! string. Each placement keeps its own geometric instancing (rotation,
//! footprint) and references the shared definition by index into the parent
//! surface's system list; both are scoped to the surface's lifetime, so a
//! system always outlives the placements that reference it.

use crate::model::limits::{BTDF_RES_IN, BTDF_RES_OUT};
use crate::model::surface::Surface;
use crate::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An unrecognized or malformed token inside a CFS parameter signature.
#[derive(Debug, Clone, Error)]
#[error("invalid CFS parameter: {token}")]
pub struct DecodeError {
    pub token: String,
}

/// Decodes a CFS parameter signature string into a structured parameter set.
///
/// The real decoder belongs to the photometric engine; this trait is the
/// integration seam. Failure names the offending token and is fatal to the
/// load in progress.
pub trait CfsDecoder {
    fn decode(&self, signature: &str) -> Result<CfsParams, DecodeError>;
}

/// Structured parameters decoded from a signature string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CfsParams {
    pub system_type: String,
    /// Numeric configuration segments in signature order.
    pub values: Vec<f64>,
}

/// Decoder for caret-separated signatures, e.g. `BLINDS^0.08^0.025^45.0`.
///
/// The first segment names the system type; every following segment must be
/// numeric. Suitable for stand-alone use and tests; production loads supply
/// the engine's own [`CfsDecoder`].
#[derive(Debug, Clone, Default)]
pub struct CaretDecoder;

impl CfsDecoder for CaretDecoder {
    fn decode(&self, signature: &str) -> Result<CfsParams, DecodeError> {
        let mut segments = signature.split('^');
        let system_type = segments.next().unwrap_or("");
        let well_formed = !system_type.is_empty()
            && system_type
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !well_formed {
            return Err(DecodeError {
                token: signature.to_string(),
            });
        }
        let mut values = Vec::new();
        for seg in segments {
            let v: f64 = seg.parse().map_err(|_| DecodeError {
                token: seg.to_string(),
            })?;
            values.push(v);
        }
        Ok(CfsParams {
            system_type: system_type.to_string(),
            values,
        })
    }
}

/// A shared CFS system definition, identified by its parameter signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfsSystem {
    /// The signature this system was decoded from; the deduplication key.
    pub signature: String,
    pub params: CfsParams,
    /// Inbound photometric sampling resolution.
    pub res_in: usize,
    /// Outbound photometric sampling resolution.
    pub res_out: usize,
    /// Luminance samples, empty until populated by the calculation engine.
    pub luminance: Vec<f64>,
}

impl CfsSystem {
    pub fn new(signature: &str, params: CfsParams) -> Self {
        Self {
            signature: signature.to_string(),
            params,
            res_in: BTDF_RES_IN,
            res_out: BTDF_RES_OUT,
            luminance: Vec::new(),
        }
    }
}

/// One CFS record's placement on a surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfsPlacement {
    /// Index of the shared system definition in the parent surface's list.
    pub system: usize,
    /// Rotation angle of the system within the opening.
    pub rotation: f64,
    /// Converted vertex loop (inside face, CCW, lower-left start).
    pub vertices_inside: Vec<Point>,
    /// Mesh-grid-node-area hint captured from the zone at read time.
    pub max_grid_node_area: f64,
}

/// Finds or constructs the surface's system definition for a signature.
///
/// Scans the surface's existing definitions for an exact signature match and
/// reuses it; otherwise the decoder is invoked and a new definition appended.
/// Returns the index of the resolved system in `surface.cfs_systems`.
pub fn resolve_system(
    surface: &mut Surface,
    signature: &str,
    decoder: &dyn CfsDecoder,
) -> Result<usize, DecodeError> {
    if let Some(idx) = surface
        .cfs_systems
        .iter()
        .position(|s| s.signature == signature)
    {
        return Ok(idx);
    }
    let params = decoder.decode(signature)?;
    surface.cfs_systems.push(CfsSystem::new(signature, params));
    Ok(surface.cfs_systems.len() - 1)
}
