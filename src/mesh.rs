//! Meshing-collaborator seam.
//!
//! Window and surface meshing is performed outside this crate. During loading
//! each window is handed to the collaborator once its geometry is complete,
//! and each surface once all of its windows and CFS placements exist. The
//! collaborator receives the zone's current maximum grid-node area and
//! returns the area actually used, which the builder stores back into the
//! zone; a polygon that needs more nodes than fit the static limits comes
//! back with a raised area.

use crate::geom::polygon_area;
use crate::model::limits::MAX_GRID_NODES;
use crate::{Surface, Window};

pub trait MeshInit {
    /// Meshes a window; returns the grid-node area actually used.
    fn init_window(&self, window: &Window, max_grid_node_area: f64) -> f64;

    /// Meshes a surface, excluding window and CFS cutouts; returns the
    /// grid-node area actually used.
    fn init_surface(&self, surface: &Surface, max_grid_node_area: f64) -> f64;
}

/// Mesh collaborator that only enforces the grid-node budget.
///
/// When a polygon would need more than [`MAX_GRID_NODES`] cells at the
/// requested node area, the area is raised so the polygon fits the budget
/// exactly; otherwise the requested area is kept.
#[derive(Debug, Clone, Default)]
pub struct GridMesher;

impl GridMesher {
    fn fit_budget(area: f64, max_grid_node_area: f64) -> f64 {
        if max_grid_node_area <= 0.0 || area <= 0.0 {
            return max_grid_node_area;
        }
        let nodes = (area / max_grid_node_area).ceil() as usize;
        if nodes > MAX_GRID_NODES {
            area / MAX_GRID_NODES as f64
        } else {
            max_grid_node_area
        }
    }
}

impl MeshInit for GridMesher {
    fn init_window(&self, window: &Window, max_grid_node_area: f64) -> f64 {
        Self::fit_budget(polygon_area(&window.vertices_inside), max_grid_node_area)
    }

    fn init_surface(&self, surface: &Surface, max_grid_node_area: f64) -> f64 {
        let openings: f64 = surface
            .windows
            .iter()
            .map(|w| polygon_area(&w.vertices_inside))
            .sum::<f64>()
            + surface
                .cfs_placements
                .iter()
                .map(|c| polygon_area(&c.vertices_inside))
                .sum::<f64>();
        let area = (polygon_area(&surface.vertices_inside) - openings).max(0.0);
        Self::fit_budget(area, max_grid_node_area)
    }
}
