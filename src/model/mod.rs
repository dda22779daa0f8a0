//! In-memory hierarchical building model.
//!
//! Ownership is strictly tree-shaped: every entity is owned by its parent's
//! sequence, in the order the description stream emitted it. The one
//! exception is CFS placements, which reference a shared system definition
//! held by their parent surface (by index, see [`cfs`]).

pub mod building;
pub mod cfs;
pub mod library;
pub mod limits;
pub mod refpoint;
pub mod schedule;
pub mod surface;
pub mod window;
pub mod zone;
