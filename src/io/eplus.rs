//! Hierarchical builder for the building-description stream.
//!
//! The stream is consumed in a single pass in the exact nesting order fixed
//! by the schema: site block, zones, per-zone lighting schedules, surfaces
//! with their windows and CFS records, reference points, and finally
//! building-level shades. Capacity limits are enforced immediately after each
//! count field; a violation or a CFS decode failure aborts the whole load and
//! no partial model is returned.

use super::record::RecordReader;
use super::{check_capacity, LoadError};
use crate::geom::winding::to_inside_lower_left;
use crate::mesh::MeshInit;
use crate::model::building::{Building, BuildingShade, Site};
use crate::model::cfs::{resolve_system, CfsDecoder, CfsPlacement};
use crate::model::limits::{
    HOURS, MAX_BLDG_SHADES, MAX_LIGHT_SCHEDULES, MAX_REF_POINTS, MAX_SURFACE_CFS,
    MAX_SURFACE_WINDOWS, MAX_ZONES, MAX_ZONE_SURFACES, MONTHS, ZSHADE_SLOTS,
};
use crate::model::refpoint::{ReferencePoint, WindowLum};
use crate::model::schedule::LightingSchedule;
use crate::model::surface::Surface;
use crate::model::window::Window;
use crate::model::zone::Zone;
use crate::Point;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Loads a building description from a reader.
///
/// `decoder` resolves CFS parameter signatures, `mesher` is invoked for each
/// window and surface once its geometry is complete, and `diag` receives one
/// free-text `ERROR:` line before any fatal return.
pub fn read_building<R: BufRead>(
    input: R,
    decoder: &dyn CfsDecoder,
    mesher: &dyn MeshInit,
    diag: &mut dyn Write,
) -> Result<Building, LoadError> {
    let mut r = RecordReader::new(input);

    // Two heading lines open the description
    r.skip_headings()?;

    let name = r.str_field()?;
    let site = Site {
        latitude: r.real_field()?,
        longitude: r.real_field()?,
        altitude: r.real_field()?,
        azimuth: r.real_field()?,
        timezone: r.real_field()?,
    };
    let atm_moisture = r.real_array::<MONTHS>()?;
    let atm_turbidity = r.real_array::<MONTHS>()?;

    let mut building = Building {
        name,
        site,
        atm_moisture,
        atm_turbidity,
        zones: Vec::new(),
        shades: Vec::new(),
    };

    r.skip_headings()?;
    let nzones = r.count_field()?;
    check_capacity("ZONES", nzones, MAX_ZONES, diag)?;
    for _ in 0..nzones {
        building.zones.push(read_zone(&mut r, decoder, mesher, diag)?);
    }

    r.skip_headings()?;
    let nshades = r.count_field()?;
    check_capacity("BUILDING SHADES", nshades, MAX_BLDG_SHADES, diag)?;
    for _ in 0..nshades {
        building.shades.push(read_shade(&mut r)?);
    }

    Ok(building)
}

/// Opens and loads a building-description file.
pub fn read_building_file(
    path: &Path,
    decoder: &dyn CfsDecoder,
    mesher: &dyn MeshInit,
    diag: &mut dyn Write,
) -> Result<Building> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open building description: {}", path.display()))?;
    read_building(BufReader::new(file), decoder, mesher, diag)
        .with_context(|| format!("Failed to load building description: {}", path.display()))
}

fn read_zone(
    r: &mut RecordReader<impl BufRead>,
    decoder: &dyn CfsDecoder,
    mesher: &dyn MeshInit,
    diag: &mut dyn Write,
) -> Result<Zone, LoadError> {
    r.skip_headings()?;
    let mut zone = Zone {
        name: r.str_field()?,
        origin: r.point_field()?,
        azimuth: r.real_field()?,
        multiplier: r.real_field()?,
        floor_area: r.real_field()?,
        volume: r.real_field()?,
        lighting_power: r.real_field()?,
        min_power_frac: r.real_field()?,
        min_light_frac: r.real_field()?,
        control_steps: r.int_field()?,
        control_prob: r.real_field()?,
        view_azimuth: r.real_field()?,
        max_grid_node_area: r.real_field()?,
        schedules: Vec::new(),
        surfaces: Vec::new(),
        ref_points: Vec::new(),
    };

    r.skip_headings()?;
    let nsched = r.count_field()?;
    check_capacity("LIGHTING SCHEDULES", nsched, MAX_LIGHT_SCHEDULES, diag)?;
    for _ in 0..nsched {
        zone.schedules.push(read_schedule(r)?);
    }

    r.skip_headings()?;
    let nsurfs = r.count_field()?;
    check_capacity("ZONE SURFACES", nsurfs, MAX_ZONE_SURFACES, diag)?;
    for _ in 0..nsurfs {
        let surface = read_surface(
            r,
            zone.azimuth,
            &mut zone.max_grid_node_area,
            decoder,
            mesher,
            diag,
        )?;
        zone.surfaces.push(surface);
    }

    // Surfaces and windows are complete, so slot allocation below is final
    r.skip_headings()?;
    let nrefpts = r.count_field()?;
    check_capacity("ZONE REFERENCE POINTS", nrefpts, MAX_REF_POINTS, diag)?;
    for _ in 0..nrefpts {
        zone.ref_points.push(read_ref_point(r, &zone.surfaces)?);
    }

    Ok(zone)
}

fn read_schedule(r: &mut RecordReader<impl BufRead>) -> Result<LightingSchedule, LoadError> {
    r.skip_headings()?;
    Ok(LightingSchedule {
        name: r.str_field()?,
        month_begin: r.int_field()?,
        day_begin: r.int_field()?,
        month_end: r.int_field()?,
        day_end: r.int_field()?,
        dow_begin: r.int_field()?,
        dow_end: r.int_field()?,
        hourly: r.real_array::<HOURS>()?,
    })
}

fn read_surface(
    r: &mut RecordReader<impl BufRead>,
    zone_azimuth: f64,
    max_grid_node_area: &mut f64,
    decoder: &dyn CfsDecoder,
    mesher: &dyn MeshInit,
    diag: &mut dyn Write,
) -> Result<Surface, LoadError> {
    r.skip_headings()?;
    let name = r.str_field()?;
    let azimuth_bldg = r.real_field()?;
    let tilt_bldg = r.real_field()?;
    let mut surface = Surface {
        name,
        azimuth_bldg,
        azimuth_zone: azimuth_bldg - zone_azimuth,
        tilt_bldg,
        tilt_zone: tilt_bldg,
        vis_refl: r.real_field()?,
        ext_vis_refl: r.real_field()?,
        gnd_refl: r.real_field()?,
        vertices: Vec::new(),
        vertices_inside: Vec::new(),
        windows: Vec::new(),
        cfs_systems: Vec::new(),
        cfs_placements: Vec::new(),
    };
    surface.vertices = read_vertex_loop(r)?;
    surface.vertices_inside = to_inside_lower_left(&surface.vertices);

    r.skip_headings()?;
    let nwindows = r.count_field()?;
    check_capacity("SURFACE WINDOWS", nwindows, MAX_SURFACE_WINDOWS, diag)?;
    for _ in 0..nwindows {
        let window = read_window(r)?;
        *max_grid_node_area = mesher.init_window(&window, *max_grid_node_area);
        surface.windows.push(window);
    }

    r.skip_headings()?;
    let ncfs = r.count_field()?;
    check_capacity("SURFACE CFS", ncfs, MAX_SURFACE_CFS, diag)?;
    for _ in 0..ncfs {
        r.skip_headings()?;
        // The record's name token is informational only
        r.str_field()?;
        let signature = r.str_field()?;
        let rotation = r.real_field()?;
        let vertices_inside = to_inside_lower_left(&read_vertex_loop(r)?);
        let system = match resolve_system(&mut surface, &signature, decoder) {
            Ok(idx) => idx,
            Err(e) => {
                let _ = writeln!(diag, "ERROR: invalid CFS parameter - {}", e.token);
                return Err(e.into());
            }
        };
        surface.cfs_placements.push(CfsPlacement {
            system,
            rotation,
            vertices_inside,
            max_grid_node_area: *max_grid_node_area,
        });
    }

    *max_grid_node_area = mesher.init_surface(&surface, *max_grid_node_area);
    Ok(surface)
}

fn read_window(r: &mut RecordReader<impl BufRead>) -> Result<Window, LoadError> {
    r.skip_headings()?;
    let name = r.str_field()?;
    let glass_type = r.str_field()?;
    let shade_flag = r.int_field()?;
    let shade_type = if shade_flag != 0 {
        Some(r.str_field()?)
    } else {
        None
    };
    let zshade_depth = r.real_array::<ZSHADE_SLOTS>()?;
    let zshade_dist = r.real_array::<ZSHADE_SLOTS>()?;
    let vertices = read_vertex_loop(r)?;
    let vertices_inside = to_inside_lower_left(&vertices);
    Ok(Window {
        name,
        glass_type,
        shade_flag,
        shade_type,
        zshade_depth,
        zshade_dist,
        vertices,
        vertices_inside,
    })
}

fn read_ref_point(
    r: &mut RecordReader<impl BufRead>,
    surfaces: &[Surface],
) -> Result<ReferencePoint, LoadError> {
    r.skip_headings()?;
    let name = r.str_field()?;
    // Source coordinates are world-referenced, so both systems coincide
    let zone_coords = r.point_field()?;
    let window_lum = surfaces
        .iter()
        .map(|s| vec![WindowLum::default(); s.windows.len()])
        .collect();
    Ok(ReferencePoint {
        name,
        zone_coords,
        bldg_coords: zone_coords,
        zone_fraction: r.real_field()?,
        light_setpoint: r.real_field()?,
        control_type: r.int_field()?,
        window_lum,
    })
}

fn read_shade(r: &mut RecordReader<impl BufRead>) -> Result<BuildingShade, LoadError> {
    r.skip_headings()?;
    Ok(BuildingShade {
        name: r.str_field()?,
        origin: r.point_field()?,
        height: r.real_field()?,
        width: r.real_field()?,
        azimuth: r.real_field()?,
        tilt: r.real_field()?,
        vis_refl: r.real_field()?,
        gnd_refl: r.real_field()?,
    })
}

fn read_vertex_loop(r: &mut RecordReader<impl BufRead>) -> Result<Vec<Point>, LoadError> {
    let n = r.count_field()?;
    // Vertex counts carry no format maximum; an absurd count must run into
    // the stream's actual content, not into an up-front allocation
    let mut pts = Vec::with_capacity(n.min(64));
    for _ in 0..n {
        pts.push(r.point_field()?);
    }
    Ok(pts)
}
