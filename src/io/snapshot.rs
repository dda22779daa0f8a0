//! JSON snapshot I/O.
//!
//! A snapshot is the JSON serialization of a loaded [`Building`]. It preserves
//! the full hierarchy, including derived fields such as the converted vertex
//! loops and resolved CFS placements, so a model can be inspected or reloaded
//! without re-running the description parser.

use crate::Building;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes a building snapshot to a JSON file.
pub fn write_snapshot(path: &Path, building: &Building) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, building)
        .with_context(|| format!("Failed to serialize building to: {}", path.display()))?;

    Ok(())
}

/// Reads a building snapshot from a JSON file.
pub fn read_snapshot(path: &Path) -> Result<Building> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let building: Building = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize building from: {}", path.display()))?;

    Ok(building)
}

/// Serializes a building snapshot to a JSON string.
pub fn to_snapshot_string(building: &Building) -> Result<String> {
    serde_json::to_string_pretty(building).context("Failed to serialize building to string")
}

/// Deserializes a building snapshot from a JSON string.
pub fn from_snapshot_string(json: &str) -> Result<Building> {
    serde_json::from_str(json).context("Failed to deserialize building from string")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::building::Site;
    use crate::model::zone::Zone;
    use crate::Point;
    use tempfile::tempdir;

    fn sample_building() -> Building {
        Building {
            name: "snapshot_test".to_string(),
            site: Site {
                latitude: 37.6,
                longitude: -122.4,
                altitude: 10.0,
                azimuth: 0.0,
                timezone: -8.0,
            },
            atm_moisture: [0.5; 12],
            atm_turbidity: [0.12; 12],
            zones: vec![Zone {
                name: "zone_1".to_string(),
                origin: Point::new(1.0, 2.0, 0.0),
                azimuth: 15.0,
                multiplier: 1.0,
                floor_area: 25.0,
                volume: 75.0,
                lighting_power: 400.0,
                min_power_frac: 0.3,
                min_light_frac: 0.2,
                control_steps: 3,
                control_prob: 1.0,
                view_azimuth: 180.0,
                max_grid_node_area: 0.25,
                schedules: Vec::new(),
                surfaces: Vec::new(),
                ref_points: Vec::new(),
            }],
            shades: Vec::new(),
        }
    }

    #[test]
    fn test_write_and_read_snapshot() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("model.json");

        let original = sample_building();
        write_snapshot(&path, &original)?;
        let loaded = read_snapshot(&path)?;

        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.site.latitude, original.site.latitude);
        assert_eq!(loaded.zones.len(), 1);
        let zone = loaded.get_zone("zone_1").unwrap();
        assert!(zone.origin.is_close(&Point::new(1.0, 2.0, 0.0)));
        assert_eq!(zone.control_steps, 3);

        Ok(())
    }

    #[test]
    fn test_snapshot_string_roundtrip() -> Result<()> {
        let original = sample_building();
        let json = to_snapshot_string(&original)?;

        assert!(json.contains("\"name\":"));
        assert!(json.contains("\"snapshot_test\""));

        let loaded = from_snapshot_string(&json)?;
        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.atm_turbidity, original.atm_turbidity);

        Ok(())
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_snapshot(Path::new("/nonexistent/path/model.json"));
        assert!(result.is_err());
    }
}
