use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::GraphBuilder;
use crate::{Error, FloorId, WaypointId, model::Position, model::Waypoint, model::WaypointGraph};

/// One waypoint entry as it appears in the dataset file
#[derive(Debug, Clone, Deserialize)]
pub struct WaypointRecord {
    pub id: WaypointId,
    pub name: String,
    /// `[lon, lat, alt]`
    pub coords: Position,
    pub floor: FloorId,
    #[serde(default, alias = "isTransitOnly")]
    pub transit_only: bool,
    #[serde(default)]
    pub neighbors: Vec<WaypointId>,
}

/// Static waypoint dataset, deserialized from JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub waypoints: Vec<WaypointRecord>,
}

impl Dataset {
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open dataset '{}': {}", path.display(), e),
            )
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds the symmetrized navigation graph from the records
    pub fn into_graph(self) -> Result<WaypointGraph, Error> {
        let mut builder = GraphBuilder::new();
        for record in self.waypoints {
            let waypoint = Waypoint::new(
                record.id,
                record.name,
                record.coords,
                record.floor,
                record.transit_only,
            );
            builder.waypoint(waypoint, record.neighbors);
        }
        builder.build()
    }
}

/// Loads a dataset file and builds the waypoint graph
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// records do not form a valid graph
pub fn load_graph(path: impl AsRef<Path>) -> Result<WaypointGraph, Error> {
    let path = path.as_ref();
    info!("Loading waypoint dataset: {}", path.display());

    let graph = Dataset::from_path(path)?.into_graph()?;

    info!(
        "Loaded {} waypoints and {} edges on {} floors",
        graph.len(),
        graph.edge_count(),
        graph.floors().len()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS: &str = r#"{
        "waypoints": [
            { "id": 1, "name": "校門口", "coords": [121.586012, 24.986974, 3.80], "floor": 1, "neighbors": [2] },
            { "id": 2, "name": "Lobby", "coords": [121.5853, 24.9876, 1.5], "floor": 1, "neighbors": [1, 3] },
            { "id": 3, "name": "Stair", "coords": [121.5855, 24.9875, 1.5], "floor": 1, "isTransitOnly": true },
            { "id": 4, "name": "Stair", "coords": [121.5855, 24.9875, 5.5], "floor": 2, "transit_only": true, "neighbors": [3] }
        ]
    }"#;

    #[test]
    fn parses_records_and_builds_graph() {
        let dataset = Dataset::from_json(CAMPUS).unwrap();
        assert_eq!(dataset.waypoints.len(), 4);
        assert!(dataset.waypoints[2].transit_only);
        assert!(!dataset.waypoints[0].transit_only);
        assert!(dataset.waypoints[2].neighbors.is_empty());

        let graph = dataset.into_graph().unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get(1).map(|w| w.name.as_str()), Some("校門口"));
        let stair: Vec<_> = graph.neighbors(3).unwrap().iter().map(|w| w.id).collect();
        assert_eq!(stair, vec![2, 4]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Dataset::from_json(r#"{ "waypoints": [ { "id": 1 } ] }"#).unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_graph("/nonexistent/waypoints.json").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
