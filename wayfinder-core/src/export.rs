//! `GeoJSON` export of routes and of the waypoint layer

use geo::{Coord, LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{Error, model::Waypoint, model::WaypointGraph, routing::Route};

impl Route {
    /// Converts the route to a `GeoJSON` `FeatureCollection`: one line
    /// feature for the whole route followed by one point per waypoint.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.len() + 1);

        if let (Some(first), Some(last)) = (self.first(), self.last()) {
            let coords: Vec<Coord<f64>> = self
                .waypoints()
                .iter()
                .map(|waypoint| waypoint.position.into())
                .collect();
            let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "kind": "route",
                    "from_name": first.name,
                    "to_name": last.name,
                    "waypoints": self.len(),
                    "length_m": self.length_meters(),
                }
            });
            features.push(
                Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?,
            );
        }

        for (idx, waypoint) in self.waypoints().iter().enumerate() {
            features.push(waypoint_feature(waypoint, Some(idx))?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

impl WaypointGraph {
    /// Point layer with one feature per waypoint, titled with its name
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let features = self
            .waypoints()
            .map(|waypoint| waypoint_feature(waypoint, None))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn waypoint_feature(waypoint: &Waypoint, route_index: Option<usize>) -> Result<Feature, Error> {
    let point: Point<f64> = waypoint.point();
    let geometry = Geometry::new(GeoJsonValue::from(&point));

    let mut value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "waypoint",
            "id": waypoint.id,
            "title": waypoint.name,
            "floor": waypoint.floor,
            "altitude": waypoint.position.alt,
            "transit_only": waypoint.transit_only,
        }
    });
    if let Some(idx) = route_index {
        value["properties"]["route_index"] = json!(idx);
    }

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
