//! GeoJSON payload shapes for coordinates crossing the renderer boundary.
//!
//! A center coordinate is sent as the JSON string of a point feature; a
//! bounds pair is sent as the JSON string of a feature collection holding the
//! northeast corner first and the southwest corner second. Key names and
//! ordering are part of the renderer contract.

use serde::{Deserialize, Serialize};

/// A coordinate in GeoJSON axis order: `[longitude, latitude]`.
pub type Coordinate = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

/// Canonical point transform: wraps a coordinate in a GeoJSON point feature.
pub fn point_feature(coordinate: Coordinate) -> Feature {
    Feature {
        feature_type: "Feature".to_string(),
        geometry: PointGeometry {
            geometry_type: "Point".to_string(),
            coordinates: coordinate,
        },
        properties: serde_json::Value::Object(serde_json::Map::new()),
    }
}

/// Canonical bounding box: a feature collection of the two corners, NE then SW.
pub fn bounds_collection(ne: Coordinate, sw: Coordinate) -> FeatureCollection {
    FeatureCollection {
        collection_type: "FeatureCollection".to_string(),
        features: vec![point_feature(ne), point_feature(sw)],
    }
}

pub fn encode_point(coordinate: Coordinate) -> Result<String, serde_json::Error> {
    serde_json::to_string(&point_feature(coordinate))
}

pub fn encode_bounds(ne: Coordinate, sw: Coordinate) -> Result<String, serde_json::Error> {
    serde_json::to_string(&bounds_collection(ne, sw))
}
