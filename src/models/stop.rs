//! Declarative camera schema and the resolved payload sent to the renderer.
//!
//! `CameraStop` is the partially-specified override shape accepted from the
//! host; `ResolvedStop` is the fully-specified instruction that crosses the
//! renderer boundary. Wire key names are camelCase and contractual.

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};

use crate::models::geometry::Coordinate;

/// Canonical four-side viewport inset. Once normalized, every side is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Padding {
            padding_top: value,
            padding_right: value,
            padding_bottom: value,
            padding_left: value,
        }
    }
}

/// Heterogeneous padding input: a scalar, a `[vertical, horizontal]` or
/// `[top, right, bottom, left]` sequence, or an explicit per-side object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingConfig {
    Uniform(f64),
    Sequence(Vec<f64>),
    Sides(Padding),
}

/// Bounds corners for an override stop, with optional per-side padding
/// attached directly to the bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraBounds {
    #[serde(default)]
    pub ne: Option<Coordinate>,
    #[serde(default)]
    pub sw: Option<Coordinate>,
    #[serde(default)]
    pub padding_top: Option<f64>,
    #[serde(default)]
    pub padding_right: Option<f64>,
    #[serde(default)]
    pub padding_bottom: Option<f64>,
    #[serde(default)]
    pub padding_left: Option<f64>,
}

/// Caller-facing animation intent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CameraAnimationMode {
    Flight,
    Ease,
    Linear,
    Move,
    None,
}

impl<'de> Deserialize<'de> for CameraAnimationMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(match token.as_str() {
            "flight" | "flyTo" => CameraAnimationMode::Flight,
            "ease" | "easeTo" => CameraAnimationMode::Ease,
            "linear" | "linearTo" => CameraAnimationMode::Linear,
            "move" | "moveTo" => CameraAnimationMode::Move,
            "none" => CameraAnimationMode::None,
            // Unknown tokens degrade to the safe default instead of failing.
            _ => CameraAnimationMode::Ease,
        })
    }
}

/// Animation-mode token understood by the renderer. `none` never crosses the
/// wire; explicit "no animation" degenerates to an instantaneous move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RendererMode {
    Flight,
    Ease,
    Linear,
    Move,
}

/// A single, potentially partial camera configuration target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraStop {
    #[serde(default)]
    pub center_coordinate: Option<Coordinate>,
    #[serde(default)]
    pub bounds: Option<CameraBounds>,
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default)]
    pub pitch: Option<f64>,
    #[serde(default)]
    pub zoom_level: Option<f64>,
    #[serde(default)]
    pub padding: Option<PaddingConfig>,
    #[serde(default)]
    pub animation_duration: Option<u64>,
    #[serde(default)]
    pub animation_mode: Option<CameraAnimationMode>,
}

/// A single stop or an ordered batch, discriminated by a `type` tag on the
/// wire. A bare object without the tag is inferred as a batch when it carries
/// a `stops` field, otherwise as a single stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CameraConfig {
    #[serde(rename = "CameraStop")]
    Stop(CameraStop),
    #[serde(rename = "CameraStops")]
    Stops { stops: Vec<CameraStop> },
}

impl<'de> Deserialize<'de> for CameraConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let batch = match value.get("type").and_then(serde_json::Value::as_str) {
            Some("CameraStops") => true,
            Some("CameraStop") => false,
            _ => value.get("stops").is_some(),
        };
        if batch {
            let stops = match value.get("stops") {
                Some(raw) => serde_json::from_value(raw.clone()).map_err(D::Error::custom)?,
                None => Vec::new(),
            };
            Ok(CameraConfig::Stops { stops })
        } else {
            let stop = serde_json::from_value(value).map_err(D::Error::custom)?;
            Ok(CameraConfig::Stop(stop))
        }
    }
}

/// Fully-resolved camera instruction. `centerCoordinate` and `bounds` hold
/// pre-encoded GeoJSON strings; when both are present the renderer prefers
/// the center coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_coordinate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<String>,
    pub heading: f64,
    pub pitch: f64,
    pub zoom: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
    pub duration: u64,
    pub mode: RendererMode,
}

impl ResolvedStop {
    /// Built-in fallback used when no caller default settings are supplied.
    pub fn fallback() -> Self {
        ResolvedStop {
            center_coordinate: None,
            bounds: None,
            heading: 0.0,
            pitch: 0.0,
            zoom: 11.0,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            duration: 2_000,
            mode: RendererMode::Ease,
        }
    }

    pub fn padding(&self) -> Padding {
        Padding {
            padding_top: self.padding_top,
            padding_right: self.padding_right,
            padding_bottom: self.padding_bottom,
            padding_left: self.padding_left,
        }
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding_top = padding.padding_top;
        self.padding_right = padding.padding_right;
        self.padding_bottom = padding.padding_bottom;
        self.padding_left = padding.padding_left;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_stop_serializes_with_camel_case_keys_and_mode_token() {
        let mut stop = ResolvedStop::fallback();
        stop.mode = RendererMode::Flight;
        stop.zoom = 14.0;

        let json = serde_json::to_string(&stop).expect("serialize stop");
        assert!(json.contains("\"paddingTop\":0.0"));
        assert!(json.contains("\"paddingLeft\":0.0"));
        assert!(json.contains("\"mode\":\"flight\""));
        assert!(json.contains("\"duration\":2000"));
        assert!(!json.contains("padding_top"));
    }

    #[test]
    fn resolved_stop_omits_unset_center_and_bounds() {
        let json = serde_json::to_string(&ResolvedStop::fallback()).expect("serialize stop");
        assert!(!json.contains("centerCoordinate"));
        assert!(!json.contains("bounds"));
    }

    #[test]
    fn camera_stop_accepts_partial_camel_case_input() {
        let stop: CameraStop = serde_json::from_str(
            r#"{"centerCoordinate":[10.0,20.0],"zoomLevel":14,"animationMode":"flyTo"}"#,
        )
        .expect("deserialize stop");

        assert_eq!(stop.center_coordinate, Some([10.0, 20.0]));
        assert_eq!(stop.zoom_level, Some(14.0));
        assert_eq!(stop.animation_mode, Some(CameraAnimationMode::Flight));
        assert!(stop.bounds.is_none());
        assert!(stop.padding.is_none());
    }

    #[test]
    fn unknown_animation_mode_token_degrades_to_ease() {
        let mode: CameraAnimationMode =
            serde_json::from_str("\"bounce\"").expect("deserialize mode");
        assert_eq!(mode, CameraAnimationMode::Ease);
    }

    #[test]
    fn explicit_type_tag_selects_the_variant() {
        let single: CameraConfig =
            serde_json::from_str(r#"{"type":"CameraStop","zoomLevel":3}"#).expect("single");
        let batch: CameraConfig =
            serde_json::from_str(r#"{"type":"CameraStops","stops":[{"zoomLevel":3}]}"#)
                .expect("batch");

        assert!(matches!(single, CameraConfig::Stop(_)));
        match batch {
            CameraConfig::Stops { stops } => assert_eq!(stops.len(), 1),
            CameraConfig::Stop(_) => panic!("expected batch"),
        }
    }

    #[test]
    fn bare_object_with_stops_field_infers_a_batch() {
        let config: CameraConfig =
            serde_json::from_str(r#"{"stops":[{"zoomLevel":1},{"zoomLevel":2}]}"#)
                .expect("deserialize config");
        match config {
            CameraConfig::Stops { stops } => {
                assert_eq!(stops.len(), 2);
                assert_eq!(stops[1].zoom_level, Some(2.0));
            }
            CameraConfig::Stop(_) => panic!("expected batch"),
        }
    }

    #[test]
    fn bare_object_without_stops_field_infers_a_single_stop() {
        let config: CameraConfig =
            serde_json::from_str(r#"{"heading":90.0}"#).expect("deserialize config");
        match config {
            CameraConfig::Stop(stop) => assert_eq!(stop.heading, Some(90.0)),
            CameraConfig::Stops { .. } => panic!("expected single stop"),
        }
    }

    #[test]
    fn padding_config_distinguishes_scalar_sequence_and_sides() {
        let uniform: PaddingConfig = serde_json::from_str("8.0").expect("scalar");
        let sequence: PaddingConfig = serde_json::from_str("[5.0,8.0]").expect("sequence");
        let sides: PaddingConfig =
            serde_json::from_str(r#"{"paddingTop":1.0,"paddingRight":2.0,"paddingBottom":3.0,"paddingLeft":4.0}"#)
                .expect("sides");

        assert_eq!(uniform, PaddingConfig::Uniform(8.0));
        assert_eq!(sequence, PaddingConfig::Sequence(vec![5.0, 8.0]));
        assert_eq!(
            sides,
            PaddingConfig::Sides(Padding {
                padding_top: 1.0,
                padding_right: 2.0,
                padding_bottom: 3.0,
                padding_left: 4.0,
            })
        );
    }
}
