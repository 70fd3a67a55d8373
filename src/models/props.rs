//! Host-facing camera configuration: construction props, follow-mode state
//! and the max-bounds constraint source.

use serde::{Deserialize, Serialize};

use crate::models::geometry::Coordinate;
use crate::models::stop::CameraStop;

/// Tracking mode reported by the renderer while following the user location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserTrackingMode {
    Normal,
    Compass,
    Course,
}

/// Pan/zoom constraint source; resolves to a serialized bounds payload only
/// when both corners are present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxBoundsSetting {
    #[serde(default)]
    pub ne: Option<Coordinate>,
    #[serde(default)]
    pub sw: Option<Coordinate>,
}

/// Live follow-mode state. While `active`, declarative and imperative stop
/// requests are suppressed unless explicitly forced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowState {
    pub active: bool,
    pub mode: Option<UserTrackingMode>,
    pub zoom_level: Option<f64>,
    pub pitch: Option<f64>,
    pub heading: Option<f64>,
}

/// Construction-time and update-time camera configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraProps {
    #[serde(default)]
    pub default_settings: Option<CameraStop>,
    #[serde(default)]
    pub follow_user_location: bool,
    #[serde(default)]
    pub follow_user_mode: Option<UserTrackingMode>,
    #[serde(default)]
    pub follow_zoom_level: Option<f64>,
    #[serde(default)]
    pub follow_pitch: Option<f64>,
    #[serde(default)]
    pub follow_heading: Option<f64>,
    #[serde(default)]
    pub max_bounds: Option<MaxBoundsSetting>,
    #[serde(default)]
    pub min_zoom_level: Option<f64>,
    #[serde(default)]
    pub max_zoom_level: Option<f64>,
}

impl CameraProps {
    pub fn follow_state(&self) -> FollowState {
        FollowState {
            active: self.follow_user_location,
            mode: self.follow_user_mode,
            zoom_level: self.follow_zoom_level,
            pitch: self.follow_pitch,
            heading: self.follow_heading,
        }
    }
}
