//! Rendering-engine boundary.
//!
//! The native map engine is injected as a capability so the resolution core
//! is testable without any renderer present. Instructions are fire-and-forget:
//! the boundary owns superseding or interrupting in-flight animations, and any
//! failure it reports propagates to the caller untransformed.

use crate::models::stop::ResolvedStop;
use crate::CameraError;

pub trait MapBridge {
    /// Delivers one fully-resolved camera instruction.
    fn set_camera_stop(&mut self, stop: &ResolvedStop) -> Result<(), CameraError>;

    /// Delivers the pan/zoom constraint, or clears it with `None`.
    fn set_max_bounds(&mut self, bounds: Option<&str>) -> Result<(), CameraError>;

    /// Delivers the zoom-level limits, either side optional.
    fn set_zoom_limits(&mut self, min: Option<f64>, max: Option<f64>) -> Result<(), CameraError>;
}
