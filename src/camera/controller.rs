//! Imperative camera control surface.
//!
//! The controller holds the resolved default stop, the live follow state and
//! the memoized max-bounds constraint, and exposes the five public operations.
//! Each operation builds a partial override stop, resolves it against the
//! default stop, and hands the result to the rendering-engine boundary.

use crate::camera::bridge::MapBridge;
use crate::models::props::{CameraProps, FollowState, UserTrackingMode};
use crate::models::stop::{
    CameraAnimationMode, CameraBounds, CameraConfig, CameraStop, PaddingConfig, ResolvedStop,
};
use crate::resolve::max_bounds::MaxBoundsCache;
use crate::resolve::padding::normalize_padding;
use crate::resolve::stop::resolve_stop;
use crate::CameraError;

const DEFAULT_FLY_DURATION_MS: u64 = 2_000;
const DEFAULT_ZOOM_DURATION_MS: u64 = 2_000;

pub type TrackingModeCallback = Box<dyn FnMut(Option<UserTrackingMode>)>;

pub struct Camera<B: MapBridge> {
    bridge: B,
    props: CameraProps,
    default_stop: ResolvedStop,
    follow: FollowState,
    max_bounds: MaxBoundsCache,
    zoom_limits: (Option<f64>, Option<f64>),
    on_tracking_mode_change: Option<TrackingModeCallback>,
}

impl<B: MapBridge> Camera<B> {
    pub fn new(bridge: B, props: CameraProps) -> Result<Self, CameraError> {
        let mut camera = Camera {
            bridge,
            default_stop: resolve_default(props.default_settings.as_ref())?,
            follow: props.follow_state(),
            props,
            max_bounds: MaxBoundsCache::default(),
            zoom_limits: (None, None),
            on_tracking_mode_change: None,
        };
        camera.push_max_bounds()?;
        camera.push_zoom_limits()?;
        Ok(camera)
    }

    /// Applies a new set of props. The default stop is recomputed only when
    /// `defaultSettings` changed; max bounds and zoom limits are re-dispatched
    /// only when their sources changed.
    pub fn set_props(&mut self, props: CameraProps) -> Result<(), CameraError> {
        if props.default_settings != self.props.default_settings {
            self.default_stop = resolve_default(props.default_settings.as_ref())?;
            log::info!("set_props: default stop recomputed");
        }
        self.follow = props.follow_state();
        self.props = props;
        self.push_max_bounds()?;
        self.push_zoom_limits()
    }

    /// Resolves and dispatches a single stop or an ordered batch. Batch
    /// elements are resolved independently and delivered strictly in order;
    /// a suppressed element produces no dispatch for that element.
    pub fn set_camera(&mut self, config: CameraConfig) -> Result<(), CameraError> {
        match config {
            CameraConfig::Stop(stop) => self.dispatch_stop(&stop),
            CameraConfig::Stops { stops } => {
                log::debug!("set_camera: batch of {} stops", stops.len());
                for stop in &stops {
                    self.dispatch_stop(stop)?;
                }
                Ok(())
            }
        }
    }

    /// Frames the given corners with the given padding; instantaneous unless
    /// a duration is supplied, always eased.
    pub fn fit_bounds(
        &mut self,
        ne: [f64; 2],
        sw: [f64; 2],
        padding: Option<PaddingConfig>,
        duration_ms: Option<u64>,
    ) -> Result<(), CameraError> {
        let stop = CameraStop {
            bounds: Some(CameraBounds {
                ne: Some(ne),
                sw: Some(sw),
                ..CameraBounds::default()
            }),
            padding: Some(PaddingConfig::Sides(normalize_padding(padding.as_ref()))),
            animation_duration: Some(duration_ms.unwrap_or(0)),
            animation_mode: Some(CameraAnimationMode::Ease),
            ..CameraStop::default()
        };
        self.set_camera(CameraConfig::Stop(stop))
    }

    /// Animates to a center coordinate. The mode is left unset so the merge
    /// falls back to the default stop's mode, unlike `zoom_to`.
    pub fn fly_to(
        &mut self,
        center: [f64; 2],
        duration_ms: Option<u64>,
    ) -> Result<(), CameraError> {
        let stop = CameraStop {
            center_coordinate: Some(center),
            animation_duration: Some(duration_ms.unwrap_or(DEFAULT_FLY_DURATION_MS)),
            ..CameraStop::default()
        };
        self.set_camera(CameraConfig::Stop(stop))
    }

    /// Moves to a center coordinate, eased, instantaneous by default.
    pub fn move_to(
        &mut self,
        center: [f64; 2],
        duration_ms: Option<u64>,
    ) -> Result<(), CameraError> {
        let stop = CameraStop {
            center_coordinate: Some(center),
            animation_duration: Some(duration_ms.unwrap_or(0)),
            animation_mode: Some(CameraAnimationMode::Ease),
            ..CameraStop::default()
        };
        self.set_camera(CameraConfig::Stop(stop))
    }

    /// Changes the zoom level along the fast curved path.
    pub fn zoom_to(&mut self, zoom: f64, duration_ms: Option<u64>) -> Result<(), CameraError> {
        let stop = CameraStop {
            zoom_level: Some(zoom),
            animation_duration: Some(duration_ms.unwrap_or(DEFAULT_ZOOM_DURATION_MS)),
            animation_mode: Some(CameraAnimationMode::Flight),
            ..CameraStop::default()
        };
        self.set_camera(CameraConfig::Stop(stop))
    }

    /// Handles a tracking-mode change reported by the boundary. `None` means
    /// the renderer stopped following the user location.
    pub fn handle_tracking_mode_change(&mut self, mode: Option<UserTrackingMode>) {
        log::info!("tracking mode change: {mode:?}");
        self.follow.active = mode.is_some();
        self.follow.mode = mode;
        if let Some(callback) = self.on_tracking_mode_change.as_mut() {
            callback(mode);
        }
    }

    pub fn set_tracking_mode_callback(&mut self, callback: TrackingModeCallback) {
        self.on_tracking_mode_change = Some(callback);
    }

    pub fn default_stop(&self) -> &ResolvedStop {
        &self.default_stop
    }

    pub fn follow_state(&self) -> FollowState {
        self.follow
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    fn dispatch_stop(&mut self, stop: &CameraStop) -> Result<(), CameraError> {
        match resolve_stop(&self.default_stop, stop, self.follow.active, false)? {
            Some(resolved) => {
                log::debug!(
                    "set_camera: mode={:?} zoom={} duration={}",
                    resolved.mode,
                    resolved.zoom,
                    resolved.duration
                );
                self.bridge.set_camera_stop(&resolved)
            }
            None => {
                log::debug!("set_camera: suppressed by follow mode");
                Ok(())
            }
        }
    }

    fn push_max_bounds(&mut self) -> Result<(), CameraError> {
        if self.max_bounds.update(self.props.max_bounds.as_ref())? {
            log::debug!("set_max_bounds: {:?}", self.max_bounds.payload());
            self.bridge.set_max_bounds(self.max_bounds.payload())?;
        }
        Ok(())
    }

    fn push_zoom_limits(&mut self) -> Result<(), CameraError> {
        let limits = (self.props.min_zoom_level, self.props.max_zoom_level);
        if limits != self.zoom_limits {
            self.bridge.set_zoom_limits(limits.0, limits.1)?;
            self.zoom_limits = limits;
        }
        Ok(())
    }
}

/// Resolves the default stop from caller settings over the built-in
/// fallbacks. Follow mode never suppresses this resolution.
fn resolve_default(settings: Option<&CameraStop>) -> Result<ResolvedStop, CameraError> {
    match settings {
        Some(settings) => {
            let resolved = resolve_stop(&ResolvedStop::fallback(), settings, false, true)?;
            // ignore_follow=true never suppresses, so the value is always present.
            Ok(resolved.unwrap_or_else(ResolvedStop::fallback))
        }
        None => Ok(ResolvedStop::fallback()),
    }
}
