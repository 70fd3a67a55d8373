use crate::models::geometry::{encode_bounds, encode_point};
use crate::models::stop::{CameraAnimationMode, CameraStop, Padding, RendererMode, ResolvedStop};
use crate::resolve::padding::normalize_padding;
use crate::CameraError;

/// Maps a caller animation intent to the renderer-level mode token.
/// Explicit "none" degenerates to an instantaneous move; an absent intent
/// falls back to the safe default.
pub fn renderer_mode(mode: Option<CameraAnimationMode>) -> RendererMode {
    match mode {
        Some(CameraAnimationMode::Flight) => RendererMode::Flight,
        Some(CameraAnimationMode::Linear) => RendererMode::Linear,
        Some(CameraAnimationMode::Move) | Some(CameraAnimationMode::None) => RendererMode::Move,
        Some(CameraAnimationMode::Ease) | None => RendererMode::Ease,
    }
}

/// Merges a partial override onto the resolved default stop.
///
/// Returns `Ok(None)` when follow mode owns the camera and the override is
/// not forced. Every field of the result is concrete: overridden when present
/// in `override_stop`, otherwise carried from `default_stop`. When the
/// override targets both a center and a box, both serialized fields are set
/// and the renderer prefers the center coordinate.
pub fn resolve_stop(
    default_stop: &ResolvedStop,
    override_stop: &CameraStop,
    follow_active: bool,
    ignore_follow: bool,
) -> Result<Option<ResolvedStop>, CameraError> {
    if follow_active && !ignore_follow {
        return Ok(None);
    }

    let mut resolved = default_stop.clone();

    if let Some(pitch) = override_stop.pitch {
        resolved.pitch = pitch;
    }
    if let Some(heading) = override_stop.heading {
        resolved.heading = heading;
    }
    if let Some(zoom) = override_stop.zoom_level {
        resolved.zoom = zoom;
    }
    if override_stop.animation_mode.is_some() {
        resolved.mode = renderer_mode(override_stop.animation_mode);
    }
    if let Some(duration) = override_stop.animation_duration {
        resolved.duration = duration;
    }

    if let Some(bounds) = &override_stop.bounds {
        if let (Some(ne), Some(sw)) = (bounds.ne, bounds.sw) {
            resolved.bounds = Some(encode_bounds(ne, sw)?);
        }
    }
    if let Some(center) = override_stop.center_coordinate {
        resolved.center_coordinate = Some(encode_point(center)?);
    }

    // Padding precedence: a standalone padding object wins wholesale over
    // bounds-attached sides; bounds-attached sides default to 0 per side.
    // With neither present the default stop's padding stands.
    if override_stop.padding.is_some() {
        resolved.set_padding(normalize_padding(override_stop.padding.as_ref()));
    } else if let Some(bounds) = &override_stop.bounds {
        resolved.set_padding(Padding {
            padding_top: bounds.padding_top.unwrap_or(0.0),
            padding_right: bounds.padding_right.unwrap_or(0.0),
            padding_bottom: bounds.padding_bottom.unwrap_or(0.0),
            padding_left: bounds.padding_left.unwrap_or(0.0),
        });
    }

    Ok(Some(resolved))
}
