//! Camera-configuration resolution for a map-rendering component.
//!
//! Translates partially-specified camera descriptions into fully-resolved,
//! serializable instructions for an injected rendering-engine boundary. The
//! layer is permissive: malformed padding or config shapes degrade to
//! defaults instead of failing, and the only error paths are payload encoding
//! and rejections reported by the boundary itself.

pub mod camera;
pub mod models;
pub mod resolve;

pub use camera::bridge::MapBridge;
pub use camera::controller::Camera;
pub use models::props::{CameraProps, FollowState, MaxBoundsSetting, UserTrackingMode};
pub use models::stop::{
    CameraAnimationMode, CameraConfig, CameraStop, Padding, PaddingConfig, RendererMode,
    ResolvedStop,
};

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("failed to encode camera payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("map bridge rejected instruction: {0}")]
    Bridge(String),
}
