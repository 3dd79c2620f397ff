//! Outbound boundary to the host 3D/AR engine.
//!
//! Everything here is fire-and-forget from the session's perspective: the
//! session never awaits an animation or playback. The only feedback channel
//! is asset loading, which surfaces as a `HostError` so the caller can decide
//! whether to abort the placement.

use glam::Vec3;
use thiserror::Error;

use ar_core::{AnimationConfig, Correction, NodeId};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("asset not found: {name}")]
    MissingAsset { name: String },
    #[error("audio clip failed to load: {name}")]
    AudioUnavailable { name: String },
}

/// The rendering/audio engine as the session sees it.
///
/// A real implementation forwards these to a scene graph; the native demo
/// and the tests use recording stand-ins.
pub trait SceneHost: Send {
    /// Instantiate a named model, place it at a world position with a uniform
    /// scale, and attach it to the scene.
    fn attach_model(&mut self, asset: &str, position: Vec3, scale: f32)
        -> Result<NodeId, HostError>;

    /// Instantiate a named model as a child of an existing node, offset in
    /// the parent's frame.
    fn attach_child_model(
        &mut self,
        parent: NodeId,
        asset: &str,
        offset: Vec3,
    ) -> Result<NodeId, HostError>;

    /// Start a named animation on a node.
    fn play_animation(&mut self, node: NodeId, animation: &AnimationConfig)
        -> Result<(), HostError>;

    /// Attach a particle emitter at a world position, pitched about its local
    /// X axis.
    fn attach_particles(
        &mut self,
        asset: &str,
        position: Vec3,
        pitch_radians: f32,
    ) -> Result<NodeId, HostError>;

    /// Attach a looping audio clip to a node and start playback.
    fn play_audio_looping(&mut self, node: NodeId, clip: &str) -> Result<(), HostError>;

    /// Ease a node's world-space height to `correction.target_y` over
    /// `correction.duration_secs`. Not awaited.
    fn animate_height(&mut self, node: NodeId, correction: Correction);
}
