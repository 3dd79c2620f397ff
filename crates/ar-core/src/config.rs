//! Content configuration: which assets make up the placed content and how
//! they are arranged. Identifiers are data, not literals in the placement
//! logic, so tests can substitute them freely.

use glam::Vec3;

use crate::constants::{caption_offset_vec3, PLACED_CONTENT_SCALE};

/// How the placement animation is started on the character node.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub name: String,
    /// How many times the animation plays; it does not loop.
    pub repeat_count: u32,
    pub fade_in_secs: f32,
    pub fade_out_secs: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            name: "Dancing".into(),
            repeat_count: 1,
            fade_in_secs: 1.0,
            fade_out_secs: 0.5,
        }
    }
}

/// Asset identifiers and layout for the composed placement content.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentConfig {
    /// Animated character model, the root of the placed content.
    pub character_model: String,
    /// Caption model attached as a child of the character.
    pub caption_model: String,
    /// Caption position relative to the character.
    pub caption_offset: Vec3,
    pub animation: AnimationConfig,
    /// Ambient particle effect emitted over the placement point.
    pub particle_effect: String,
    /// Looping audio clip attached to the character.
    pub audio_clip: String,
    /// Uniform scale applied to the authored content.
    pub scale: f32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            character_model: "art.scnassets/christmas.dae".into(),
            caption_model: "art.scnassets/merryChristmas.dae".into(),
            caption_offset: caption_offset_vec3(),
            animation: AnimationConfig::default(),
            particle_effect: "rainingSnow.scnp".into(),
            audio_clip: "jingle.mp3".into(),
            scale: PLACED_CONTENT_SCALE,
        }
    }
}
