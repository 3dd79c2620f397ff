use glam::Vec3;

// Tuning constants shared by the session layer and the native demo.

// Horizontal containment
pub const EXTENT_TOLERANCE: f32 = 0.1; // fractional widening of the plane's half-extent per side

// Vertical correction band
pub const SNAP_EPSILON_M: f32 = 0.001; // below 1 mm the object already rests on the plane
pub const SNAP_ALLOWANCE_M: f32 = 0.05; // above 5 cm the gap is noise or another surface
pub const CORRECTION_SECS_PER_METER: f32 = 500.0; // ~2 mm of correction per second of animation

// Placement
pub const PLACED_CONTENT_SCALE: f32 = 0.09; // authored models are far larger than tabletop scale
pub const CAPTION_OFFSET: [f32; 3] = [0.0, -0.9, -2.05]; // caption position relative to the character
pub const PARTICLE_PITCH_RADIANS: f32 = std::f32::consts::FRAC_PI_2; // emitter faces down onto the plane

#[inline]
pub fn caption_offset_vec3() -> Vec3 {
    Vec3::new(CAPTION_OFFSET[0], CAPTION_OFFSET[1], CAPTION_OFFSET[2])
}
