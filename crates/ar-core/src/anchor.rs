//! Value types supplied by the host tracking system.
//!
//! These types intentionally avoid referencing any concrete AR stack; the
//! session layer consumes one snapshot per tracking callback and discards it.

use glam::{Mat4, Vec3};

/// Per-update snapshot of a tracked horizontal plane.
///
/// The host tracker refines `transform`, `center` and `extent` over time as
/// it sees more of the surface. Only the x and z components of `center` and
/// `extent` are meaningful; the plane lies in its local XZ plane.
#[derive(Clone, Copy, Debug)]
pub struct PlaneAnchor {
    /// World-from-anchor transform.
    pub transform: Mat4,
    /// Centre of the detected surface in the anchor's local frame.
    pub center: Vec3,
    /// Size of the detected surface along its local X and Z axes.
    pub extent: Vec3,
}

impl PlaneAnchor {
    /// World-space height of the plane surface.
    pub fn world_y(&self) -> f32 {
        self.transform.w_axis.y
    }

    /// Express a world-space point in the anchor's local frame.
    pub fn to_local(&self, world_point: Vec3) -> Vec3 {
        self.transform.inverse().transform_point3(world_point)
    }

    /// Whether a local-frame point lies over the detected surface, with the
    /// half-extent widened by `tolerance` on each side.
    pub fn contains_horizontal(&self, local: Vec3, tolerance: f32) -> bool {
        let half_x = self.extent.x * 0.5 * (1.0 + tolerance);
        let half_z = self.extent.z * 0.5 * (1.0 + tolerance);
        (local.x - self.center.x).abs() <= half_x && (local.z - self.center.z).abs() <= half_z
    }
}

/// A screen tap resolved against tracked geometry by the host's hit-testing
/// service.
#[derive(Clone, Copy, Debug)]
pub struct HitTest {
    pub world_transform: Mat4,
}

impl HitTest {
    pub fn at_position(position: Vec3) -> Self {
        Self {
            world_transform: Mat4::from_translation(position),
        }
    }

    /// World-space intersection point (the transform's translation column).
    pub fn world_position(&self) -> Vec3 {
        self.world_transform.w_axis.truncate()
    }
}
