//! Plane-follow policy: keep a placed object visually resting on its
//! supporting plane as the pose estimate refines, without jitter and without
//! being pulled onto an unrelated surface.

use glam::Vec3;

use crate::anchor::PlaneAnchor;
use crate::constants::{
    CORRECTION_SECS_PER_METER, EXTENT_TOLERANCE, SNAP_ALLOWANCE_M, SNAP_EPSILON_M,
};

/// Timing curve for a smoothed property animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Accelerate then decelerate; avoids visually abrupt corrections.
    EaseInOut,
}

impl Easing {
    /// Progress of the animated value at normalized time `t` in [0, 1].
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}

/// One smoothed vertical correction for the host to apply to the placed
/// object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    /// World-space height the object should settle at.
    pub target_y: f32,
    /// Seconds over which the host should ease the move.
    pub duration_secs: f32,
    pub easing: Easing,
}

/// Outcome of evaluating one anchor update against the placed object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adjustment {
    /// Issue this correction to the host.
    Correct(Correction),
    /// The object already rests on the plane (within the dead-zone).
    OnPlane,
    /// The object is not over this particular plane; leave it alone.
    OutsideBounds,
    /// The gap is too large to be a pose refinement; snapping would be a
    /// visible teleport, so treat it as noise or a different surface.
    TooFar,
}

impl Adjustment {
    pub fn correction(&self) -> Option<Correction> {
        match self {
            Adjustment::Correct(c) => Some(*c),
            _ => None,
        }
    }
}

/// Evaluate the three-tier plane-follow policy for an object at
/// `object_world` against one plane-anchor snapshot.
pub fn adjust_onto_plane(object_world: Vec3, anchor: &PlaneAnchor) -> Adjustment {
    let local = anchor.to_local(object_world);

    if !anchor.contains_horizontal(local, EXTENT_TOLERANCE) {
        log::trace!("[adjust] local {:?} outside widened bounds", local);
        return Adjustment::OutsideBounds;
    }

    let distance = local.y.abs();
    if distance < SNAP_EPSILON_M {
        return Adjustment::OnPlane;
    }
    if distance >= SNAP_ALLOWANCE_M {
        log::trace!("[adjust] gap {distance} m exceeds allowance");
        return Adjustment::TooFar;
    }

    Adjustment::Correct(Correction {
        target_y: anchor.world_y(),
        duration_secs: distance * CORRECTION_SECS_PER_METER,
        easing: Easing::EaseInOut,
    })
}
