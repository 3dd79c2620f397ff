//! Single-placement-per-session state machine.

use glam::Vec3;

/// Opaque handle to a node the host engine has attached to its scene graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// The session's record of the one piece of placed content.
///
/// `position` is the model value: when a correction is issued the target
/// height is recorded here immediately, while the host animates the
/// presentation toward it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedObject {
    pub node: NodeId,
    pub position: Vec3,
}

/// At most one object is ever placed per session, and there is no
/// Placed -> Unplaced transition in this scope.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Placement {
    #[default]
    Unplaced,
    Placed(PlacedObject),
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }

    pub fn placed(&self) -> Option<&PlacedObject> {
        match self {
            Placement::Placed(object) => Some(object),
            Placement::Unplaced => None,
        }
    }

    pub fn placed_mut(&mut self) -> Option<&mut PlacedObject> {
        match self {
            Placement::Placed(object) => Some(object),
            Placement::Unplaced => None,
        }
    }

    /// Transition Unplaced -> Placed. Returns false (leaving the existing
    /// object untouched) if something is already placed.
    pub fn try_place(&mut self, object: PlacedObject) -> bool {
        match self {
            Placement::Unplaced => {
                *self = Placement::Placed(object);
                true
            }
            Placement::Placed(existing) => {
                log::debug!(
                    "[placement] ignoring placement at {:?}; already placed at {:?}",
                    object.position,
                    existing.position
                );
                false
            }
        }
    }
}
