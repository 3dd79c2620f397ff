// State-machine tests for single placement.

use glam::Vec3;

use ar_core::{NodeId, PlacedObject, Placement};

#[test]
fn starts_unplaced() {
    let placement = Placement::default();
    assert!(!placement.is_placed());
    assert!(placement.placed().is_none());
}

#[test]
fn first_placement_transitions() {
    let mut placement = Placement::default();
    let object = PlacedObject {
        node: NodeId(1),
        position: Vec3::new(0.1, 0.0, -0.2),
    };
    assert!(placement.try_place(object));
    assert!(placement.is_placed());
    assert_eq!(placement.placed(), Some(&object));
}

#[test]
fn second_placement_is_refused_and_keeps_the_first() {
    let mut placement = Placement::default();
    let first = PlacedObject {
        node: NodeId(1),
        position: Vec3::new(0.1, 0.0, -0.2),
    };
    assert!(placement.try_place(first));
    let second = PlacedObject {
        node: NodeId(2),
        position: Vec3::new(1.0, 1.0, 1.0),
    };
    assert!(!placement.try_place(second));
    assert_eq!(placement.placed(), Some(&first));
}

#[test]
fn placed_mut_updates_in_place() {
    let mut placement = Placement::default();
    placement.try_place(PlacedObject {
        node: NodeId(1),
        position: Vec3::new(0.0, 0.02, 0.0),
    });
    placement.placed_mut().unwrap().position.y = 0.0;
    assert_eq!(placement.placed().unwrap().position.y, 0.0);
}
