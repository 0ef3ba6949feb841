use proptest::prelude::*;

use roomplan_core::{EntityId, IdProvider, SequentialIds};
use roomplan_designer::model::{Dimensions, FurnitureInstance};
use roomplan_designer::{aabb_overlap, collides, Aabb};

fn item_at(
    ids: &mut SequentialIds,
    room_id: EntityId,
    x: f64,
    z: f64,
    width: f64,
    depth: f64,
) -> FurnitureInstance {
    let mut item = FurnitureInstance::new(
        ids.next_id(),
        "sofa-01",
        room_id,
        "Sofa",
        Dimensions::new(width, depth, 1.0),
        "#556677",
    );
    item.position = [x, 0.0, z];
    item
}

#[test]
fn overlapping_boxes_overlap() {
    let a = Aabb::new(0.0, 2.0, 0.0, 2.0);
    let b = Aabb::new(1.0, 3.0, 1.0, 3.0);
    assert!(aabb_overlap(&a, &b));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Aabb::new(0.0, 1.0, 0.0, 1.0);
    let b = Aabb::new(1.0, 2.0, 0.0, 1.0);
    assert!(!aabb_overlap(&a, &b));
    let c = Aabb::new(0.0, 1.0, 1.0, 2.0);
    assert!(!aabb_overlap(&a, &c));
}

#[test]
fn collides_against_room_mates_only() {
    let mut ids = SequentialIds::new();
    let room_a = ids.next_id();
    let room_b = ids.next_id();

    let mover = item_at(&mut ids, room_a, 0.0, 0.0, 1.0, 1.0);
    let neighbor = item_at(&mut ids, room_a, 0.5, 0.0, 1.0, 1.0);
    let elsewhere = item_at(&mut ids, room_b, 0.5, 0.0, 1.0, 1.0);

    let all = vec![mover.clone(), neighbor, elsewhere];
    assert!(collides(&mover, [0.0, 0.0, 0.0], &all));

    // Only the cross-room item remains nearby: no collision.
    let all = vec![all[0].clone(), all[2].clone()];
    assert!(!collides(&mover, [0.0, 0.0, 0.0], &all));
}

#[test]
fn item_never_collides_with_itself() {
    let mut ids = SequentialIds::new();
    let room = ids.next_id();
    let mover = item_at(&mut ids, room, 0.0, 0.0, 1.0, 1.0);
    assert!(!collides(&mover, [0.0, 0.0, 0.0], &[mover.clone()]));
}

#[test]
fn candidate_position_is_tested_not_stored_position() {
    let mut ids = SequentialIds::new();
    let room = ids.next_id();
    let mover = item_at(&mut ids, room, 0.0, 0.0, 1.0, 1.0);
    let neighbor = item_at(&mut ids, room, 3.0, 0.0, 1.0, 1.0);
    let all = vec![mover.clone(), neighbor];

    assert!(!collides(&mover, [0.0, 0.0, 0.0], &all));
    assert!(collides(&mover, [2.5, 0.0, 0.0], &all));
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        ax in -10.0f64..10.0, az in -10.0f64..10.0,
        aw in 0.01f64..5.0, ad in 0.01f64..5.0,
        bx in -10.0f64..10.0, bz in -10.0f64..10.0,
        bw in 0.01f64..5.0, bd in 0.01f64..5.0,
    ) {
        let a = Aabb::new(ax - aw / 2.0, ax + aw / 2.0, az - ad / 2.0, az + ad / 2.0);
        let b = Aabb::new(bx - bw / 2.0, bx + bw / 2.0, bz - bd / 2.0, bz + bd / 2.0);
        prop_assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
    }
}
