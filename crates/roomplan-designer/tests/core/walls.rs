use proptest::prelude::*;

use roomplan_core::{IdProvider, SequentialIds};
use roomplan_designer::model::{Dimensions, Room, Wall, WallElement, WallElementKind};
use roomplan_designer::{room_wall_segments, wall_segments, WallSegment};

fn door(ids: &mut SequentialIds, wall: Wall, offset: f64, width: f64, height: f64) -> WallElement {
    WallElement::new(ids.next_id(), WallElementKind::Door, wall, offset, width, height, 0.0)
}

fn window(
    ids: &mut SequentialIds,
    wall: Wall,
    offset: f64,
    width: f64,
    height: f64,
    elevation: f64,
) -> WallElement {
    WallElement::new(ids.next_id(), WallElementKind::Window, wall, offset, width, height, elevation)
}

fn solid_area(segments: &[WallSegment]) -> f64 {
    segments.iter().map(|s| s.width * s.height).sum()
}

#[test]
fn solid_wall_is_one_segment() {
    let segments = wall_segments(5.0, 2.8, &[]);
    assert_eq!(segments.len(), 1);
    let s = segments[0];
    assert!((s.offset).abs() < 1e-12);
    assert!((s.width - 5.0).abs() < 1e-12);
    assert!((s.height - 2.8).abs() < 1e-12);
    assert!((s.y_center - 1.4).abs() < 1e-12);
}

#[test]
fn centered_door_yields_two_gaps_and_a_lintel() {
    let mut ids = SequentialIds::new();
    let d = door(&mut ids, Wall::North, 0.0, 1.0, 2.1);
    let segments = wall_segments(5.0, 2.8, &[&d]);
    assert_eq!(segments.len(), 3);

    // Left gap: [-2.5, -0.5].
    assert!((segments[0].offset + 1.5).abs() < 1e-12);
    assert!((segments[0].width - 2.0).abs() < 1e-12);
    assert!((segments[0].height - 2.8).abs() < 1e-12);

    // Lintel above the door, flush with the wall top.
    let lintel = segments[1];
    assert!((lintel.offset).abs() < 1e-12);
    assert!((lintel.width - 1.0).abs() < 1e-12);
    assert!((lintel.height - 0.7).abs() < 1e-12);
    assert!((lintel.y_center - 2.45).abs() < 1e-12);

    // Right gap mirrors the left.
    assert!((segments[2].offset - 1.5).abs() < 1e-12);
    assert!((segments[2].width - 2.0).abs() < 1e-12);
}

#[test]
fn window_gets_sill_and_lintel() {
    let mut ids = SequentialIds::new();
    let w = window(&mut ids, Wall::North, 0.5, 1.2, 1.2, 0.9);
    let segments = wall_segments(5.0, 2.8, &[&w]);
    assert_eq!(segments.len(), 4);

    let lintel = segments[1];
    assert!((lintel.height - 0.7).abs() < 1e-12);
    assert!((lintel.y_center - 2.45).abs() < 1e-12);

    let sill = segments[2];
    assert!((sill.width - 1.2).abs() < 1e-12);
    assert!((sill.height - 0.9).abs() < 1e-12);
    assert!((sill.y_center - 0.45).abs() < 1e-12);
}

#[test]
fn full_height_opening_has_no_lintel() {
    let mut ids = SequentialIds::new();
    let d = door(&mut ids, Wall::North, 0.0, 1.0, 2.8);
    let segments = wall_segments(5.0, 2.8, &[&d]);
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| (s.height - 2.8).abs() < 1e-12));
}

#[test]
fn openings_are_processed_in_offset_order() {
    let mut ids = SequentialIds::new();
    let right = door(&mut ids, Wall::North, 1.5, 0.8, 2.1);
    let left = door(&mut ids, Wall::North, -1.5, 0.8, 2.1);
    // Passed out of order; segmentation sorts by offset.
    let segments = wall_segments(6.0, 2.8, &[&right, &left]);

    let mut prev = f64::NEG_INFINITY;
    for s in &segments {
        assert!(s.offset >= prev);
        prev = s.offset;
    }
    // Two gaps between/around plus two lintels... left gap, lintel, middle
    // gap, lintel, right gap.
    assert_eq!(segments.len(), 5);
}

#[test]
fn opening_flush_with_wall_end_leaves_no_sliver() {
    let mut ids = SequentialIds::new();
    // Door's right edge exactly at the wall end.
    let d = door(&mut ids, Wall::North, 2.0, 1.0, 2.1);
    let segments = wall_segments(5.0, 2.8, &[&d]);
    assert!(segments.iter().all(|s| s.width > 1e-12));
    assert!((solid_area(&segments) - (5.0 * 2.8 - 1.0 * 2.1)).abs() < 1e-9);
}

#[test]
fn room_walls_use_their_own_axis_lengths() {
    let mut ids = SequentialIds::new();
    let mut room = Room::new(
        ids.next_id(),
        "Study",
        Dimensions::new(5.0, 4.0, 2.8),
        [0.0, 0.0],
    );
    room.wall_elements.push(door(&mut ids, Wall::North, 0.0, 1.0, 2.1));

    let north = room_wall_segments(&room, Wall::North);
    assert_eq!(north.len(), 3);
    assert!((solid_area(&north) - (5.0 * 2.8 - 1.0 * 2.1)).abs() < 1e-9);

    // The east wall runs along the depth axis and has no openings.
    let east = room_wall_segments(&room, Wall::East);
    assert_eq!(east.len(), 1);
    assert!((east[0].width - 4.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn segments_tile_the_wall_minus_openings(
        door_offset in -2.0f64..-1.0,
        door_width in 0.5f64..0.9,
        door_height in 1.5f64..2.5,
        win_offset in 0.5f64..2.0,
        win_width in 0.4f64..0.9,
        win_height in 0.8f64..1.5,
        win_elevation in 0.3f64..1.0,
    ) {
        let mut ids = SequentialIds::new();
        let d = door(&mut ids, Wall::North, door_offset, door_width, door_height);
        let w = window(&mut ids, Wall::North, win_offset, win_width, win_height, win_elevation);

        let (length, height) = (6.0, 2.8);
        let segments = wall_segments(length, height, &[&d, &w]);

        let cut = door_width * door_height + win_width * win_height;
        prop_assert!((solid_area(&segments) - (length * height - cut)).abs() < 1e-9);
        prop_assert!(segments.iter().all(|s| s.width > 0.0 && s.height > 0.0));
    }
}
