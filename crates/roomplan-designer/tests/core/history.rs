use roomplan_core::constants::MAX_HISTORY;
use roomplan_core::{EntityId, SequentialIds};
use roomplan_designer::model::{Dimensions, Wall, WallElementKind};
use roomplan_designer::{FurnitureUpdate, PlannerState, RoomUpdate, WallElementUpdate};

fn planner() -> PlannerState {
    PlannerState::with_ids(Box::new(SequentialIds::new()))
}

fn add_item(state: &mut PlannerState, room: EntityId, name: &str) -> EntityId {
    state
        .add_furniture(room, "cat-01", name, Dimensions::new(1.0, 1.0, 1.0), "#888888")
        .unwrap()
}

#[test]
fn undo_redo_round_trips_through_snapshots() {
    let mut state = planner();
    let empty = state.document().clone();

    let room = state.add_default_room("Living Room", [0.0, 0.0]);
    let after_room = state.document().clone();

    let item = add_item(&mut state, room, "Sofa");
    let after_item = state.document().clone();

    state.update_furniture(
        item,
        FurnitureUpdate {
            position: Some([1.0, 0.0, -0.5]),
            ..Default::default()
        },
    );
    let after_move = state.document().clone();

    state.undo();
    assert_eq!(*state.document(), after_item);
    state.undo();
    assert_eq!(*state.document(), after_room);
    state.undo();
    assert_eq!(*state.document(), empty);
    assert!(!state.can_undo());

    state.redo();
    state.redo();
    state.redo();
    assert_eq!(*state.document(), after_move);
    assert!(!state.can_redo());
}

#[test]
fn history_is_bounded() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);

    for i in 0..(MAX_HISTORY + 5) {
        state.update_room(
            room,
            RoomUpdate {
                position: Some([i as f64 + 1.0, 0.0]),
                ..Default::default()
            },
        );
    }
    assert_eq!(state.undo_depth(), MAX_HISTORY);

    while state.can_undo() {
        state.undo();
    }
    // 56 commits total; the oldest six fell off the stack, so undo
    // bottoms out at the state after the fifth position update.
    let r = state.document().room(room).unwrap();
    assert_eq!(r.position, [5.0, 0.0]);
}

#[test]
fn empty_patch_never_reaches_history() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    let depth = state.undo_depth();

    state.update_room(room, RoomUpdate::default());
    state.update_room(
        room,
        RoomUpdate {
            position: Some([0.0, 0.0]),
            ..Default::default()
        },
    );
    assert_eq!(state.undo_depth(), depth);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let mut state = planner();
    state.add_default_room("Room", [0.0, 0.0]);
    let depth = state.undo_depth();
    let snapshot = state.document().clone();

    let ghost = EntityId::default();
    state.update_room(ghost, RoomUpdate { locked: Some(true), ..Default::default() });
    state.remove_room(ghost);
    state.update_furniture(ghost, FurnitureUpdate::default());
    state.remove_furniture(ghost);
    assert!(state.add_furniture(ghost, "c", "n", Dimensions::default(), "#fff").is_none());

    assert_eq!(state.undo_depth(), depth);
    assert_eq!(*state.document(), snapshot);
}

#[test]
fn commit_clears_redo() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    add_item(&mut state, room, "Chair");
    state.undo();
    assert!(state.can_redo());

    add_item(&mut state, room, "Table");
    assert!(!state.can_redo());
}

#[test]
fn remove_room_cascades_and_undo_restores_order() {
    let mut state = planner();
    let keep = state.add_default_room("Keep", [0.0, 0.0]);
    let doomed = state.add_default_room("Doomed", [10.0, 0.0]);

    // Interleave ownership so the cascade removes non-adjacent slots.
    add_item(&mut state, keep, "A");
    add_item(&mut state, doomed, "B");
    add_item(&mut state, keep, "C");
    add_item(&mut state, doomed, "D");
    add_item(&mut state, keep, "E");
    let before = state.document().clone();

    state.remove_room(doomed);
    assert!(state.document().room(doomed).is_none());
    assert!(state.document().furniture().iter().all(|f| f.room_id == keep));
    assert_eq!(state.document().furniture().len(), 3);

    state.undo();
    assert_eq!(*state.document(), before);

    state.redo();
    assert_eq!(state.document().furniture().len(), 3);
}

#[test]
fn selection_prunes_on_removal_without_reselecting_on_undo() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    let item = add_item(&mut state, room, "Lamp");
    assert_eq!(state.selection().furniture(), &[item]);

    state.remove_furniture(item);
    assert!(state.selection().furniture().is_empty());

    // Undo brings the item back; the selection stays empty.
    state.undo();
    assert!(state.document().furniture_item(item).is_some());
    assert!(state.selection().furniture().is_empty());
}

#[test]
fn room_selection_falls_back_to_first_room() {
    let mut state = planner();
    let first = state.add_default_room("First", [0.0, 0.0]);
    let second = state.add_default_room("Second", [10.0, 0.0]);
    assert_eq!(state.selection().room(), Some(second));

    state.remove_room(second);
    assert_eq!(state.selection().room(), Some(first));
}

#[test]
fn remove_selected_is_a_single_history_entry() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    let a = add_item(&mut state, room, "A");
    let b = add_item(&mut state, room, "B");
    add_item(&mut state, room, "C");
    let before = state.document().clone();

    state.clear_selection();
    state.toggle_furniture_selection(a);
    state.toggle_furniture_selection(b);
    let depth = state.undo_depth();

    state.remove_selected_furniture();
    assert_eq!(state.undo_depth(), depth + 1);
    assert_eq!(state.document().furniture().len(), 1);
    assert!(state.selection().furniture().is_empty());

    state.undo();
    assert_eq!(*state.document(), before);
}

#[test]
fn remove_selected_with_empty_selection_is_a_no_op() {
    let mut state = planner();
    state.add_default_room("Room", [0.0, 0.0]);
    state.clear_selection();
    let depth = state.undo_depth();
    state.remove_selected_furniture();
    assert_eq!(state.undo_depth(), depth);
}

#[test]
fn duplicate_offsets_copy_and_selects_it() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    let item = add_item(&mut state, room, "Desk");
    let depth = state.undo_depth();

    let copy = state.duplicate_furniture(item).unwrap();
    assert_ne!(copy, item);
    assert_eq!(state.undo_depth(), depth + 1);
    assert_eq!(state.selection().furniture(), &[copy]);

    let copied = state.document().furniture_item(copy).unwrap();
    assert_eq!(copied.position, [0.3, 0.0, 0.3]);
    assert_eq!(copied.name, "Desk");
}

#[test]
fn duplicate_near_the_wall_stays_inside_the_room() {
    let mut state = planner();
    let room = state.add_room("Tight", Dimensions::new(2.0, 2.0, 2.8), [0.0, 0.0]);
    let item = add_item(&mut state, room, "Crate");
    state.update_furniture(
        item,
        FurnitureUpdate {
            position: Some([0.5, 0.0, 0.5]),
            ..Default::default()
        },
    );

    let copy = state.duplicate_furniture(item).unwrap();
    let copied = state.document().furniture_item(copy).unwrap();
    // Clamped to the half-room minus half-item bound.
    assert_eq!(copied.position, [0.5, 0.0, 0.5]);
}

#[test]
fn wall_element_lifecycle_is_reversible() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    let door = state
        .add_wall_element(room, WallElementKind::Door, Wall::North, 0.0, 1.0, 2.1, 0.0)
        .unwrap();
    let after_add = state.document().clone();

    state.update_wall_element(
        room,
        door,
        WallElementUpdate {
            offset: Some(1.0),
            ..Default::default()
        },
    );
    let after_update = state.document().clone();

    state.remove_wall_element(room, door);
    assert!(state.document().room(room).unwrap().wall_element(door).is_none());

    state.undo();
    assert_eq!(*state.document(), after_update);
    state.undo();
    assert_eq!(*state.document(), after_add);
    state.undo();
    assert!(state.document().room(room).unwrap().wall_elements.is_empty());
}

#[test]
fn door_elevation_is_pinned_to_the_floor() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    let door = state
        .add_wall_element(room, WallElementKind::Door, Wall::South, 0.0, 0.9, 2.1, 1.5)
        .unwrap();
    let element = state.document().room(room).unwrap().wall_element(door).unwrap();
    assert_eq!(element.elevation, 0.0);
}

#[test]
fn modified_flag_tracks_commits_and_saves() {
    let mut state = planner();
    assert!(!state.is_modified());

    state.add_default_room("Room", [0.0, 0.0]);
    assert!(state.is_modified());

    state.mark_saved();
    assert!(!state.is_modified());

    state.undo();
    assert!(state.is_modified());
}

#[test]
fn load_document_resets_selection_and_history() {
    let mut state = planner();
    let room = state.add_default_room("Room", [0.0, 0.0]);
    add_item(&mut state, room, "Bed");
    assert!(state.can_undo());

    let doc = state.document().clone();
    let mut fresh = planner();
    fresh.load_document(doc.clone());
    assert_eq!(*fresh.document(), doc);
    assert!(!fresh.can_undo());
    assert!(!fresh.can_redo());
    assert!(fresh.selection().furniture().is_empty());
    assert!(fresh.selection().room().is_none());
    assert!(!fresh.is_modified());
}

#[test]
fn moving_furniture_between_rooms_validates_target() {
    let mut state = planner();
    let a = state.add_default_room("A", [0.0, 0.0]);
    let b = state.add_default_room("B", [10.0, 0.0]);
    let item = add_item(&mut state, a, "Plant");
    let depth = state.undo_depth();

    state.update_furniture(
        item,
        FurnitureUpdate {
            room_id: Some(EntityId::default()),
            ..Default::default()
        },
    );
    assert_eq!(state.undo_depth(), depth);
    assert_eq!(state.document().furniture_item(item).unwrap().room_id, a);

    state.update_furniture(
        item,
        FurnitureUpdate {
            room_id: Some(b),
            ..Default::default()
        },
    );
    assert_eq!(state.document().furniture_item(item).unwrap().room_id, b);
}
