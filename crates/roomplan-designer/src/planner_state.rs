//! Planner state: the document, selection, and bounded undo/redo history.
//!
//! All mutation flows through [`PlannerState::push_command`]: each public
//! mutating operation either no-ops (unknown id, empty patch) or commits
//! exactly one history entry. Live drag previews never touch this type;
//! only a released drag commits, through the sessions in [`crate::drag`].

use tracing::{debug, warn};

use roomplan_core::constants::{
    DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, MAX_HISTORY,
};
use roomplan_core::{EntityId, IdProvider, UuidIds};

use crate::commands::{
    AddFurniture, AddRoom, AddWallElement, Composite, PlannerCommand, RemoveFurniture, RemoveRoom,
    RemoveWallElement, UpdateFurniture, UpdateRoom, UpdateWallElement,
};
use crate::document::Document;
use crate::model::{Dimensions, FurnitureInstance, Room, Wall, WallElement, WallElementKind};
use crate::selection::Selection;
use crate::snapping::clamp_to_room;

/// Offset applied to a duplicated item before clamping it back into its
/// room, so the copy does not land exactly on the original.
const DUPLICATE_OFFSET: f64 = 0.3;

/// Partial update of a room; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub position: Option<[f64; 2]>,
    pub locked: Option<bool>,
}

/// Partial update of a furniture instance.
#[derive(Debug, Clone, Default)]
pub struct FurnitureUpdate {
    pub room_id: Option<EntityId>,
    pub name: Option<String>,
    pub position: Option<[f64; 3]>,
    pub rotation: Option<[f64; 3]>,
    pub dimensions: Option<Dimensions>,
    pub color: Option<String>,
    pub locked: Option<bool>,
}

/// Partial update of a wall element.
#[derive(Debug, Clone, Default)]
pub struct WallElementUpdate {
    pub wall: Option<Wall>,
    pub offset: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub elevation: Option<f64>,
}

/// The engine's single owned aggregate: rooms, furniture, selection, and
/// history, mutated only through committed commands.
pub struct PlannerState {
    document: Document,
    selection: Selection,
    undo_stack: Vec<PlannerCommand>,
    redo_stack: Vec<PlannerCommand>,
    ids: Box<dyn IdProvider>,
    is_modified: bool,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerState {
    /// Creates an empty planner with random (v4) identity allocation.
    pub fn new() -> Self {
        Self::with_ids(Box::new(UuidIds))
    }

    /// Creates an empty planner with a host-supplied id provider.
    pub fn with_ids(ids: Box<dyn IdProvider>) -> Self {
        Self {
            document: Document::new(),
            selection: Selection::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            ids,
            is_modified: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// True once any mutation has been committed since the last load.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Applies a command and pushes it onto the bounded undo stack,
    /// clearing redo. Empty patches are dropped without touching history.
    fn push_command(&mut self, cmd: PlannerCommand) {
        if cmd.is_empty() {
            return;
        }
        debug!(command = cmd.name(), "commit");
        cmd.apply(&mut self.document);
        self.undo_stack.push(cmd);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.is_modified = true;
        self.selection.reconcile(&self.document);
    }

    /// Reverts the most recent commit. No-op on an empty stack.
    pub fn undo(&mut self) {
        if let Some(cmd) = self.undo_stack.pop() {
            debug!(command = cmd.name(), "undo");
            cmd.revert(&mut self.document);
            self.redo_stack.push(cmd);
            if self.redo_stack.len() > MAX_HISTORY {
                self.redo_stack.remove(0);
            }
            self.is_modified = true;
            self.selection.reconcile(&self.document);
        }
    }

    /// Re-applies the most recently undone commit. No-op on an empty stack.
    pub fn redo(&mut self) {
        if let Some(cmd) = self.redo_stack.pop() {
            debug!(command = cmd.name(), "redo");
            cmd.apply(&mut self.document);
            self.undo_stack.push(cmd);
            if self.undo_stack.len() > MAX_HISTORY {
                self.undo_stack.remove(0);
            }
            self.is_modified = true;
            self.selection.reconcile(&self.document);
        }
    }

    /// Clears both history stacks without touching the document.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    // --- rooms ---

    /// Adds a room and selects it.
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        dimensions: Dimensions,
        position: [f64; 2],
    ) -> EntityId {
        let id = self.ids.next_id();
        let room = Room::new(id, name, dimensions, position);
        self.push_command(PlannerCommand::AddRoom(AddRoom { room }));
        self.selection.select_room(Some(id));
        id
    }

    /// Adds a room with the default dimensions.
    pub fn add_default_room(&mut self, name: impl Into<String>, position: [f64; 2]) -> EntityId {
        self.add_room(
            name,
            Dimensions::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT),
            position,
        )
    }

    /// Merges a partial update into a room. Unknown ids and no-change
    /// updates are silent no-ops.
    pub fn update_room(&mut self, id: EntityId, update: RoomUpdate) {
        let Some(old) = self.document.room(id).cloned() else {
            warn!(%id, "update_room: unknown room");
            return;
        };
        let mut new = old.clone();
        if let Some(name) = update.name {
            new.name = name;
        }
        if let Some(dimensions) = update.dimensions {
            new.dimensions = dimensions.sanitized();
        }
        if let Some(position) = update.position {
            new.position = position;
        }
        if let Some(locked) = update.locked {
            new.locked = locked;
        }
        self.push_command(PlannerCommand::UpdateRoom(UpdateRoom { id, old, new }));
    }

    /// Removes a room and every furniture item inside it.
    pub fn remove_room(&mut self, id: EntityId) {
        let Some(index) = self.document.rooms().iter().position(|r| r.id == id) else {
            warn!(%id, "remove_room: unknown room");
            return;
        };
        let room = self.document.rooms()[index].clone();

        // Record each cascaded item with the slot it will occupy at
        // removal time, so undo can replay the inserts in reverse.
        let mut furniture = Vec::new();
        let mut removed = 0;
        for (i, item) in self.document.furniture().iter().enumerate() {
            if item.room_id == id {
                furniture.push((i - removed, item.clone()));
                removed += 1;
            }
        }
        self.push_command(PlannerCommand::RemoveRoom(RemoveRoom {
            index,
            room,
            furniture,
        }));
    }

    // --- furniture ---

    /// Places a catalog item at the center of a room and selects it.
    /// Returns `None` when the room does not exist.
    pub fn add_furniture(
        &mut self,
        room_id: EntityId,
        catalog_id: impl Into<String>,
        name: impl Into<String>,
        dimensions: Dimensions,
        color: impl Into<String>,
    ) -> Option<EntityId> {
        if self.document.room(room_id).is_none() {
            warn!(%room_id, "add_furniture: unknown room");
            return None;
        }
        let id = self.ids.next_id();
        let item = FurnitureInstance::new(id, catalog_id, room_id, name, dimensions, color);
        self.push_command(PlannerCommand::AddFurniture(AddFurniture { item }));
        self.selection.select_furniture(id);
        Some(id)
    }

    /// Merges a partial update into a furniture item.
    pub fn update_furniture(&mut self, id: EntityId, update: FurnitureUpdate) {
        let Some(old) = self.document.furniture_item(id).cloned() else {
            warn!(%id, "update_furniture: unknown item");
            return;
        };
        let mut new = old.clone();
        if let Some(room_id) = update.room_id {
            if self.document.room(room_id).is_none() {
                warn!(%room_id, "update_furniture: unknown target room");
                return;
            }
            new.room_id = room_id;
        }
        if let Some(name) = update.name {
            new.name = name;
        }
        if let Some(position) = update.position {
            new.position = position;
        }
        if let Some(rotation) = update.rotation {
            new.rotation = rotation;
        }
        if let Some(dimensions) = update.dimensions {
            new.dimensions = dimensions.sanitized();
        }
        if let Some(color) = update.color {
            new.color = color;
        }
        if let Some(locked) = update.locked {
            new.locked = locked;
        }
        self.push_command(PlannerCommand::UpdateFurniture(UpdateFurniture {
            id,
            old,
            new,
        }));
    }

    pub fn remove_furniture(&mut self, id: EntityId) {
        let Some(index) = self.document.furniture().iter().position(|f| f.id == id) else {
            warn!(%id, "remove_furniture: unknown item");
            return;
        };
        let item = self.document.furniture()[index].clone();
        self.push_command(PlannerCommand::RemoveFurniture(RemoveFurniture {
            index,
            item,
        }));
    }

    /// Clones an item under a fresh id, nudged off the original and
    /// clamped back into its room, and selects the copy.
    pub fn duplicate_furniture(&mut self, id: EntityId) -> Option<EntityId> {
        let source = self.document.furniture_item(id).cloned()?;
        let room = self.document.room(source.room_id).cloned()?;

        let mut copy = source;
        copy.id = self.ids.next_id();
        let candidate = [
            copy.position[0] + DUPLICATE_OFFSET,
            copy.position[1],
            copy.position[2] + DUPLICATE_OFFSET,
        ];
        copy.position = clamp_to_room(&copy, &room, candidate);

        let copy_id = copy.id;
        self.push_command(PlannerCommand::AddFurniture(AddFurniture { item: copy }));
        self.selection.select_furniture(copy_id);
        Some(copy_id)
    }

    /// Removes every selected furniture item as one history entry.
    pub fn remove_selected_furniture(&mut self) {
        let ids: Vec<EntityId> = self.selection.furniture().to_vec();
        if ids.is_empty() {
            return;
        }
        let mut commands = Vec::new();
        let mut removed_indices: Vec<usize> = Vec::new();
        for id in ids {
            if let Some(orig) = self.document.furniture().iter().position(|f| f.id == id) {
                // Earlier removals at lower slots shift this one left.
                let shift = removed_indices.iter().filter(|&&r| r < orig).count();
                let item = self.document.furniture()[orig].clone();
                removed_indices.push(orig);
                commands.push(PlannerCommand::RemoveFurniture(RemoveFurniture {
                    index: orig - shift,
                    item,
                }));
            }
        }
        if commands.is_empty() {
            return;
        }
        self.push_command(PlannerCommand::Composite(Composite {
            commands,
            name: "Delete Furniture".to_string(),
        }));
    }

    // --- wall elements ---

    /// Cuts a door or window into a wall of a room.
    pub fn add_wall_element(
        &mut self,
        room_id: EntityId,
        kind: WallElementKind,
        wall: Wall,
        offset: f64,
        width: f64,
        height: f64,
        elevation: f64,
    ) -> Option<EntityId> {
        if self.document.room(room_id).is_none() {
            warn!(%room_id, "add_wall_element: unknown room");
            return None;
        }
        let id = self.ids.next_id();
        let element = WallElement::new(id, kind, wall, offset, width, height, elevation);
        self.push_command(PlannerCommand::AddWallElement(AddWallElement {
            room_id,
            element,
        }));
        Some(id)
    }

    /// Merges a partial update into a wall element.
    pub fn update_wall_element(
        &mut self,
        room_id: EntityId,
        element_id: EntityId,
        update: WallElementUpdate,
    ) {
        let Some(old) = self
            .document
            .room(room_id)
            .and_then(|r| r.wall_element(element_id))
            .cloned()
        else {
            warn!(%room_id, %element_id, "update_wall_element: unknown element");
            return;
        };
        let new = WallElement::new(
            old.id,
            old.kind,
            update.wall.unwrap_or(old.wall),
            update.offset.unwrap_or(old.offset),
            update.width.unwrap_or(old.width),
            update.height.unwrap_or(old.height),
            update.elevation.unwrap_or(old.elevation),
        );
        self.push_command(PlannerCommand::UpdateWallElement(UpdateWallElement {
            room_id,
            id: element_id,
            old,
            new,
        }));
    }

    pub fn remove_wall_element(&mut self, room_id: EntityId, element_id: EntityId) {
        let Some(room) = self.document.room(room_id) else {
            warn!(%room_id, "remove_wall_element: unknown room");
            return;
        };
        let Some(index) = room.wall_elements.iter().position(|e| e.id == element_id) else {
            warn!(%element_id, "remove_wall_element: unknown element");
            return;
        };
        let element = room.wall_elements[index].clone();
        self.push_command(PlannerCommand::RemoveWallElement(RemoveWallElement {
            room_id,
            index,
            element,
        }));
    }

    // --- selection (never commits history) ---

    /// Selects a single furniture item. Unknown ids are ignored.
    pub fn select_furniture(&mut self, id: EntityId) {
        if self.document.furniture_item(id).is_some() {
            self.selection.select_furniture(id);
        }
    }

    /// Toggles an item in the multi-selection. Unknown ids are ignored.
    pub fn toggle_furniture_selection(&mut self, id: EntityId) {
        if self.document.furniture_item(id).is_some() {
            self.selection.toggle_furniture(id);
        }
    }

    pub fn select_room(&mut self, id: Option<EntityId>) {
        match id {
            Some(room_id) if self.document.room(room_id).is_none() => {}
            other => self.selection.select_room(other),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- document boundary ---

    /// Replaces the aggregate wholesale, clearing history and selection.
    /// Used by the persistence collaborator after deserialization.
    pub fn load_document(&mut self, document: Document) {
        self.document = document;
        self.selection.clear();
        self.clear_history();
        self.is_modified = false;
    }

    /// Marks the state as saved.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }
}
