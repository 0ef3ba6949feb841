//! Owned aggregate of rooms and furniture.
//!
//! Rooms and furniture live in insertion-ordered `Vec`s. Snap resolution
//! and alignment guides iterate these in order, so preserving positions
//! across undo/redo keeps every tie-break deterministic.

use roomplan_core::EntityId;

use crate::model::{FurnitureInstance, Room};

/// The `{rooms, furniture}` aggregate the whole engine mutates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    rooms: Vec<Room>,
    furniture: Vec<FurnitureInstance>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a document from deserialized parts.
    pub fn from_parts(rooms: Vec<Room>, furniture: Vec<FurnitureInstance>) -> Self {
        Self { rooms, furniture }
    }

    /// Splits the document back into its parts for serialization.
    pub fn into_parts(self) -> (Vec<Room>, Vec<FurnitureInstance>) {
        (self.rooms, self.furniture)
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.furniture.is_empty()
    }

    /// All rooms, in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All furniture, in insertion order.
    pub fn furniture(&self) -> &[FurnitureInstance] {
        &self.furniture
    }

    pub fn room(&self, id: EntityId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn room_mut(&mut self, id: EntityId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    pub fn furniture_item(&self, id: EntityId) -> Option<&FurnitureInstance> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn furniture_item_mut(&mut self, id: EntityId) -> Option<&mut FurnitureInstance> {
        self.furniture.iter_mut().find(|f| f.id == id)
    }

    /// Items sharing a room with `item`, excluding the item itself.
    pub fn room_mates(&self, item: &FurnitureInstance) -> impl Iterator<Item = &FurnitureInstance> {
        let (id, room_id) = (item.id, item.room_id);
        self.furniture
            .iter()
            .filter(move |f| f.id != id && f.room_id == room_id)
    }

    pub(crate) fn push_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Re-inserts a room at its original slot (clamped to the current
    /// length) so undo restores insertion order.
    pub(crate) fn insert_room(&mut self, index: usize, room: Room) {
        let index = index.min(self.rooms.len());
        self.rooms.insert(index, room);
    }

    /// Removes a room by id, returning it with its slot. The caller is
    /// responsible for cascading furniture removal.
    pub(crate) fn remove_room(&mut self, id: EntityId) -> Option<(usize, Room)> {
        let index = self.rooms.iter().position(|r| r.id == id)?;
        Some((index, self.rooms.remove(index)))
    }

    pub(crate) fn push_furniture(&mut self, item: FurnitureInstance) {
        self.furniture.push(item);
    }

    pub(crate) fn insert_furniture(&mut self, index: usize, item: FurnitureInstance) {
        let index = index.min(self.furniture.len());
        self.furniture.insert(index, item);
    }

    pub(crate) fn remove_furniture(&mut self, id: EntityId) -> Option<(usize, FurnitureInstance)> {
        let index = self.furniture.iter().position(|f| f.id == id)?;
        Some((index, self.furniture.remove(index)))
    }

    /// Removes every item owned by a room, returning each with the slot
    /// it occupied at removal time (ascending).
    pub(crate) fn remove_furniture_of_room(
        &mut self,
        room_id: EntityId,
    ) -> Vec<(usize, FurnitureInstance)> {
        let mut removed = Vec::new();
        let mut index = 0;
        while index < self.furniture.len() {
            if self.furniture[index].room_id == room_id {
                removed.push((index, self.furniture.remove(index)));
            } else {
                index += 1;
            }
        }
        removed
    }
}
