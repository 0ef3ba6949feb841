//! Selection state and reconciliation.
//!
//! Furniture selection is an ordered-unique id list plus an optional
//! selected room. Whenever entities are removed or replaced by history
//! traversal, [`Selection::reconcile`] prunes ids that no longer resolve;
//! reconciliation never re-selects entities that came back via undo.

use roomplan_core::EntityId;

use crate::document::Document;

/// Tracks selected furniture and the selected room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    furniture: Vec<EntityId>,
    room: Option<EntityId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected furniture ids, in selection order.
    pub fn furniture(&self) -> &[EntityId] {
        &self.furniture
    }

    /// The selected room, if any.
    pub fn room(&self) -> Option<EntityId> {
        self.room
    }

    pub fn is_furniture_selected(&self, id: EntityId) -> bool {
        self.furniture.contains(&id)
    }

    /// Replaces the furniture selection with a single item.
    pub fn select_furniture(&mut self, id: EntityId) {
        self.furniture.clear();
        self.furniture.push(id);
    }

    /// Adds or removes an item without touching the rest (shift-click).
    pub fn toggle_furniture(&mut self, id: EntityId) {
        if let Some(index) = self.furniture.iter().position(|&f| f == id) {
            self.furniture.remove(index);
        } else {
            self.furniture.push(id);
        }
    }

    pub fn deselect_furniture(&mut self, id: EntityId) {
        self.furniture.retain(|&f| f != id);
    }

    pub fn clear_furniture(&mut self) {
        self.furniture.clear();
    }

    pub fn select_room(&mut self, id: Option<EntityId>) {
        self.room = id;
    }

    /// Clears everything.
    pub fn clear(&mut self) {
        self.furniture.clear();
        self.room = None;
    }

    /// Drops furniture ids that no longer resolve and falls the room
    /// selection back to the first existing room when the selected one is
    /// gone.
    pub fn reconcile(&mut self, doc: &Document) {
        self.furniture.retain(|&id| doc.furniture_item(id).is_some());
        if let Some(room_id) = self.room {
            if doc.room(room_id).is_none() {
                self.room = doc.rooms().first().map(|r| r.id);
            }
        }
    }
}
