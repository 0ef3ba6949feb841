//! Reversible commands over the plan document.
//!
//! Every committed mutation is captured as a [`PlannerCommand`] holding
//! enough of the before/after state to be exactly reversible: `apply`
//! plays the transition forward, `revert` plays its inverse. Removal
//! commands remember the slot each entity occupied so undo restores the
//! document's insertion order, which the snap resolver's tie-breaking
//! depends on.

use roomplan_core::EntityId;

use crate::document::Document;
use crate::model::{FurnitureInstance, Room, WallElement};

/// A single reversible transition between two document states.
#[derive(Debug, Clone)]
pub enum PlannerCommand {
    AddRoom(AddRoom),
    RemoveRoom(RemoveRoom),
    UpdateRoom(UpdateRoom),
    AddFurniture(AddFurniture),
    RemoveFurniture(RemoveFurniture),
    UpdateFurniture(UpdateFurniture),
    AddWallElement(AddWallElement),
    RemoveWallElement(RemoveWallElement),
    UpdateWallElement(UpdateWallElement),
    Composite(Composite),
}

#[derive(Debug, Clone)]
pub struct AddRoom {
    pub room: Room,
}

#[derive(Debug, Clone)]
pub struct RemoveRoom {
    pub index: usize,
    pub room: Room,
    /// Cascaded furniture with the slot each occupied at removal time.
    pub furniture: Vec<(usize, FurnitureInstance)>,
}

#[derive(Debug, Clone)]
pub struct UpdateRoom {
    pub id: EntityId,
    pub old: Room,
    pub new: Room,
}

#[derive(Debug, Clone)]
pub struct AddFurniture {
    pub item: FurnitureInstance,
}

#[derive(Debug, Clone)]
pub struct RemoveFurniture {
    pub index: usize,
    pub item: FurnitureInstance,
}

#[derive(Debug, Clone)]
pub struct UpdateFurniture {
    pub id: EntityId,
    pub old: FurnitureInstance,
    pub new: FurnitureInstance,
}

#[derive(Debug, Clone)]
pub struct AddWallElement {
    pub room_id: EntityId,
    pub element: WallElement,
}

#[derive(Debug, Clone)]
pub struct RemoveWallElement {
    pub room_id: EntityId,
    pub index: usize,
    pub element: WallElement,
}

#[derive(Debug, Clone)]
pub struct UpdateWallElement {
    pub room_id: EntityId,
    pub id: EntityId,
    pub old: WallElement,
    pub new: WallElement,
}

/// Several commands committed as one history entry.
#[derive(Debug, Clone)]
pub struct Composite {
    pub commands: Vec<PlannerCommand>,
    pub name: String,
}

impl PlannerCommand {
    /// Short name for logging and host display.
    pub fn name(&self) -> &str {
        match self {
            Self::AddRoom(_) => "Add Room",
            Self::RemoveRoom(_) => "Remove Room",
            Self::UpdateRoom(_) => "Update Room",
            Self::AddFurniture(_) => "Add Furniture",
            Self::RemoveFurniture(_) => "Remove Furniture",
            Self::UpdateFurniture(_) => "Update Furniture",
            Self::AddWallElement(_) => "Add Wall Element",
            Self::RemoveWallElement(_) => "Remove Wall Element",
            Self::UpdateWallElement(_) => "Update Wall Element",
            Self::Composite(c) => &c.name,
        }
    }

    /// True when applying the command would not observably change the
    /// document. Empty patches are never pushed onto history.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::UpdateRoom(cmd) => cmd.old == cmd.new,
            Self::UpdateFurniture(cmd) => cmd.old == cmd.new,
            Self::UpdateWallElement(cmd) => cmd.old == cmd.new,
            Self::Composite(cmd) => cmd.commands.iter().all(Self::is_empty),
            _ => false,
        }
    }

    /// Plays the forward transition.
    pub fn apply(&self, doc: &mut Document) {
        match self {
            Self::AddRoom(cmd) => doc.push_room(cmd.room.clone()),
            Self::RemoveRoom(cmd) => {
                doc.remove_furniture_of_room(cmd.room.id);
                doc.remove_room(cmd.room.id);
            }
            Self::UpdateRoom(cmd) => {
                if let Some(room) = doc.room_mut(cmd.id) {
                    *room = cmd.new.clone();
                }
            }
            Self::AddFurniture(cmd) => doc.push_furniture(cmd.item.clone()),
            Self::RemoveFurniture(cmd) => {
                doc.remove_furniture(cmd.item.id);
            }
            Self::UpdateFurniture(cmd) => {
                if let Some(item) = doc.furniture_item_mut(cmd.id) {
                    *item = cmd.new.clone();
                }
            }
            Self::AddWallElement(cmd) => {
                if let Some(room) = doc.room_mut(cmd.room_id) {
                    room.wall_elements.push(cmd.element.clone());
                }
            }
            Self::RemoveWallElement(cmd) => {
                if let Some(room) = doc.room_mut(cmd.room_id) {
                    room.wall_elements.retain(|e| e.id != cmd.element.id);
                }
            }
            Self::UpdateWallElement(cmd) => {
                if let Some(room) = doc.room_mut(cmd.room_id) {
                    if let Some(element) =
                        room.wall_elements.iter_mut().find(|e| e.id == cmd.id)
                    {
                        *element = cmd.new.clone();
                    }
                }
            }
            Self::Composite(cmd) => {
                for sub in &cmd.commands {
                    sub.apply(doc);
                }
            }
        }
    }

    /// Plays the exact inverse of [`apply`](Self::apply).
    pub fn revert(&self, doc: &mut Document) {
        match self {
            Self::AddRoom(cmd) => {
                doc.remove_room(cmd.room.id);
            }
            Self::RemoveRoom(cmd) => {
                doc.insert_room(cmd.index, cmd.room.clone());
                // Reverse removal order inverts the index shifts exactly.
                for (index, item) in cmd.furniture.iter().rev() {
                    doc.insert_furniture(*index, item.clone());
                }
            }
            Self::UpdateRoom(cmd) => {
                if let Some(room) = doc.room_mut(cmd.id) {
                    *room = cmd.old.clone();
                }
            }
            Self::AddFurniture(cmd) => {
                doc.remove_furniture(cmd.item.id);
            }
            Self::RemoveFurniture(cmd) => {
                doc.insert_furniture(cmd.index, cmd.item.clone());
            }
            Self::UpdateFurniture(cmd) => {
                if let Some(item) = doc.furniture_item_mut(cmd.id) {
                    *item = cmd.old.clone();
                }
            }
            Self::AddWallElement(cmd) => {
                if let Some(room) = doc.room_mut(cmd.room_id) {
                    room.wall_elements.retain(|e| e.id != cmd.element.id);
                }
            }
            Self::RemoveWallElement(cmd) => {
                if let Some(room) = doc.room_mut(cmd.room_id) {
                    let index = cmd.index.min(room.wall_elements.len());
                    room.wall_elements.insert(index, cmd.element.clone());
                }
            }
            Self::UpdateWallElement(cmd) => {
                if let Some(room) = doc.room_mut(cmd.room_id) {
                    if let Some(element) =
                        room.wall_elements.iter_mut().find(|e| e.id == cmd.id)
                    {
                        *element = cmd.old.clone();
                    }
                }
            }
            Self::Composite(cmd) => {
                for sub in cmd.commands.iter().rev() {
                    sub.revert(doc);
                }
            }
        }
    }
}
