//! Drag interaction state machines for furniture and rooms.
//!
//! The host drives a drag as pointer-down → pointer-move* → pointer-up.
//! A session is created on pointer-down, recomputes a pure preview on
//! every pointer-move (snap, collision, guidelines; no mutation, no
//! history), and commits exactly once on pointer-up. An abandoned drag is
//! cancelled: nothing was ever mutated, so displayed state falls back to
//! the last committed value for free.

use smallvec::SmallVec;
use tracing::debug;

use roomplan_core::EntityId;

use crate::collision::collides;
use crate::planner_state::{FurnitureUpdate, PlannerState, RoomUpdate};
use crate::snapping::{
    resolve_furniture_snap, resolve_room_snap, SnapConfig, SnapGuideline,
};

/// Lifecycle of a drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Committed,
    Cancelled,
}

/// Live preview recomputed on each pointer move.
#[derive(Debug, Clone)]
pub struct PlacementPreview {
    /// Resolved room-local position.
    pub position: [f64; 3],
    /// True when the placement would overlap a room-mate. Colliding
    /// previews are shown but refuse to commit.
    pub colliding: bool,
    pub guidelines: SmallVec<[SnapGuideline; 4]>,
}

/// A furniture drag in progress.
#[derive(Debug)]
pub struct FurnitureDragSession {
    item_id: EntityId,
    config: SnapConfig,
    phase: DragPhase,
    preview: Option<PlacementPreview>,
}

impl FurnitureDragSession {
    /// Captures an item on pointer-down. Refuses missing or locked items.
    pub fn begin(state: &PlannerState, item_id: EntityId, config: SnapConfig) -> Option<Self> {
        let item = state.document().furniture_item(item_id)?;
        if item.locked {
            return None;
        }
        Some(Self {
            item_id,
            config,
            phase: DragPhase::Dragging,
            preview: None,
        })
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn item_id(&self) -> EntityId {
        self.item_id
    }

    /// The most recent preview, if any pointer-move arrived yet.
    pub fn preview(&self) -> Option<&PlacementPreview> {
        self.preview.as_ref()
    }

    /// Recomputes the preview from a world-plane pointer position. Pure
    /// with respect to the planner; safe to call every frame.
    pub fn update(&mut self, state: &PlannerState, world_x: f64, world_z: f64) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let doc = state.document();
        let Some(item) = doc.furniture_item(self.item_id) else {
            // Deleted out from under the drag; the commit will no-op.
            self.preview = None;
            return;
        };
        let Some(room) = doc.room(item.room_id) else {
            self.preview = None;
            return;
        };

        let (local_x, local_z) = room.to_local(world_x, world_z);
        let snap = resolve_furniture_snap(
            item,
            [local_x, item.position[1], local_z],
            room,
            doc.furniture(),
            &self.config,
        );
        let colliding = collides(item, snap.position, doc.furniture());
        self.preview = Some(PlacementPreview {
            position: snap.position,
            colliding,
            guidelines: snap.guidelines,
        });
    }

    /// Commits the final preview as a single history entry. Returns true
    /// when a commit happened; a session without a valid, collision-free
    /// preview cancels instead.
    pub fn commit(&mut self, state: &mut PlannerState) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        let committed = match self.preview.take() {
            Some(preview) if !preview.colliding => {
                state.update_furniture(
                    self.item_id,
                    FurnitureUpdate {
                        position: Some(preview.position),
                        ..FurnitureUpdate::default()
                    },
                );
                true
            }
            _ => false,
        };
        self.phase = if committed {
            DragPhase::Committed
        } else {
            debug!(item = %self.item_id, "furniture drag cancelled");
            DragPhase::Cancelled
        };
        committed
    }

    /// Abandons the drag without mutating anything.
    pub fn cancel(&mut self) {
        if self.phase == DragPhase::Dragging {
            self.phase = DragPhase::Cancelled;
            self.preview = None;
        }
    }
}

/// A room drag in progress.
#[derive(Debug)]
pub struct RoomDragSession {
    room_id: EntityId,
    phase: DragPhase,
    preview: Option<[f64; 2]>,
}

impl RoomDragSession {
    /// Captures a room on pointer-down. Locked rooms refuse dragging.
    pub fn begin(state: &PlannerState, room_id: EntityId) -> Option<Self> {
        let room = state.document().room(room_id)?;
        if room.locked {
            return None;
        }
        Some(Self {
            room_id,
            phase: DragPhase::Dragging,
            preview: None,
        })
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The last resolved world position for the room's center.
    pub fn preview(&self) -> Option<[f64; 2]> {
        self.preview
    }

    /// Recomputes the preview, snapping edges to nearby rooms.
    pub fn update(&mut self, state: &PlannerState, world_x: f64, world_z: f64) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let doc = state.document();
        let Some(room) = doc.room(self.room_id) else {
            self.preview = None;
            return;
        };
        self.preview = Some(resolve_room_snap(room, [world_x, world_z], doc.rooms()));
    }

    /// Commits the final preview as a single history entry.
    pub fn commit(&mut self, state: &mut PlannerState) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        let committed = match self.preview.take() {
            Some(position) => {
                state.update_room(
                    self.room_id,
                    RoomUpdate {
                        position: Some(position),
                        ..RoomUpdate::default()
                    },
                );
                true
            }
            None => false,
        };
        self.phase = if committed {
            DragPhase::Committed
        } else {
            debug!(room = %self.room_id, "room drag cancelled");
            DragPhase::Cancelled
        };
        committed
    }

    /// Abandons the drag without mutating anything.
    pub fn cancel(&mut self) {
        if self.phase == DragPhase::Dragging {
            self.phase = DragPhase::Cancelled;
            self.preview = None;
        }
    }
}
