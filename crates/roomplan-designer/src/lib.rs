//! # RoomPlan Designer
//!
//! Spatial layout-and-editing engine for the RoomPlan interior planner.
//! It owns the `{rooms, furniture, selection, history}` aggregate and
//! provides the geometric machinery that makes interactive placement feel
//! correct: coordinate conversion, rotation-aware collision, multi-policy
//! snapping with alignment guides, wall segmentation around openings, and
//! a bounded, exactly-reversible undo/redo history.
//!
//! ## Core Components
//!
//! - **Model**: rooms, wall elements (doors/windows), furniture instances
//! - **Bounds/Collision**: rotation-aware AABB footprints, same-room
//!   overlap tests
//! - **Snapping**: grid quantization, wall magnetism, room clamp,
//!   room-to-room magnetism, and item alignment guides
//! - **Walls**: segmentation of a wall into solid boxes around openings
//! - **Commands/History**: forward+inverse patches, bounded undo/redo,
//!   selection reconciliation
//! - **Drag**: explicit interaction state machines driven by the host
//! - **Serialization**: versioned JSON document boundary
//!
//! ## Architecture
//!
//! ```text
//! PlannerState (document + selection + history)
//!   ├── Document (rooms, furniture; insertion-ordered)
//!   ├── PlannerCommand (reversible transitions)
//!   └── Selection (pruned against existing entities)
//!
//! Per-frame queries (pure)
//!   ├── bounds / collision
//!   ├── snapping (+ guidelines)
//!   └── walls
//!
//! DragSession (Idle → Dragging → Committed | Cancelled)
//! ```
//!
//! Rendering, camera control, catalog data, and persistence mechanics are
//! host collaborators; the engine performs no I/O of its own apart from
//! the explicit file helpers in [`serialization`].

pub mod bounds;
pub mod collision;
pub mod commands;
pub mod coords;
pub mod document;
pub mod drag;
pub mod model;
pub mod planner_state;
pub mod selection;
pub mod serialization;
pub mod snapping;
pub mod walls;

pub use bounds::{footprint, footprint_at, room_footprint, rotated_extents, Aabb};
pub use collision::{aabb_overlap, collides};
pub use commands::PlannerCommand;
pub use document::Document;
pub use drag::{DragPhase, FurnitureDragSession, PlacementPreview, RoomDragSession};
pub use model::{Dimensions, FurnitureInstance, Room, Wall, WallElement, WallElementKind};
pub use planner_state::{
    FurnitureUpdate, PlannerState, RoomUpdate, WallElementUpdate,
};
pub use selection::Selection;
pub use serialization::{PlanDocument, PlanFile, PlanMetadata, DOCUMENT_VERSION};
pub use snapping::{
    clamp_to_room, compute_snap_guides, resolve_furniture_snap, resolve_room_snap, snap_to_grid,
    Axis, FurnitureSnap, GuideResult, SnapConfig, SnapGuideline,
};
pub use walls::{room_wall_segments, wall_segments, WallSegment};
