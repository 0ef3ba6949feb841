//! Data model for rooms, wall elements, and furniture instances.
//!
//! All positions are in meters. Rooms live on the world plan; furniture
//! positions are stored in the owning room's local frame (origin at the
//! room's center).

use roomplan_core::constants::{
    DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, MIN_DIMENSION,
};
use roomplan_core::EntityId;
use serde::{Deserialize, Serialize};

/// Physical extents of a room or furniture item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    /// Creates dimensions, clamping each extent to the minimum bound.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
        .sanitized()
    }

    /// Clamps zero or negative extents to the smallest accepted value so
    /// degenerate geometry never reaches the footprint math.
    pub fn sanitized(self) -> Self {
        Self {
            width: self.width.max(MIN_DIMENSION),
            depth: self.depth.max(MIN_DIMENSION),
            height: self.height.max(MIN_DIMENSION),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            depth: DEFAULT_ROOM_DEPTH,
            height: DEFAULT_ROOM_HEIGHT,
        }
    }
}

/// Which wall of a room an opening sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

impl Wall {
    /// Length of this wall for the given room dimensions. North/south
    /// walls run along the width axis, east/west along the depth axis.
    pub fn length(self, dims: &Dimensions) -> f64 {
        match self {
            Wall::North | Wall::South => dims.width,
            Wall::East | Wall::West => dims.depth,
        }
    }
}

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallElementKind {
    Door,
    Window,
}

/// A door or window cut into one wall of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallElement {
    pub id: EntityId,
    pub kind: WallElementKind,
    pub wall: Wall,
    /// Signed distance along the wall's own axis from the wall's center.
    pub offset: f64,
    pub width: f64,
    pub height: f64,
    /// Height of the opening's bottom above the floor. Zero for doors;
    /// a positive value gives windows a sill.
    pub elevation: f64,
}

impl WallElement {
    /// Creates an opening, clamping degenerate extents. Doors always sit
    /// on the floor.
    pub fn new(
        id: EntityId,
        kind: WallElementKind,
        wall: Wall,
        offset: f64,
        width: f64,
        height: f64,
        elevation: f64,
    ) -> Self {
        Self {
            id,
            kind,
            wall,
            offset,
            width: width.max(MIN_DIMENSION),
            height: height.max(MIN_DIMENSION),
            elevation: match kind {
                WallElementKind::Door => 0.0,
                WallElementKind::Window => elevation.max(0.0),
            },
        }
    }
}

/// A rectangular room placed on the world plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: EntityId,
    pub name: String,
    pub dimensions: Dimensions,
    /// World-space (x, z) offset of the room's center.
    pub position: [f64; 2],
    /// Locked rooms refuse dragging.
    pub locked: bool,
    pub wall_elements: Vec<WallElement>,
}

impl Room {
    /// Creates an empty, unlocked room.
    pub fn new(id: EntityId, name: impl Into<String>, dimensions: Dimensions, position: [f64; 2]) -> Self {
        Self {
            id,
            name: name.into(),
            dimensions: dimensions.sanitized(),
            position,
            locked: false,
            wall_elements: Vec::new(),
        }
    }

    /// Looks up a wall element by id.
    pub fn wall_element(&self, id: EntityId) -> Option<&WallElement> {
        self.wall_elements.iter().find(|e| e.id == id)
    }

    /// Openings on one wall, in insertion order.
    pub fn elements_on_wall(&self, wall: Wall) -> impl Iterator<Item = &WallElement> {
        self.wall_elements.iter().filter(move |e| e.wall == wall)
    }
}

/// A catalog item placed inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureInstance {
    pub id: EntityId,
    /// Opaque reference into the host's furniture catalog. The engine
    /// never interprets it.
    pub catalog_id: String,
    /// Owning room.
    pub room_id: EntityId,
    pub name: String,
    /// Room-local position. The y component is vertical and stays 0 for
    /// floor-standing items.
    pub position: [f64; 3],
    /// Euler rotation in radians. Only the y component is edited by the
    /// planner, in quarter-turn steps by convention.
    pub rotation: [f64; 3],
    pub dimensions: Dimensions,
    /// Display color as a hex string, e.g. `#8a9b6e`.
    pub color: String,
    /// Locked items refuse dragging.
    pub locked: bool,
}

impl FurnitureInstance {
    /// Creates an item at the room's center, unrotated.
    pub fn new(
        id: EntityId,
        catalog_id: impl Into<String>,
        room_id: EntityId,
        name: impl Into<String>,
        dimensions: Dimensions,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            catalog_id: catalog_id.into(),
            room_id,
            name: name.into(),
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            dimensions: dimensions.sanitized(),
            color: color.into(),
            locked: false,
        }
    }

    /// Yaw (rotation about the vertical axis).
    pub fn yaw(&self) -> f64 {
        self.rotation[1]
    }
}
