//! Shared constants for layout, snapping, and history.
//!
//! All distances are in meters, all angles in radians.

/// Grid quantization step applied while dragging furniture.
pub const GRID_SIZE: f64 = 0.1;

/// Distance within which a furniture edge is pulled onto a room boundary.
pub const WALL_SNAP_DISTANCE: f64 = 0.15;

/// Distance within which the edges of two rooms are pulled together.
pub const ROOM_SNAP_DISTANCE: f64 = 0.5;

/// Distance within which item-to-item alignment guides engage.
pub const GUIDE_THRESHOLD: f64 = 0.15;

/// Overshoot added past item centers when emitting edge guidelines.
pub const GUIDE_OVERSHOOT: f64 = 0.5;

/// Half-width of the yaw band classified as a quarter turn.
pub const ROTATION_EPSILON: f64 = 0.01;

/// Maximum number of entries kept on each history stack.
pub const MAX_HISTORY: usize = 50;

/// Smallest accepted extent. Degenerate dimensions clamp to this bound.
pub const MIN_DIMENSION: f64 = 0.01;

/// Default room width.
pub const DEFAULT_ROOM_WIDTH: f64 = 5.0;

/// Default room depth.
pub const DEFAULT_ROOM_DEPTH: f64 = 4.0;

/// Default room height.
pub const DEFAULT_ROOM_HEIGHT: f64 = 2.8;
