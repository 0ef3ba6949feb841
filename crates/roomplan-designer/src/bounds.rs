//! Rotation-aware footprints for furniture and rooms.
//!
//! Furniture yaw is collapsed to a coarse 0°/90° class before the
//! footprint is computed: within [`ROTATION_EPSILON`] of a quarter turn
//! the width and depth swap, anything else keeps the unrotated extents.
//! Arbitrary angles therefore collide using the nearest axis-aligned
//! class. This is a deliberate, documented approximation; oriented
//! bounding boxes are out of scope.

use std::f64::consts::{FRAC_PI_2, PI};

use roomplan_core::constants::ROTATION_EPSILON;

use crate::model::{FurnitureInstance, Room};

/// Axis-aligned bounding box on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Aabb {
    pub fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Extent along the x axis.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along the z axis.
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }
}

/// Footprint extents (along x, along z) after collapsing the item's yaw
/// to the nearest quarter-turn class.
pub fn rotated_extents(item: &FurnitureInstance) -> (f64, f64) {
    let yaw = item.yaw().rem_euclid(PI);
    if (yaw - FRAC_PI_2).abs() < ROTATION_EPSILON {
        (item.dimensions.depth, item.dimensions.width)
    } else {
        (item.dimensions.width, item.dimensions.depth)
    }
}

/// Footprint of an item at its stored position.
pub fn footprint(item: &FurnitureInstance) -> Aabb {
    footprint_at(item, item.position[0], item.position[2])
}

/// Footprint the item would occupy if its center were at `(x, z)`.
pub fn footprint_at(item: &FurnitureInstance, x: f64, z: f64) -> Aabb {
    let (w, d) = rotated_extents(item);
    Aabb::new(x - w / 2.0, x + w / 2.0, z - d / 2.0, z + d / 2.0)
}

/// Centered rectangle of the room interior, in room-local coordinates.
pub fn room_footprint(room: &Room) -> Aabb {
    let hw = room.dimensions.width / 2.0;
    let hd = room.dimensions.depth / 2.0;
    Aabb::new(-hw, hw, -hd, hd)
}
