//! Footprint overlap tests between furniture items.
//!
//! Collision is a linear scan restricted to items sharing the candidate's
//! room; items in different rooms never collide. At interactive scene
//! sizes this stays well inside a frame budget, and any future index must
//! preserve the same-room contract.

use crate::bounds::{footprint, footprint_at, Aabb};
use crate::model::FurnitureInstance;

/// Strict separating-axis overlap test. Touching edges do not overlap.
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.min_x < b.max_x && a.max_x > b.min_x && a.min_z < b.max_z && a.max_z > b.min_z
}

/// Tests whether `item` placed with its center at `candidate` would
/// overlap any other item in the same room.
pub fn collides(item: &FurnitureInstance, candidate: [f64; 3], all: &[FurnitureInstance]) -> bool {
    let test = footprint_at(item, candidate[0], candidate[2]);
    all.iter().any(|other| {
        other.id != item.id
            && other.room_id == item.room_id
            && aabb_overlap(&test, &footprint(other))
    })
}
