//! World ↔ room-local coordinate conversion.
//!
//! A room's local frame has its origin at the room's center on the floor
//! plane. Furniture positions are stored in this frame; pointer input
//! arrives in world coordinates and crosses through here on every drag
//! update. Both directions are pure and total.

use crate::model::Room;

impl Room {
    /// Converts a world-plane point into this room's local frame.
    pub fn to_local(&self, world_x: f64, world_z: f64) -> (f64, f64) {
        (world_x - self.position[0], world_z - self.position[1])
    }

    /// Converts a room-local point back into world coordinates.
    pub fn to_world(&self, local_x: f64, local_z: f64) -> (f64, f64) {
        (local_x + self.position[0], local_z + self.position[1])
    }
}
