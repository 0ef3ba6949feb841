//! Multi-policy snap resolution for interactive dragging.
//!
//! A raw candidate position runs through a fixed pipeline:
//!
//! 1. grid quantization (optional),
//! 2. magnetic pull onto the room boundary (optional),
//! 3. hard clamp of the footprint into the room interior (always; this is
//!    a correctness floor, not a snap, and emits no guideline),
//! 4. room-to-room edge magnetism when a room itself is dragged, or
//!    item-to-item alignment guides when furniture is dragged.
//!
//! Within each stage the first candidate that strictly improves on the
//! running-best distance wins; equal distances keep the earlier one.
//! Candidates are examined in document insertion order, which makes the
//! whole resolution deterministic.

use smallvec::SmallVec;

use roomplan_core::constants::{
    GRID_SIZE, GUIDE_OVERSHOOT, GUIDE_THRESHOLD, ROOM_SNAP_DISTANCE, WALL_SNAP_DISTANCE,
};

use crate::bounds::{footprint, footprint_at, rotated_extents};
use crate::model::{FurnitureInstance, Room};

/// Floor-plane axis a guideline runs perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Visual guideline descriptor for the rendering collaborator, in world
/// coordinates. `position` is the aligned coordinate on `axis`; `start`
/// and `end` span the two items' extents on the perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapGuideline {
    pub axis: Axis,
    pub position: f64,
    pub start: f64,
    pub end: f64,
}

/// Which optional snap stages are active for a resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct SnapConfig {
    pub grid: bool,
    pub walls: bool,
    pub grid_size: f64,
    pub wall_snap_distance: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid: true,
            walls: true,
            grid_size: GRID_SIZE,
            wall_snap_distance: WALL_SNAP_DISTANCE,
        }
    }
}

/// Resolved furniture placement plus the guidelines that produced it.
#[derive(Debug, Clone, Default)]
pub struct FurnitureSnap {
    /// Corrected room-local position.
    pub position: [f64; 3],
    pub guidelines: SmallVec<[SnapGuideline; 4]>,
}

/// Alignment candidates found against room-mates on both axes.
#[derive(Debug, Clone, Default)]
pub struct GuideResult {
    pub guidelines: SmallVec<[SnapGuideline; 4]>,
    /// Room-local x that aligns the drag, when one is within threshold.
    pub snapped_x: Option<f64>,
    /// Room-local z that aligns the drag, when one is within threshold.
    pub snapped_z: Option<f64>,
}

/// Quantizes a coordinate onto the grid.
pub fn snap_to_grid(v: f64, grid: f64) -> f64 {
    (v / grid).round() * grid
}

/// Pulls `center` so the item edge lands exactly on the room boundary
/// when the gap is positive and under the threshold.
fn magnet_axis(center: f64, half_item: f64, half_room: f64, threshold: f64) -> f64 {
    let near_gap = (center - half_item) + half_room;
    if near_gap > 0.0 && near_gap < threshold {
        return half_item - half_room;
    }
    let far_gap = half_room - (center + half_item);
    if far_gap > 0.0 && far_gap < threshold {
        return half_room - half_item;
    }
    center
}

/// Clamps `center` so the full item extent stays inside the room. Items
/// wider than the room collapse to the room center.
fn clamp_axis(center: f64, half_item: f64, half_room: f64) -> f64 {
    let slack = half_room - half_item;
    if slack <= 0.0 {
        0.0
    } else {
        center.clamp(-slack, slack)
    }
}

/// Hard-clamps a room-local candidate so the item's rotation-aware
/// footprint stays within the room interior. Idempotent for in-bounds
/// positions.
pub fn clamp_to_room(item: &FurnitureInstance, room: &Room, candidate: [f64; 3]) -> [f64; 3] {
    let (w, d) = rotated_extents(item);
    [
        clamp_axis(candidate[0], w / 2.0, room.dimensions.width / 2.0),
        candidate[1],
        clamp_axis(candidate[2], d / 2.0, room.dimensions.depth / 2.0),
    ]
}

/// Resolves a furniture drag candidate (room-local) through the full
/// pipeline: grid, wall magnetism, room clamp, then alignment guides.
pub fn resolve_furniture_snap(
    item: &FurnitureInstance,
    candidate: [f64; 3],
    room: &Room,
    room_mates: &[FurnitureInstance],
    config: &SnapConfig,
) -> FurnitureSnap {
    let (w, d) = rotated_extents(item);
    let (half_w, half_d) = (w / 2.0, d / 2.0);
    let half_room_w = room.dimensions.width / 2.0;
    let half_room_d = room.dimensions.depth / 2.0;

    let mut x = candidate[0];
    let mut z = candidate[2];

    if config.grid {
        x = snap_to_grid(x, config.grid_size);
        z = snap_to_grid(z, config.grid_size);
    }
    if config.walls {
        x = magnet_axis(x, half_w, half_room_w, config.wall_snap_distance);
        z = magnet_axis(z, half_d, half_room_d, config.wall_snap_distance);
    }
    x = clamp_axis(x, half_w, half_room_w);
    z = clamp_axis(z, half_d, half_room_d);

    let guides = compute_snap_guides(item, [x, candidate[1], z], room_mates, room.position);
    if let Some(sx) = guides.snapped_x {
        x = sx;
    }
    if let Some(sz) = guides.snapped_z {
        z = sz;
    }

    FurnitureSnap {
        position: [x, candidate[1], z],
        guidelines: guides.guidelines,
    }
}

/// Evaluates center-to-center and the four edge-pair alignments against
/// every room-mate, keeping the single closest candidate per axis within
/// [`GUIDE_THRESHOLD`]. Guidelines are emitted in world coordinates using
/// the owning room's offset.
pub fn compute_snap_guides(
    dragging: &FurnitureInstance,
    candidate: [f64; 3],
    others: &[FurnitureInstance],
    room_offset: [f64; 2],
) -> GuideResult {
    let drag_aabb = footprint_at(dragging, candidate[0], candidate[2]);
    let drag_center_x = candidate[0];
    let drag_center_z = candidate[2];

    let mut result = GuideResult::default();
    let mut best_dist_x = GUIDE_THRESHOLD;
    let mut best_dist_z = GUIDE_THRESHOLD;

    for other in others {
        if other.id == dragging.id || other.room_id != dragging.room_id {
            continue;
        }
        let other_aabb = footprint(other);
        let other_center_x = other.position[0];
        let other_center_z = other.position[2];

        // Center-to-center alignment on each axis.
        let dx_center = (drag_center_x - other_center_x).abs();
        if dx_center < best_dist_x {
            best_dist_x = dx_center;
            result.snapped_x = Some(other_center_x);
            result.guidelines.push(SnapGuideline {
                axis: Axis::X,
                position: other_center_x + room_offset[0],
                start: drag_center_z.min(other_center_z) + room_offset[1],
                end: drag_center_z.max(other_center_z) + room_offset[1],
            });
        }
        let dz_center = (drag_center_z - other_center_z).abs();
        if dz_center < best_dist_z {
            best_dist_z = dz_center;
            result.snapped_z = Some(other_center_z);
            result.guidelines.push(SnapGuideline {
                axis: Axis::Z,
                position: other_center_z + room_offset[1],
                start: drag_center_x.min(other_center_x) + room_offset[0],
                end: drag_center_x.max(other_center_x) + room_offset[0],
            });
        }

        // Edge pairs on x: near-near, far-far, near-far, far-near.
        let edges_x = [
            (drag_aabb.min_x, other_aabb.min_x),
            (drag_aabb.max_x, other_aabb.max_x),
            (drag_aabb.min_x, other_aabb.max_x),
            (drag_aabb.max_x, other_aabb.min_x),
        ];
        for (drag_edge, other_edge) in edges_x {
            let dist = (drag_edge - other_edge).abs();
            if dist < best_dist_x {
                best_dist_x = dist;
                result.snapped_x = Some(drag_center_x + (other_edge - drag_edge));
                result.guidelines.push(SnapGuideline {
                    axis: Axis::X,
                    position: other_edge + room_offset[0],
                    start: drag_center_z.min(other_center_z) + room_offset[1] - GUIDE_OVERSHOOT,
                    end: drag_center_z.max(other_center_z) + room_offset[1] + GUIDE_OVERSHOOT,
                });
            }
        }

        // Edge pairs on z.
        let edges_z = [
            (drag_aabb.min_z, other_aabb.min_z),
            (drag_aabb.max_z, other_aabb.max_z),
            (drag_aabb.min_z, other_aabb.max_z),
            (drag_aabb.max_z, other_aabb.min_z),
        ];
        for (drag_edge, other_edge) in edges_z {
            let dist = (drag_edge - other_edge).abs();
            if dist < best_dist_z {
                best_dist_z = dist;
                result.snapped_z = Some(drag_center_z + (other_edge - drag_edge));
                result.guidelines.push(SnapGuideline {
                    axis: Axis::Z,
                    position: other_edge + room_offset[1],
                    start: drag_center_x.min(other_center_x) + room_offset[0] - GUIDE_OVERSHOOT,
                    end: drag_center_x.max(other_center_x) + room_offset[0] + GUIDE_OVERSHOOT,
                });
            }
        }
    }

    result
}

/// Pulls one axis of a dragged room so its edge meets the nearest
/// opposing edge of another room, when within `threshold`.
fn room_magnet_axis(
    center: f64,
    half_extent: f64,
    others: impl Iterator<Item = (f64, f64)>,
    threshold: f64,
) -> f64 {
    let my_min = center - half_extent;
    let my_max = center + half_extent;
    let mut best_dist = threshold;
    let mut snapped = center;

    for (other_min, other_max) in others {
        // My far edge against their near edge.
        let dist = (my_max - other_min).abs();
        if dist < best_dist {
            best_dist = dist;
            snapped = other_min - half_extent;
        }
        // My near edge against their far edge.
        let dist = (my_min - other_max).abs();
        if dist < best_dist {
            best_dist = dist;
            snapped = other_max + half_extent;
        }
    }
    snapped
}

/// Resolves a room drag candidate (world) against all other rooms. Each
/// axis snaps independently to the minimum-distance opposing edge within
/// [`ROOM_SNAP_DISTANCE`], leaving no gap and no overlap.
pub fn resolve_room_snap(room: &Room, candidate: [f64; 2], all_rooms: &[Room]) -> [f64; 2] {
    let half_w = room.dimensions.width / 2.0;
    let half_d = room.dimensions.depth / 2.0;

    let x = room_magnet_axis(
        candidate[0],
        half_w,
        all_rooms.iter().filter(|r| r.id != room.id).map(|r| {
            let h = r.dimensions.width / 2.0;
            (r.position[0] - h, r.position[0] + h)
        }),
        ROOM_SNAP_DISTANCE,
    );
    let z = room_magnet_axis(
        candidate[1],
        half_d,
        all_rooms.iter().filter(|r| r.id != room.id).map(|r| {
            let h = r.dimensions.depth / 2.0;
            (r.position[1] - h, r.position[1] + h)
        }),
        ROOM_SNAP_DISTANCE,
    );
    [x, z]
}
