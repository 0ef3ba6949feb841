//! Wall segmentation around door and window openings.
//!
//! A wall with openings is rendered as a set of solid axis-aligned boxes:
//! full-height pieces between openings, a lintel piece above each opening
//! that stops short of the wall top, and a sill piece below elevated
//! openings (windows). Overlapping openings on the same wall are not
//! resolved here; the result for them is unspecified.

use smallvec::SmallVec;

use crate::model::{Room, Wall, WallElement};

/// One solid box of a wall after subtracting opening cutouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Center offset along the wall axis, measured from the wall's center.
    pub offset: f64,
    pub width: f64,
    /// Vertical center of the segment above the floor.
    pub y_center: f64,
    pub height: f64,
}

impl WallSegment {
    fn full_height(left: f64, right: f64, wall_height: f64) -> Self {
        Self {
            offset: (left + right) / 2.0,
            width: right - left,
            y_center: wall_height / 2.0,
            height: wall_height,
        }
    }
}

/// Computes the solid segments tiling a wall of `length` × `height`
/// around `openings`. With no openings the whole wall is one segment.
pub fn wall_segments(
    length: f64,
    height: f64,
    openings: &[&WallElement],
) -> SmallVec<[WallSegment; 4]> {
    let mut segments = SmallVec::new();

    let mut sorted: Vec<&WallElement> = openings.to_vec();
    sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    let mut cursor = -length / 2.0;
    for opening in sorted {
        let left = opening.offset - opening.width / 2.0;
        let right = opening.offset + opening.width / 2.0;

        if left > cursor {
            segments.push(WallSegment::full_height(cursor, left, height));
        }

        let top = opening.elevation + opening.height;
        if top < height {
            segments.push(WallSegment {
                offset: opening.offset,
                width: opening.width,
                y_center: (top + height) / 2.0,
                height: height - top,
            });
        }
        if opening.elevation > 0.0 {
            segments.push(WallSegment {
                offset: opening.offset,
                width: opening.width,
                y_center: opening.elevation / 2.0,
                height: opening.elevation,
            });
        }

        cursor = cursor.max(right);
    }

    if cursor < length / 2.0 {
        segments.push(WallSegment::full_height(cursor, length / 2.0, height));
    }

    segments
}

/// Segments for one wall of a room, using the openings placed on it.
pub fn room_wall_segments(room: &Room, wall: Wall) -> SmallVec<[WallSegment; 4]> {
    let openings: Vec<&WallElement> = room.elements_on_wall(wall).collect();
    wall_segments(
        wall.length(&room.dimensions),
        room.dimensions.height,
        &openings,
    )
}
