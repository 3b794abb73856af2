/// Drag-handle geometry for interactive photo placement
///
/// All math happens in slot-local coordinates: the origin is the slot's
/// top-left corner and the unscaled photo exactly covers the slot. A photo
/// is positioned by a uniform `scale` plus an `offset` translation, and the
/// user manipulates both through nine handles: eight on the boundary of the
/// scaled, offset photo rectangle (four corners, four edge midpoints) and
/// one move handle at the slot center.
///
/// Every drag recomputes its value from a snapshot captured at gesture
/// start plus the current cursor, never by accumulating per-event deltas,
/// so a long gesture cannot drift.

use iced::{Point, Rectangle, Size, Vector};

use crate::constants::{HANDLE_HIT_RADIUS, MAX_SCALE, MIN_SCALE, SCALE_SENSITIVITY};

/// Position of a scale handle on the photo rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePosition {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandlePosition {
    /// All eight handles, in drawing order
    pub const ALL: [HandlePosition; 8] = [
        HandlePosition::TopLeft,
        HandlePosition::Top,
        HandlePosition::TopRight,
        HandlePosition::Right,
        HandlePosition::BottomRight,
        HandlePosition::Bottom,
        HandlePosition::BottomLeft,
        HandlePosition::Left,
    ];
}

/// Per-slot drag state machine.
///
/// `Idle` outside a gesture; a press on a handle captures the start value
/// and start cursor and enters the matching dragging variant; release
/// returns to `Idle` and drops the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging one of the eight scale handles
    Scaling {
        handle: HandlePosition,
        start_scale: f32,
        start_cursor: Point,
    },
    /// Dragging the center move handle
    Panning {
        start_offset: Vector,
        start_cursor: Point,
    },
}

/// What a press on a handle hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleHit {
    Move,
    Scale(HandlePosition),
}

/// The photo rectangle after applying `scale` and `offset`, in slot-local
/// coordinates. Scaling happens around the slot center, so the top-left
/// corner sits at `(offset.x - (scaled_w - w) / 2, offset.y - (scaled_h - h) / 2)`.
pub fn scaled_rect(scale: f32, offset: Vector, slot: Size) -> Rectangle {
    let scaled_w = slot.width * scale;
    let scaled_h = slot.height * scale;

    Rectangle {
        x: offset.x - (scaled_w - slot.width) / 2.0,
        y: offset.y - (scaled_h - slot.height) / 2.0,
        width: scaled_w,
        height: scaled_h,
    }
}

/// Anchor point of a scale handle on the boundary of the scaled, offset
/// photo rectangle
pub fn handle_anchor(handle: HandlePosition, scale: f32, offset: Vector, slot: Size) -> Point {
    let rect = scaled_rect(scale, offset, slot);
    let center_x = rect.x + rect.width / 2.0;
    let center_y = rect.y + rect.height / 2.0;

    match handle {
        HandlePosition::TopLeft => Point::new(rect.x, rect.y),
        HandlePosition::Top => Point::new(center_x, rect.y),
        HandlePosition::TopRight => Point::new(rect.x + rect.width, rect.y),
        HandlePosition::Right => Point::new(rect.x + rect.width, center_y),
        HandlePosition::BottomRight => Point::new(rect.x + rect.width, rect.y + rect.height),
        HandlePosition::Bottom => Point::new(center_x, rect.y + rect.height),
        HandlePosition::BottomLeft => Point::new(rect.x, rect.y + rect.height),
        HandlePosition::Left => Point::new(rect.x, center_y),
    }
}

/// Anchor point of the move handle: always the slot center, regardless of
/// the photo's current transform
pub fn move_anchor(slot: Size) -> Point {
    Point::new(slot.width / 2.0, slot.height / 2.0)
}

/// Scale produced by dragging any scale handle.
///
/// The new scale follows the change in radial distance from the slot center:
/// dragging away from the center zooms in, toward it zooms out, at
/// `SCALE_SENSITIVITY` points of travel per unit of scale. Direction is
/// deliberately ignored so corners and edges behave identically as a
/// symmetric zoom. The result is clamped to `[MIN_SCALE, MAX_SCALE]`; a
/// gesture starting exactly on the center has no radial reference yet and
/// leaves the scale unchanged.
pub fn scale_for_drag(start_scale: f32, start_cursor: Point, cursor: Point, slot: Size) -> f32 {
    let center = move_anchor(slot);
    let start_distance = start_cursor.distance(center);

    if start_distance == 0.0 {
        return start_scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    let current_distance = cursor.distance(center);
    let scale_delta = (current_distance - start_distance) / SCALE_SENSITIVITY;

    (start_scale + scale_delta).clamp(MIN_SCALE, MAX_SCALE)
}

/// Offset produced by dragging the move handle: the offset captured at
/// gesture start plus the cursor translation, exactly. No clamping —
/// panning beyond the slot is how the user reaches the overflow of an
/// oversized photo.
pub fn offset_for_drag(start_offset: Vector, start_cursor: Point, cursor: Point) -> Vector {
    start_offset + (cursor - start_cursor)
}

/// Hit-test the cursor against the nine handles of a selected photo.
/// The move handle wins ties since it is drawn on top.
pub fn hit_test_handles(
    cursor: Point,
    scale: f32,
    offset: Vector,
    slot: Size,
) -> Option<HandleHit> {
    if cursor.distance(move_anchor(slot)) <= HANDLE_HIT_RADIUS {
        return Some(HandleHit::Move);
    }

    for handle in HandlePosition::ALL {
        if cursor.distance(handle_anchor(handle, scale, offset, slot)) <= HANDLE_HIT_RADIUS {
            return Some(HandleHit::Scale(handle));
        }
    }

    None
}

/// Whether the cursor falls inside the slot rectangle (used for selection
/// taps on unselected photos)
pub fn slot_contains(cursor: Point, slot: Size) -> bool {
    Rectangle::with_size(slot).contains(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT: Size = Size::new(288.0, 208.8);

    #[test]
    fn test_identity_rect_covers_slot() {
        let rect = scaled_rect(1.0, Vector::new(0.0, 0.0), SLOT);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, SLOT.width);
        assert_eq!(rect.height, SLOT.height);
    }

    #[test]
    fn test_scaling_is_centered_on_slot() {
        let rect = scaled_rect(2.0, Vector::new(0.0, 0.0), SLOT);
        assert_eq!(rect.x, -SLOT.width / 2.0);
        assert_eq!(rect.y, -SLOT.height / 2.0);
        assert_eq!(rect.width, SLOT.width * 2.0);
        assert_eq!(rect.height, SLOT.height * 2.0);
    }

    #[test]
    fn test_anchors_at_identity() {
        let offset = Vector::new(0.0, 0.0);

        let cases = [
            (HandlePosition::TopLeft, Point::new(0.0, 0.0)),
            (HandlePosition::Top, Point::new(SLOT.width / 2.0, 0.0)),
            (HandlePosition::TopRight, Point::new(SLOT.width, 0.0)),
            (HandlePosition::Right, Point::new(SLOT.width, SLOT.height / 2.0)),
            (HandlePosition::BottomRight, Point::new(SLOT.width, SLOT.height)),
            (HandlePosition::Bottom, Point::new(SLOT.width / 2.0, SLOT.height)),
            (HandlePosition::BottomLeft, Point::new(0.0, SLOT.height)),
            (HandlePosition::Left, Point::new(0.0, SLOT.height / 2.0)),
        ];

        for (handle, expected) in cases {
            let anchor = handle_anchor(handle, 1.0, offset, SLOT);
            assert!(
                anchor.distance(expected) < 1e-4,
                "{handle:?}: got {anchor:?}, expected {expected:?}"
            );
        }
    }

    #[test]
    fn test_anchors_follow_offset() {
        let offset = Vector::new(30.0, -12.0);
        let anchor = handle_anchor(HandlePosition::TopLeft, 1.0, offset, SLOT);
        assert_eq!(anchor, Point::new(30.0, -12.0));
    }

    #[test]
    fn test_scale_stays_clamped_under_extreme_drags() {
        let start = Point::new(SLOT.width, SLOT.height);

        // Arbitrarily wild pointer travel never escapes the clamp range
        let extremes = [
            Point::new(1e6, 1e6),
            Point::new(-1e6, -1e6),
            Point::new(SLOT.width / 2.0, SLOT.height / 2.0),
            Point::new(0.0, 1e4),
        ];

        for start_scale in [0.5, 1.0, 2.99] {
            for cursor in extremes {
                let scale = scale_for_drag(start_scale, start, cursor, SLOT);
                assert!(
                    (MIN_SCALE..=MAX_SCALE).contains(&scale),
                    "scale {scale} out of range for cursor {cursor:?}"
                );
            }
        }
    }

    #[test]
    fn test_outward_drag_zooms_in() {
        let center = move_anchor(SLOT);
        let start = Point::new(center.x + 50.0, center.y);
        let cursor = Point::new(center.x + 150.0, center.y);

        // 100 points of extra radial distance = one unit of scale
        let scale = scale_for_drag(1.0, start, cursor, SLOT);
        assert!((scale - 2.0).abs() < 1e-4);

        // The same travel toward the center zooms out, stopped by the clamp floor
        let inward = scale_for_drag(1.0, cursor, start, SLOT);
        assert_eq!(inward, MIN_SCALE);
    }

    #[test]
    fn test_drag_from_center_leaves_scale_unchanged() {
        let center = move_anchor(SLOT);
        let scale = scale_for_drag(1.7, center, Point::new(1e5, 1e5), SLOT);
        assert_eq!(scale, 1.7);
    }

    #[test]
    fn test_move_handle_translation_is_exact() {
        let start_offset = Vector::new(12.5, -3.25);
        let start_cursor = Point::new(100.0, 100.0);
        let cursor = Point::new(163.0, 41.5);

        let offset = offset_for_drag(start_offset, start_cursor, cursor);
        assert_eq!(offset.x, 12.5 + 63.0);
        assert_eq!(offset.y, -3.25 + -58.5);
    }

    #[test]
    fn test_snapshot_replay_does_not_drift() {
        // Recomputing from the same snapshot with the cursor back at its
        // start position restores the start value exactly
        let start_offset = Vector::new(5.0, 5.0);
        let start_cursor = Point::new(40.0, 40.0);

        for step in [Point::new(90.0, 10.0), Point::new(-200.0, 300.0)] {
            let _ = offset_for_drag(start_offset, start_cursor, step);
        }

        let offset = offset_for_drag(start_offset, start_cursor, start_cursor);
        assert_eq!(offset, start_offset);
    }

    #[test]
    fn test_hit_test_prefers_move_handle() {
        let center = move_anchor(SLOT);
        assert_eq!(
            hit_test_handles(center, 1.0, Vector::new(0.0, 0.0), SLOT),
            Some(HandleHit::Move)
        );
    }

    #[test]
    fn test_hit_test_finds_scale_handles() {
        let offset = Vector::new(0.0, 0.0);
        for handle in HandlePosition::ALL {
            let anchor = handle_anchor(handle, 1.4, offset, SLOT);
            assert_eq!(
                hit_test_handles(anchor, 1.4, offset, SLOT),
                Some(HandleHit::Scale(handle)),
                "{handle:?}"
            );
        }
    }

    #[test]
    fn test_hit_test_misses_empty_space() {
        let cursor = Point::new(60.0, 60.0);
        assert_eq!(hit_test_handles(cursor, 1.0, Vector::new(0.0, 0.0), SLOT), None);
    }

    #[test]
    fn test_slot_containment() {
        assert!(slot_contains(Point::new(1.0, 1.0), SLOT));
        assert!(!slot_contains(Point::new(-1.0, 10.0), SLOT));
        assert!(!slot_contains(Point::new(10.0, SLOT.height + 1.0), SLOT));
    }
}
