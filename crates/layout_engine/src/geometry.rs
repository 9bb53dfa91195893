//! Geometry primitives and snapping
//!
//! Snapping here is a nearest-neighbor heuristic, not a layout solver:
//! each axis is resolved on its own, and when several siblings qualify the
//! last one in collection order wins.

use serde::{Deserialize, Serialize};
use wall_model::Tile;

/// Maximum distance at which a neighbor edge captures a moving tile
pub const NEIGHBOR_SNAP_TOLERANCE: f64 = 5.0;

/// A point in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<&Tile> for Rect {
    fn from(tile: &Tile) -> Self {
        Self::new(tile.x, tile.y, tile.width, tile.height)
    }
}

/// Round `value` to the nearest multiple of `spacing`.
///
/// Halves round toward positive infinity. A non-positive or non-finite
/// spacing leaves the value untouched.
pub fn snap_to_grid(value: f64, spacing: f64) -> f64 {
    if !(spacing.is_finite() && spacing > 0.0) {
        return value;
    }
    (value / spacing + 0.5).floor() * spacing
}

/// Snap both coordinates of `point` to the grid independently
pub fn snap_point_to_grid(point: Point, spacing: f64) -> Point {
    Point::new(snap_to_grid(point.x, spacing), snap_to_grid(point.y, spacing))
}

/// Align a moving rectangle with the edges of stationary siblings.
///
/// `candidate` is the proposed top-left of `moving`. For every sibling the
/// moving rectangle may sit `margin` to its right, `margin` to its left,
/// `margin` below it, or `margin` above it. A case applies when the raw
/// distance is under [`NEIGHBOR_SNAP_TOLERANCE`]. Later siblings overwrite
/// earlier matches, separately for x and y.
pub fn snap_to_neighbors<'a>(
    candidate: Point,
    moving: &Rect,
    others: impl IntoIterator<Item = &'a Rect>,
    margin: f64,
) -> Point {
    let mut snapped = candidate;

    for other in others {
        // right of the sibling
        let target = other.right() + margin;
        if (candidate.x - target).abs() < NEIGHBOR_SNAP_TOLERANCE {
            snapped.x = target;
        }
        // left of the sibling
        let target = other.x - moving.width - margin;
        if (candidate.x - target).abs() < NEIGHBOR_SNAP_TOLERANCE {
            snapped.x = target;
        }
        // below the sibling
        let target = other.bottom() + margin;
        if (candidate.y - target).abs() < NEIGHBOR_SNAP_TOLERANCE {
            snapped.y = target;
        }
        // above the sibling
        let target = other.y - moving.height - margin;
        if (candidate.y - target).abs() < NEIGHBOR_SNAP_TOLERANCE {
            snapped.y = target;
        }
    }

    snapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snap_to_grid_rounds_to_nearest() {
        assert_eq!(snap_to_grid(74.0, 50.0), 50.0);
        assert_eq!(snap_to_grid(76.0, 50.0), 100.0);
        assert_eq!(snap_to_grid(-74.0, 50.0), -50.0);
        assert_eq!(snap_to_grid(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_snap_to_grid_halves_round_up() {
        assert_eq!(snap_to_grid(25.0, 50.0), 50.0);
        assert_eq!(snap_to_grid(-25.0, 50.0), 0.0);
    }

    #[test]
    fn test_snap_to_grid_ignores_bad_spacing() {
        assert_eq!(snap_to_grid(37.0, 0.0), 37.0);
        assert_eq!(snap_to_grid(37.0, -10.0), 37.0);
        assert_eq!(snap_to_grid(37.0, f64::NAN), 37.0);
    }

    #[test]
    fn test_snap_point_axes_independent() {
        let snapped = snap_point_to_grid(Point::new(124.0, 126.0), 50.0);
        assert_eq!(snapped, Point::new(100.0, 150.0));
    }

    #[test]
    fn test_neighbor_snap_right_of_sibling() {
        let sibling = Rect::new(0.0, 0.0, 100.0, 100.0);
        let moving = Rect::new(0.0, 0.0, 80.0, 60.0);
        // sibling right edge + margin = 110
        let snapped = snap_to_neighbors(Point::new(113.0, 400.0), &moving, [&sibling], 10.0);
        assert_eq!(snapped, Point::new(110.0, 400.0));
    }

    #[test]
    fn test_neighbor_snap_left_of_sibling() {
        let sibling = Rect::new(500.0, 0.0, 100.0, 100.0);
        let moving = Rect::new(0.0, 0.0, 80.0, 60.0);
        // 500 - 80 - 10 = 410
        let snapped = snap_to_neighbors(Point::new(408.0, 900.0), &moving, [&sibling], 10.0);
        assert_eq!(snapped, Point::new(410.0, 900.0));
    }

    #[test]
    fn test_neighbor_snap_vertical_cases() {
        let sibling = Rect::new(0.0, 200.0, 100.0, 100.0);
        let moving = Rect::new(0.0, 0.0, 80.0, 60.0);
        // below: 300 + 10 = 310
        let below = snap_to_neighbors(Point::new(900.0, 306.0), &moving, [&sibling], 10.0);
        assert_eq!(below, Point::new(900.0, 310.0));
        // above: 200 - 60 - 10 = 130
        let above = snap_to_neighbors(Point::new(900.0, 134.5), &moving, [&sibling], 10.0);
        assert_eq!(above, Point::new(900.0, 130.0));
    }

    #[test]
    fn test_neighbor_snap_tolerance_is_exclusive() {
        let sibling = Rect::new(0.0, 0.0, 100.0, 100.0);
        let moving = Rect::new(0.0, 0.0, 80.0, 60.0);
        let snapped = snap_to_neighbors(Point::new(115.0, 700.0), &moving, [&sibling], 10.0);
        assert_eq!(snapped, Point::new(115.0, 700.0));
    }

    #[test]
    fn test_neighbor_snap_last_match_wins_per_axis() {
        let first = Rect::new(0.0, 0.0, 100.0, 100.0); // right edge target 110
        let second = Rect::new(0.0, 500.0, 103.0, 50.0); // right edge target 113
        let moving = Rect::new(0.0, 0.0, 80.0, 60.0);
        let snapped = snap_to_neighbors(
            Point::new(111.0, 1000.0),
            &moving,
            [&first, &second],
            10.0,
        );
        assert_eq!(snapped.x, 113.0);
        assert_eq!(snapped.y, 1000.0);

        let snapped = snap_to_neighbors(
            Point::new(111.0, 1000.0),
            &moving,
            [&second, &first],
            10.0,
        );
        assert_eq!(snapped.x, 110.0);
    }

    #[test]
    fn test_neighbor_snap_uses_raw_candidate_for_each_check() {
        // Both siblings qualify against the raw candidate, even though the
        // first match moved the snapped x away from the second target.
        let a = Rect::new(0.0, 0.0, 100.0, 10.0); // target 110
        let b = Rect::new(0.0, 0.0, 106.0, 10.0); // target 116
        let moving = Rect::new(0.0, 0.0, 10.0, 10.0);
        let snapped = snap_to_neighbors(Point::new(112.0, 900.0), &moving, [&a, &b], 10.0);
        assert_eq!(snapped.x, 116.0);
    }

    #[test]
    fn test_rect_from_tile() {
        let tile = Tile::new(wall_model::MediaSource::new("a.png"), 1.0, 2.0, 3.0, 4.0);
        let rect = Rect::from(&tile);
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rect.right(), 4.0);
        assert_eq!(rect.bottom(), 6.0);
    }

    proptest! {
        #[test]
        fn prop_snap_to_grid_is_idempotent(value in -1.0e6f64..1.0e6, spacing in 0.5f64..500.0) {
            let once = snap_to_grid(value, spacing);
            prop_assert_eq!(snap_to_grid(once, spacing), once);
        }

        #[test]
        fn prop_snap_to_grid_moves_at_most_half_spacing(value in -1.0e6f64..1.0e6, spacing in 1.0f64..500.0) {
            let snapped = snap_to_grid(value, spacing);
            prop_assert!((snapped - value).abs() <= spacing / 2.0 + 1e-6);
        }
    }
}
