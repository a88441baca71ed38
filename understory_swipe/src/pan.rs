// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal pan recognizer: turn pointer positions into [`DragInput`] records.
//!
//! Hosts that already have a gesture recognizer do not need this module; it
//! exists for hosts that only receive raw pointer positions.
//!
//! ## Usage
//!
//! 1) Call [`PanTracker::start`] on pointer down.
//! 2) On each pointer move, call [`PanTracker::update`] and feed the result to
//!    the swipe controller's drag handler.
//! 3) On pointer up, call [`PanTracker::end`] and feed the result to the
//!    drag-end handler.
//!
//! The reported [`Direction`] follows the most recent movement, so a reversal
//! shows up immediately; `delta_x` is always measured from the start position.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::direction::Direction;
//! use understory_swipe::pan::PanTracker;
//!
//! let mut pan = PanTracker::default();
//!
//! pan.start(Point::new(100.0, 20.0));
//! assert!(pan.is_panning());
//!
//! let input = pan.update(Point::new(90.0, 21.0)).unwrap();
//! assert_eq!(input.direction, Direction::Left);
//! assert_eq!(input.delta_x, -10.0);
//!
//! let input = pan.end(Point::new(40.0, 22.0)).unwrap();
//! assert_eq!(input.delta_x, -60.0);
//! assert!(!pan.is_panning());
//! ```

use kurbo::{Point, Vec2};

use crate::direction::Direction;
use crate::input::DragInput;

/// Pointer geometry carried as the raw payload of pan inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanSample {
    /// Current pointer position.
    pub position: Point,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Movement since the pan started.
    pub offset: Vec2,
}

/// Tracks one pointer pan.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    /// Position where the pan started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the pan.
    pub last_pos: Option<Point>,
}

impl PanTracker {
    /// Start tracking a new pan from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a pointer move and produce a drag-progress input.
    ///
    /// Returns `None` when no pan is active.
    pub fn update(&mut self, pos: Point) -> Option<DragInput<PanSample>> {
        let sample = self.sample(pos)?;
        self.last_pos = Some(pos);
        Some(DragInput::new(
            classify(sample.delta),
            sample.offset.x,
            sample,
        ))
    }

    /// Finish the pan and produce the drag-end input.
    ///
    /// Returns `None` when no pan is active.
    pub fn end(&mut self, pos: Point) -> Option<DragInput<PanSample>> {
        let sample = self.sample(pos)?;
        self.start_pos = None;
        self.last_pos = None;
        Some(DragInput::new(
            classify(sample.offset),
            sample.offset.x,
            sample,
        ))
    }

    /// Abandon the pan without producing a drag-end input.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a pan is active.
    pub fn is_panning(&self) -> bool {
        self.start_pos.is_some()
    }

    fn sample(&self, pos: Point) -> Option<PanSample> {
        let start = self.start_pos?;
        let last = self.last_pos.unwrap_or(start);
        Some(PanSample {
            position: pos,
            delta: pos - last,
            offset: pos - start,
        })
    }
}

/// Classify a movement vector by its dominant axis.
///
/// Ties between axes go to the horizontal one.
pub fn classify(movement: Vec2) -> Direction {
    let (dx, dy) = (movement.x, movement.y);
    if dx * dx >= dy * dy {
        if dx < 0.0 {
            Direction::Left
        } else if dx > 0.0 {
            Direction::Right
        } else {
            Direction::None
        }
    } else if dy < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_not_panning() {
        let mut pan = PanTracker::default();
        assert!(!pan.is_panning());
        assert_eq!(pan.update(Point::new(1.0, 1.0)), None);
        assert_eq!(pan.end(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn update_reports_latest_movement_direction() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(0.0, 0.0));

        let input = pan.update(Point::new(-30.0, 2.0)).unwrap();
        assert_eq!(input.direction, Direction::Left);
        assert_eq!(input.delta_x, -30.0);

        // Moving back right while still left of the start.
        let input = pan.update(Point::new(-20.0, 2.0)).unwrap();
        assert_eq!(input.direction, Direction::Right);
        assert_eq!(input.delta_x, -20.0);
        assert_eq!(input.raw.delta, Vec2::new(10.0, 0.0));
        assert_eq!(input.raw.offset, Vec2::new(-20.0, 2.0));
    }

    #[test]
    fn update_without_last_position_measures_from_start() {
        let mut pan = PanTracker {
            start_pos: Some(Point::new(10.0, 20.0)),
            last_pos: None,
        };

        let input = pan.update(Point::new(15.0, 20.0)).unwrap();
        assert_eq!(input.raw.delta, Vec2::new(5.0, 0.0));
        assert_eq!(pan.last_pos, Some(Point::new(15.0, 20.0)));
    }

    #[test]
    fn end_reports_total_offset_and_resets() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(50.0, 50.0));
        pan.update(Point::new(80.0, 52.0));

        let input = pan.end(Point::new(110.0, 55.0)).unwrap();
        assert_eq!(input.direction, Direction::Right);
        assert_eq!(input.delta_x, 60.0);
        assert!(!pan.is_panning());
        assert!(pan.last_pos.is_none());
    }

    #[test]
    fn cancel_drops_the_pan() {
        let mut pan = PanTracker::default();
        pan.start(Point::new(0.0, 0.0));
        pan.cancel();
        assert!(!pan.is_panning());
        assert_eq!(pan.end(Point::new(5.0, 0.0)), None);
    }

    #[test]
    fn classify_picks_dominant_axis() {
        assert_eq!(classify(Vec2::new(-3.0, 1.0)), Direction::Left);
        assert_eq!(classify(Vec2::new(3.0, -1.0)), Direction::Right);
        assert_eq!(classify(Vec2::new(1.0, -3.0)), Direction::Up);
        assert_eq!(classify(Vec2::new(-1.0, 3.0)), Direction::Down);
        assert_eq!(classify(Vec2::new(2.0, 2.0)), Direction::Right);
        assert_eq!(classify(Vec2::ZERO), Direction::None);
    }
}
