// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized record fed into the swipe state machine.
//!
//! Recognizers describe drags in their own shapes. Adapters convert those into
//! a [`DragInput`] at the boundary, so the state machine only ever sees a
//! direction, a signed horizontal displacement, and an opaque payload that is
//! passed through to the host in `drag`/`dragend` events.

use crate::direction::Direction;

/// One drag-progress or drag-end input from a gesture recognizer.
#[derive(Clone, Debug, PartialEq)]
pub struct DragInput<R> {
    /// Direction of the movement, as classified by the recognizer.
    pub direction: Direction,
    /// Signed horizontal displacement since the drag started, in pixels.
    ///
    /// Only consulted for drag-end inputs.
    pub delta_x: f64,
    /// Recognizer payload, forwarded verbatim to the host.
    pub raw: R,
}

impl<R> DragInput<R> {
    /// Creates an input record.
    pub fn new(direction: Direction, delta_x: f64, raw: R) -> Self {
        Self {
            direction,
            delta_x,
            raw,
        }
    }

    /// Replaces the payload, keeping direction and displacement.
    pub fn map_raw<U>(self, f: impl FnOnce(R) -> U) -> DragInput<U> {
        DragInput {
            direction: self.direction,
            delta_x: self.delta_x,
            raw: f(self.raw),
        }
    }
}

impl DragInput<()> {
    /// Creates an input record with no payload.
    #[must_use]
    pub fn bare(direction: Direction, delta_x: f64) -> Self {
        Self::new(direction, delta_x, ())
    }
}
