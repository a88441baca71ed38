// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic events emitted to the host view.

use smallvec::SmallVec;

use crate::direction::SwipeDirection;

/// Events produced by the swipe state machine, in emission order.
///
/// `T` is the host's element handle (carried by [`SwipeEvent::Reset`]) and `R`
/// is the recognizer payload passed through by [`SwipeEvent::Drag`] and
/// [`SwipeEvent::DragEnd`].
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeEvent<T, R> {
    /// An accepted drag-progress input, passed through.
    Drag(R),
    /// A drag-end input that closed an episode, passed through.
    DragEnd(R),
    /// The episode locked onto a left swipe.
    Left,
    /// The episode locked onto a right swipe.
    Right,
    /// The episode ended without reaching the swipe depth.
    Cancelled,
    /// The episode reached the swipe depth; the session is now inert.
    Complete,
    /// Episode state was cleared. Carries the drag target.
    Reset(T),
}

impl<T, R> SwipeEvent<T, R> {
    /// Host-visible event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drag(_) => "drag",
            Self::DragEnd(_) => "dragend",
            Self::Left => "swipe:left",
            Self::Right => "swipe:right",
            Self::Cancelled => "swipe:cancelled",
            Self::Complete => "swipe:complete",
            Self::Reset(_) => "swipe:reset",
        }
    }

    /// The locked direction announced by this event, if it is a swipe start.
    #[must_use]
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            Self::Left => Some(SwipeDirection::Left),
            Self::Right => Some(SwipeDirection::Right),
            _ => None,
        }
    }

    pub(crate) fn started(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Self::Left,
            SwipeDirection::Right => Self::Right,
        }
    }
}

/// Events emitted by one input. Never more than four, so never spills.
pub type SwipeEvents<T, R> = SmallVec<[SwipeEvent<T, R>; 4]>;
