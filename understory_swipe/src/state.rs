// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe session state machine: direction locking and depth evaluation.
//!
//! ## Usage
//!
//! 1) Create one [`SwipeState`] per render of the host view.
//! 2) Feed drag-progress inputs to [`SwipeState::on_drag`].
//! 3) Feed the terminal drag-end input to [`SwipeState::on_drag_end`].
//! 4) Deliver the returned [`SwipeEvents`] to the host, in order.
//!
//! ```text
//! Idle --(allowed drag)--------------> Dragging   swipe:left | swipe:right
//! Dragging --(drag)------------------> Dragging   drag
//! Dragging --(drag end, too short)---> Idle       dragend, swipe:cancelled, swipe:reset
//! Dragging --(drag end, deep enough)-> Done       dragend, swipe:complete, swipe:reset
//! Done --(anything)------------------> Done
//! ```
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::direction::Direction;
//! use understory_swipe::event::SwipeEvent;
//! use understory_swipe::input::DragInput;
//! use understory_swipe::state::{SwipePhase, SwipeState};
//!
//! let mut swipe = SwipeState::new(SwipeConfig::default());
//! let row = "row-7";
//!
//! let events = swipe.on_drag(&row, DragInput::bare(Direction::Right, 10.0));
//! assert_eq!(events.as_slice(), &[SwipeEvent::Drag(()), SwipeEvent::Right]);
//!
//! let events = swipe.on_drag_end(&row, DragInput::bare(Direction::Right, 50.0));
//! assert_eq!(
//!     events.as_slice(),
//!     &[
//!         SwipeEvent::DragEnd(()),
//!         SwipeEvent::Complete,
//!         SwipeEvent::Reset("row-7"),
//!     ]
//! );
//! assert_eq!(swipe.phase(), SwipePhase::Done);
//! ```

use tracing::{debug, trace};

use crate::config::{DirectionLock, SwipeConfig};
use crate::direction::{Direction, SwipeDirection};
use crate::event::{SwipeEvent, SwipeEvents};
use crate::input::DragInput;

/// Coarse state of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipePhase {
    /// No episode in progress.
    Idle,
    /// An episode has started and awaits its drag end.
    Dragging,
    /// A swipe completed; all further input is ignored.
    Done,
}

/// One gesture session, bound to a single render of the host view.
#[derive(Clone, Debug, Default)]
pub struct SwipeState {
    config: SwipeConfig,
    direction: Option<SwipeDirection>,
    dragged: bool,
    complete: bool,
}

impl SwipeState {
    /// Creates a fresh session.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            direction: None,
            dragged: false,
            complete: false,
        }
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Direction locked for the current episode.
    #[must_use]
    pub fn direction(&self) -> Option<SwipeDirection> {
        self.direction
    }

    /// Whether an accepted drag has been seen since the last reset.
    #[must_use]
    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Whether a swipe has completed in this session.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        if self.complete {
            SwipePhase::Done
        } else if self.dragged {
            SwipePhase::Dragging
        } else {
            SwipePhase::Idle
        }
    }

    /// Whether a drag in `direction` would be accepted right now.
    ///
    /// Once an episode has started, every direction is accepted.
    #[must_use]
    pub fn direction_allowed(&self, direction: Direction) -> bool {
        self.dragged
            || direction
                .horizontal()
                .is_some_and(|dir| self.config.is_enabled(dir))
    }

    /// Whether `delta_x` passes the depth test for the locked direction.
    ///
    /// The comparison is strict: with a depth of 45, `-45.0` does not pass a
    /// left swipe and `-46.0` does.
    #[must_use]
    pub fn has_dragged_far_enough(&self, delta_x: f64) -> bool {
        let depth = self.config.effective_depth();
        match self.direction {
            Some(SwipeDirection::Left) => delta_x < -depth,
            Some(SwipeDirection::Right) => delta_x > depth,
            None => false,
        }
    }

    /// Handles a drag-progress input.
    ///
    /// `target` is the resolved drag target, carried by any `swipe:reset`
    /// emitted when a [`DirectionLock::Restart`] reversal cancels the episode.
    pub fn on_drag<T: Clone, R>(
        &mut self,
        target: &T,
        input: DragInput<R>,
    ) -> SwipeEvents<T, R> {
        let mut events = SwipeEvents::new();
        if self.complete {
            trace!("drag ignored: swipe already complete");
            return events;
        }
        if !self.direction_allowed(input.direction) {
            trace!(direction = ?input.direction, "drag ignored: direction not allowed");
            return events;
        }

        self.dragged = true;
        let incoming = input.direction.horizontal();
        events.push(SwipeEvent::Drag(input.raw));

        // Vertical or unclassified movement never affects the lock.
        let Some(incoming) = incoming else {
            return events;
        };
        match self.direction {
            None => self.lock(incoming, &mut events),
            Some(locked) if locked == incoming => {}
            Some(locked) => match self.config.direction_lock {
                DirectionLock::Sticky => {
                    trace!(
                        locked = locked.as_str(),
                        reversed = incoming.as_str(),
                        "reversal ignored"
                    );
                }
                DirectionLock::Restart => {
                    debug!(
                        from = locked.as_str(),
                        to = incoming.as_str(),
                        "reversal restarts swipe"
                    );
                    events.push(SwipeEvent::Cancelled);
                    self.reset(target, &mut events);
                    if self.config.is_enabled(incoming) {
                        self.dragged = true;
                        self.lock(incoming, &mut events);
                    }
                }
            },
        }
        events
    }

    /// Handles the drag-end input that closes an episode.
    pub fn on_drag_end<T: Clone, R>(
        &mut self,
        target: &T,
        input: DragInput<R>,
    ) -> SwipeEvents<T, R> {
        let mut events = SwipeEvents::new();
        if self.complete {
            trace!("drag end ignored: swipe already complete");
            return events;
        }
        if !self.dragged {
            trace!("drag end ignored: no drag in progress");
            return events;
        }

        events.push(SwipeEvent::DragEnd(input.raw));
        if self.has_dragged_far_enough(input.delta_x) {
            debug!(delta_x = input.delta_x, "swipe complete");
            self.complete = true;
            events.push(SwipeEvent::Complete);
        } else {
            debug!(delta_x = input.delta_x, "swipe cancelled");
            events.push(SwipeEvent::Cancelled);
        }
        self.reset(target, &mut events);
        events
    }

    fn lock<T, R>(&mut self, direction: SwipeDirection, events: &mut SwipeEvents<T, R>) {
        debug!(direction = direction.as_str(), "swipe started");
        self.direction = Some(direction);
        events.push(SwipeEvent::started(direction));
    }

    /// Clears episode state. `complete` survives.
    fn reset<T: Clone, R>(&mut self, target: &T, events: &mut SwipeEvents<T, R>) {
        self.direction = None;
        self.dragged = false;
        events.push(SwipeEvent::Reset(target.clone()));
    }
}
