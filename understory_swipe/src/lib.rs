// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: swipe actions for UI views.
//!
//! This crate turns a stream of directional drag events into swipe actions such
//! as swipe-to-delete. It decides when a swipe starts, which way it goes, and
//! whether it travelled far enough to count, and reports that to the host view
//! as a small set of semantic events:
//!
//! | event | meaning |
//! |---|---|
//! | `drag` | an accepted drag-progress input, passed through |
//! | `dragend` | the drag-end input closing an episode, passed through |
//! | `swipe:left`, `swipe:right` | an episode started and locked onto a direction |
//! | `swipe:cancelled` | the episode ended short of the swipe depth |
//! | `swipe:complete` | the episode passed the swipe depth; the session goes inert |
//! | `swipe:reset` | episode state was cleared; always follows cancel/complete |
//!
//! ## Layering
//!
//! - [`state::SwipeState`] is the state machine. It consumes normalized
//!   [`input::DragInput`] records and returns the events to emit.
//! - [`controller::SwipeController`] wires a session to a host view
//!   ([`controller::SwipeView`]) and a gesture recognizer
//!   ([`controller::GestureRecognizer`]) for one render of that view.
//! - [`pan::PanTracker`] (`pan` feature) is a minimal recognizer for hosts that
//!   only have raw pointer positions.
//!
//! The crate does not track touches, compute velocities, or draw anything.
//! Recognizers and hosts are supplied by the application.
//!
//! ## Example
//!
//! ```rust
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::direction::Direction;
//! use understory_swipe::event::SwipeEvent;
//! use understory_swipe::input::DragInput;
//! use understory_swipe::state::SwipeState;
//!
//! let mut swipe = SwipeState::new(SwipeConfig::default().with_swipe_depth(30.0));
//! let row = 42_u32;
//!
//! // Starting left locks the episode onto a left swipe.
//! let events = swipe.on_drag(&row, DragInput::bare(Direction::Left, -4.0));
//! assert_eq!(events.as_slice(), &[SwipeEvent::Drag(()), SwipeEvent::Left]);
//!
//! // Letting go 20px to the left is not far enough.
//! let events = swipe.on_drag_end(&row, DragInput::bare(Direction::Left, -20.0));
//! let names: Vec<_> = events.iter().map(SwipeEvent::name).collect();
//! assert_eq!(names, ["dragend", "swipe:cancelled", "swipe:reset"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build dependencies with the standard library.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `pan` (default): enable [`pan::PanTracker`] (requires `kurbo`).
//! - `serde`: serialize/deserialize [`config::SwipeConfig`] using the
//!   camelCase option names (`swipeDepth`, `enableSwipeLeft`, ...).
//!
//! This crate is `no_std` compatible (with `alloc`). Diagnostics are emitted
//! through `tracing`; install a subscriber to see them.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod event;
pub mod input;
#[cfg(feature = "pan")]
pub mod pan;
pub mod state;

pub use config::{DirectionLock, SwipeConfig};
pub use controller::{GestureFamily, GestureRecognizer, SwipeController, SwipeView};
pub use direction::{Direction, SwipeDirection};
pub use error::SwipeError;
pub use event::{SwipeEvent, SwipeEvents};
pub use input::DragInput;
pub use state::{SwipePhase, SwipeState};
