// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe configuration.
//!
//! [`SwipeConfig::default`] gives the stock behavior: the whole view is the
//! drag target, a swipe must travel more than 45 pixels, both directions are
//! enabled, and the first locked direction is sticky.
//!
//! ```
//! use understory_swipe::config::{DirectionLock, SwipeConfig, TargetRule};
//!
//! let config = SwipeConfig::default()
//!     .with_target_element(".row-content")
//!     .with_swipe_depth(80.0)
//!     .with_swipe_right(false)
//!     .with_direction_lock(DirectionLock::Restart);
//!
//! assert_eq!(config.target_rule(), TargetRule::Selector(".row-content"));
//! assert_eq!(config.effective_depth(), 80.0);
//! assert!(!config.enable_swipe_right);
//! ```

use alloc::string::String;

use crate::direction::SwipeDirection;

/// Default swipe depth, in pixels.
pub const DEFAULT_SWIPE_DEPTH: f64 = 45.0;

/// What happens when the drag reverses across the locked direction mid-episode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DirectionLock {
    /// The first direction wins. Reversals keep emitting `drag` but never
    /// change the direction used to judge the episode.
    #[default]
    Sticky,
    /// A reversal cancels the episode (`swipe:cancelled`, `swipe:reset`) and,
    /// if the new direction is enabled, immediately starts a new one toward it.
    Restart,
}

/// How the drag target is resolved from the host view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetRule<'a> {
    /// The view's root element.
    Root,
    /// The element matching this selector within the view.
    Selector(&'a str),
}

/// Options for a swipe session. Immutable for the session's lifetime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SwipeConfig {
    /// Selector for the element receiving gesture input. Empty means the whole view.
    pub target_element: String,
    /// Distance `delta_x` must exceed, in the locked direction, to complete.
    pub swipe_depth: f64,
    /// Whether a left drag may start an episode.
    pub enable_swipe_left: bool,
    /// Whether a right drag may start an episode.
    pub enable_swipe_right: bool,
    /// Reaction to mid-episode reversals.
    pub direction_lock: DirectionLock,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            target_element: String::new(),
            swipe_depth: DEFAULT_SWIPE_DEPTH,
            enable_swipe_left: true,
            enable_swipe_right: true,
            direction_lock: DirectionLock::Sticky,
        }
    }
}

impl SwipeConfig {
    /// Sets the target selector.
    #[must_use]
    pub fn with_target_element(mut self, selector: impl Into<String>) -> Self {
        self.target_element = selector.into();
        self
    }

    /// Sets the swipe depth in pixels.
    #[must_use]
    pub fn with_swipe_depth(mut self, depth: f64) -> Self {
        self.swipe_depth = depth;
        self
    }

    /// Enables or disables left swipes.
    #[must_use]
    pub fn with_swipe_left(mut self, enabled: bool) -> Self {
        self.enable_swipe_left = enabled;
        self
    }

    /// Enables or disables right swipes.
    #[must_use]
    pub fn with_swipe_right(mut self, enabled: bool) -> Self {
        self.enable_swipe_right = enabled;
        self
    }

    /// Sets the reversal policy.
    #[must_use]
    pub fn with_direction_lock(mut self, lock: DirectionLock) -> Self {
        self.direction_lock = lock;
        self
    }

    /// Returns how the drag target should be resolved.
    #[must_use]
    pub fn target_rule(&self) -> TargetRule<'_> {
        if self.target_element.is_empty() {
            TargetRule::Root
        } else {
            TargetRule::Selector(&self.target_element)
        }
    }

    /// The swipe depth with negative and NaN values clamped to zero.
    ///
    /// A depth of zero means any movement in the locked direction completes.
    #[must_use]
    pub fn effective_depth(&self) -> f64 {
        // `max` returns the non-NaN operand.
        self.swipe_depth.max(0.0)
    }

    /// Whether `direction` may start an episode.
    #[must_use]
    pub fn is_enabled(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.enable_swipe_left,
            SwipeDirection::Right => self.enable_swipe_right,
        }
    }
}
