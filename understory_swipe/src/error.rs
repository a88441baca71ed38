// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while wiring a swipe controller to a view.

use alloc::string::String;

/// Failure to attach a [`SwipeController`](crate::controller::SwipeController).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SwipeError {
    /// The configured target selector matched no element in the view.
    #[error("swipe target `{selector}` matched no element")]
    TargetNotFound {
        /// The selector that failed to resolve.
        selector: String,
    },
}
