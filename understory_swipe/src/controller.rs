// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wires a [`SwipeState`] to a host view and a gesture recognizer.
//!
//! The host owns the controller. On render it calls [`SwipeController::attach`],
//! routes recognizer callbacks to [`SwipeController::handle_drag`] and
//! [`SwipeController::handle_drag_end`], and on destroy calls
//! [`SwipeController::detach`].
//!
//! ```
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::controller::{
//!     GestureFamily, GestureRecognizer, SwipeController, SwipeView,
//! };
//! use understory_swipe::direction::Direction;
//! use understory_swipe::event::SwipeEvent;
//! use understory_swipe::input::DragInput;
//!
//! #[derive(Default)]
//! struct Row { log: Vec<&'static str> }
//!
//! impl SwipeView for Row {
//!     type Element = &'static str;
//!     type Raw = ();
//!     fn root(&self) -> &'static str { "row" }
//!     fn select(&self, selector: &str) -> Option<&'static str> {
//!         (selector == ".handle").then_some("handle")
//!     }
//!     fn emit(&mut self, event: SwipeEvent<&'static str, ()>) {
//!         self.log.push(event.name());
//!     }
//! }
//!
//! struct Recognizer;
//!
//! impl GestureRecognizer<&'static str> for Recognizer {
//!     type Subscription = ();
//!     fn attach(&mut self, _target: &&'static str, _families: &[GestureFamily]) {}
//!     fn detach(&mut self, _subscription: ()) {}
//! }
//!
//! let mut row = Row::default();
//! let mut recognizer = Recognizer;
//! let mut swipe = SwipeController::attach(&row, &mut recognizer, SwipeConfig::default()).unwrap();
//!
//! swipe.handle_drag(&mut row, DragInput::bare(Direction::Left, -5.0));
//! swipe.handle_drag_end(&mut row, DragInput::bare(Direction::Left, -60.0));
//! swipe.detach(&mut recognizer);
//!
//! assert_eq!(
//!     row.log,
//!     ["drag", "swipe:left", "dragend", "swipe:complete", "swipe:reset"]
//! );
//! ```

use alloc::string::ToString;

use tracing::{debug, warn};

use crate::config::{SwipeConfig, TargetRule};
use crate::error::SwipeError;
use crate::event::SwipeEvent;
use crate::input::DragInput;
use crate::state::SwipeState;

/// Host view consumed by the controller.
pub trait SwipeView {
    /// Element handle. Cloned into each `swipe:reset`.
    type Element: Clone;
    /// Recognizer payload passed through by `drag` and `dragend`.
    type Raw;

    /// The view's root element.
    fn root(&self) -> Self::Element;

    /// The element matching `selector` within the view, if any.
    fn select(&self, selector: &str) -> Option<Self::Element>;

    /// Delivers a semantic event to the view and its listeners.
    fn emit(&mut self, event: SwipeEvent<Self::Element, Self::Raw>);
}

/// Drag event families the controller subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureFamily {
    /// Continuous drag-progress events.
    Pan,
    /// The terminal drag-end event of a gesture.
    PanEnd,
}

impl GestureFamily {
    /// Families a swipe controller needs.
    pub const SWIPE: [Self; 2] = [Self::Pan, Self::PanEnd];

    /// Recognizer event name for this family.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::PanEnd => "panend",
        }
    }
}

/// The external recognizer that turns pointer input on an element into drag events.
pub trait GestureRecognizer<T> {
    /// Handle released by [`GestureRecognizer::detach`].
    type Subscription;

    /// Starts delivering `families` of drag events for `target`.
    fn attach(&mut self, target: &T, families: &[GestureFamily]) -> Self::Subscription;

    /// Stops delivery and releases recognizer resources.
    fn detach(&mut self, subscription: Self::Subscription);
}

/// A swipe session attached to one render of a view.
///
/// `T` is the view's element handle and `S` the recognizer subscription.
///
/// Hosts must call [`SwipeController::detach`] when the view is destroyed.
/// Dropping the controller does not release the subscription, since only the
/// recognizer can do that.
#[derive(Debug)]
pub struct SwipeController<T, S> {
    state: SwipeState,
    target: T,
    subscription: Option<S>,
}

impl<T: Clone, S> SwipeController<T, S> {
    /// Resolves the drag target and subscribes to drag events on it.
    ///
    /// Fails without attaching anything when the configured selector matches
    /// no element.
    pub fn attach<V, G>(
        view: &V,
        recognizer: &mut G,
        config: SwipeConfig,
    ) -> Result<Self, SwipeError>
    where
        V: SwipeView<Element = T>,
        G: GestureRecognizer<T, Subscription = S>,
    {
        let target = resolve_target(view, &config)?;
        let subscription = recognizer.attach(&target, &GestureFamily::SWIPE);
        debug!(rule = ?config.target_rule(), "swipe attached");
        Ok(Self {
            state: SwipeState::new(config),
            target,
            subscription: Some(subscription),
        })
    }

    /// Starts a fresh session for a new render of the view.
    ///
    /// Clears `complete`, re-resolves the target, and moves the subscription
    /// onto it. On error the existing session and subscription are untouched.
    pub fn rerender<V, G>(&mut self, view: &V, recognizer: &mut G) -> Result<(), SwipeError>
    where
        V: SwipeView<Element = T>,
        G: GestureRecognizer<T, Subscription = S>,
    {
        let target = resolve_target(view, self.state.config())?;
        if let Some(subscription) = self.subscription.take() {
            recognizer.detach(subscription);
        }
        self.subscription = Some(recognizer.attach(&target, &GestureFamily::SWIPE));
        self.state = SwipeState::new(self.state.config().clone());
        self.target = target;
        debug!("swipe session renewed");
        Ok(())
    }

    /// Routes a drag-progress input through the session and emits the results.
    pub fn handle_drag<V>(&mut self, view: &mut V, input: DragInput<V::Raw>)
    where
        V: SwipeView<Element = T>,
    {
        for event in self.state.on_drag(&self.target, input) {
            view.emit(event);
        }
    }

    /// Routes a drag-end input through the session and emits the results.
    pub fn handle_drag_end<V>(&mut self, view: &mut V, input: DragInput<V::Raw>)
    where
        V: SwipeView<Element = T>,
    {
        for event in self.state.on_drag_end(&self.target, input) {
            view.emit(event);
        }
    }

    /// Unsubscribes from the recognizer, ending the session.
    pub fn detach<G>(mut self, recognizer: &mut G)
    where
        G: GestureRecognizer<T, Subscription = S>,
    {
        if let Some(subscription) = self.subscription.take() {
            recognizer.detach(subscription);
            debug!("swipe detached");
        }
    }

    /// The session state.
    #[must_use]
    pub fn state(&self) -> &SwipeState {
        &self.state
    }

    /// The resolved drag target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }
}

fn resolve_target<V: SwipeView>(
    view: &V,
    config: &SwipeConfig,
) -> Result<V::Element, SwipeError> {
    match config.target_rule() {
        TargetRule::Root => Ok(view.root()),
        TargetRule::Selector(selector) => view.select(selector).ok_or_else(|| {
            warn!(selector, "swipe target not found");
            SwipeError::TargetNotFound {
                selector: selector.to_string(),
            }
        }),
    }
}
