// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the swipe demos: a toy list row view, a recognizer
//! that only logs subscriptions, and tracing setup.

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_swipe::pan::PanSample;
use understory_swipe::{GestureFamily, GestureRecognizer, SwipeEvent, SwipeView};

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `debug` for
/// the swipe crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,understory_swipe=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Elements of a list row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowElement {
    /// The row container.
    Row,
    /// The draggable content strip inside the row.
    Content,
}

/// A list row that deletes itself when swiped far enough.
#[derive(Debug)]
pub struct ListRow {
    /// Label printed for each event.
    pub label: &'static str,
    /// Set once a swipe completes.
    pub deleted: bool,
    /// Names of every emitted event, in order.
    pub log: Vec<&'static str>,
}

impl ListRow {
    /// Creates a row with an empty log.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            deleted: false,
            log: Vec::new(),
        }
    }
}

impl SwipeView for ListRow {
    type Element = RowElement;
    type Raw = PanSample;

    fn root(&self) -> RowElement {
        RowElement::Row
    }

    fn select(&self, selector: &str) -> Option<RowElement> {
        match selector {
            ".content" => Some(RowElement::Content),
            _ => None,
        }
    }

    fn emit(&mut self, event: SwipeEvent<RowElement, PanSample>) {
        match &event {
            SwipeEvent::Drag(sample) => {
                info!(row = self.label, x = sample.position.x, "drag");
            }
            SwipeEvent::Complete => {
                self.deleted = true;
                info!(row = self.label, "swipe:complete, deleting row");
            }
            SwipeEvent::Reset(target) => {
                info!(row = self.label, ?target, "swipe:reset, snapping back");
            }
            other => info!(row = self.label, "{}", other.name()),
        }
        self.log.push(event.name());
    }
}

/// Recognizer stand-in that logs subscriptions; pointer input is fed by hand.
#[derive(Debug, Default)]
pub struct LoggingRecognizer {
    next: u32,
}

impl GestureRecognizer<RowElement> for LoggingRecognizer {
    type Subscription = u32;

    fn attach(&mut self, target: &RowElement, families: &[GestureFamily]) -> u32 {
        self.next += 1;
        let names: Vec<_> = families.iter().map(|f| f.name()).collect();
        info!(id = self.next, ?target, ?names, "recognizer attached");
        self.next
    }

    fn detach(&mut self, subscription: u32) {
        info!(id = subscription, "recognizer detached");
    }
}
