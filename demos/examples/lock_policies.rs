// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction lock policies.
//!
//! Feed the same reversing drag to a sticky session and a restarting session
//! and print the events each one emits.
//!
//! Run:
//! - `cargo run -p understory_swipe_demos --example lock_policies`

use understory_swipe::{Direction, DirectionLock, DragInput, SwipeConfig, SwipeEvent, SwipeState};
use understory_swipe_demos::init_tracing;

fn main() {
    init_tracing();

    // Start left, change your mind, and let go well to the right.
    let drags = [
        Direction::Left,
        Direction::Left,
        Direction::Right,
        Direction::Right,
    ];
    let release = 70.0;

    for lock in [DirectionLock::Sticky, DirectionLock::Restart] {
        let mut swipe = SwipeState::new(SwipeConfig::default().with_direction_lock(lock));
        let mut names = Vec::new();
        for direction in drags {
            let events = swipe.on_drag(&"row", DragInput::bare(direction, 0.0));
            names.extend(events.iter().map(SwipeEvent::name));
        }
        let events = swipe.on_drag_end(&"row", DragInput::bare(Direction::Right, release));
        names.extend(events.iter().map(SwipeEvent::name));

        println!("{lock:?}: {}", names.join(" "));
        println!("{lock:?}: complete = {}", swipe.is_complete());
    }
}
