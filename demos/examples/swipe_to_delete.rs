// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe to delete.
//!
//! Load a swipe configuration from JSON, attach it to a list row, and replay
//! two pointer gestures through `PanTracker`: a short flick that snaps back and
//! a long swipe that deletes the row.
//!
//! Run:
//! - `cargo run -p understory_swipe_demos --example swipe_to_delete`
//! - `RUST_LOG=trace cargo run -p understory_swipe_demos --example swipe_to_delete`

use kurbo::Point;
use understory_swipe::pan::PanTracker;
use understory_swipe::{SwipeConfig, SwipeController};
use understory_swipe_demos::{ListRow, LoggingRecognizer, init_tracing};

const CONFIG: &str = r#"{
    "targetElement": ".content",
    "swipeDepth": 60,
    "enableSwipeRight": false
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config: SwipeConfig = serde_json::from_str(CONFIG)?;
    let mut row = ListRow::new("inbox/42");
    let mut recognizer = LoggingRecognizer::default();
    let mut swipe = SwipeController::attach(&row, &mut recognizer, config)?;

    let gestures: [&[f64]; 3] = [
        // Right flick: right swipes are disabled, nothing happens.
        &[310.0, 330.0, 360.0],
        // Short left flick: snaps back.
        &[290.0, 270.0, 265.0],
        // Long left swipe: deletes.
        &[280.0, 240.0, 250.0, 200.0, 180.0],
    ];
    for xs in gestures {
        let mut pan = PanTracker::default();
        pan.start(Point::new(300.0, 24.0));
        for &x in &xs[..xs.len() - 1] {
            if let Some(input) = pan.update(Point::new(x, 24.0)) {
                swipe.handle_drag(&mut row, input);
            }
        }
        if let Some(input) = pan.end(Point::new(xs[xs.len() - 1], 24.0)) {
            swipe.handle_drag_end(&mut row, input);
        }
        println!("after gesture: phase = {:?}", swipe.state().phase());
    }

    swipe.detach(&mut recognizer);
    println!("deleted: {}", row.deleted);
    println!("events: {}", row.log.join(" "));
    Ok(())
}
