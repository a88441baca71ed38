// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::time::Duration;
use understory_swipe::pan::PanTracker;
use understory_swipe::{Direction, DirectionLock, DragInput, SwipeConfig, SwipeState};

/// A drag that starts left and wobbles, so both lock policies see reversals.
fn wobble(len: usize) -> Vec<Direction> {
    (0..len)
        .map(|i| {
            if i % 7 == 3 {
                Direction::Right
            } else {
                Direction::Left
            }
        })
        .collect()
}

fn bench_episode(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/episode");

    for len in [16usize, 128, 1_024] {
        let drags = wobble(len);
        group.throughput(Throughput::Elements(len as u64));

        for lock in [DirectionLock::Sticky, DirectionLock::Restart] {
            let config = SwipeConfig::default().with_direction_lock(lock);
            group.bench_with_input(
                BenchmarkId::new(format!("{lock:?}"), len),
                &drags,
                |b, drags| {
                    b.iter_batched(
                        || SwipeState::new(config.clone()),
                        |mut state| {
                            let mut emitted = 0;
                            for &direction in drags {
                                emitted += state
                                    .on_drag(&0_u32, DragInput::bare(direction, 0.0))
                                    .len();
                            }
                            emitted += state
                                .on_drag_end(&0_u32, DragInput::bare(Direction::Left, -100.0))
                                .len();
                            black_box(emitted);
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_completed_session(c: &mut Criterion) {
    // Once complete, every input should be a cheap early return.
    let mut state = SwipeState::new(SwipeConfig::default());
    state.on_drag(&0_u32, DragInput::bare(Direction::Right, 0.0));
    state.on_drag_end(&0_u32, DragInput::bare(Direction::Right, 100.0));

    c.bench_function("swipe/ignored_after_complete", |b| {
        b.iter(|| {
            black_box(
                state
                    .on_drag(&0_u32, DragInput::bare(Direction::Left, 0.0))
                    .len(),
            )
        });
    });
}

fn bench_pan_tracker(c: &mut Criterion) {
    let points: Vec<Point> = (0..512_u32)
        .map(|i| Point::new(400.0 - f64::from(i), 20.0))
        .collect();

    c.bench_function("swipe/pan_tracker_feed", |b| {
        b.iter_batched(
            || SwipeState::new(SwipeConfig::default()),
            |mut state| {
                let mut pan = PanTracker::default();
                pan.start(Point::new(400.0, 20.0));
                for &p in &points {
                    if let Some(input) = pan.update(p) {
                        black_box(state.on_drag(&(), input));
                    }
                }
                if let Some(input) = pan.end(Point::new(0.0, 20.0)) {
                    black_box(state.on_drag_end(&(), input));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2));
    targets = bench_episode, bench_completed_session, bench_pan_tracker
}
criterion_main!(benches);
