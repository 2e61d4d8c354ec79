use std::time::Duration;

use knuth_sim::{Feed, SimConfig, Simulator, Snapshot, StructureKind};
use tokio::time::Instant;
use tokio_stream::StreamExt;

const TICK: Duration = Duration::from_millis(800);

#[tokio::test(start_paused = true)]
async fn feed_reveals_one_value_per_tick_matrix() {
    let start = Instant::now();
    let mut feed = Feed::start(vec![5, 3, 8], TICK);

    assert_eq!(feed.next().await, Some(vec![5]));
    assert!(start.elapsed() >= TICK);
    assert_eq!(feed.next().await, Some(vec![5, 3]));
    assert_eq!(feed.next().await, Some(vec![5, 3, 8]));
    assert!(start.elapsed() >= TICK * 3);
    assert_eq!(feed.next().await, None);
    assert!(!feed.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn feed_empty_input_matrix() {
    let mut feed = Feed::start(Vec::new(), TICK);
    assert_eq!(feed.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn feed_cancel_stops_emission_matrix() {
    let mut feed = Feed::start(vec![1, 2, 3, 4], TICK);
    assert_eq!(feed.next().await, Some(vec![1]));

    feed.cancel();
    assert!(feed.is_cancelled());
    assert_eq!(feed.next().await, None);
    assert_eq!(feed.next().await, None);

    tokio::time::sleep(TICK).await;
    assert!(feed.is_finished());
}

#[tokio::test(start_paused = true)]
async fn feed_restart_begins_from_empty_prefix_matrix() {
    let mut feed = Feed::start(vec![1, 2, 3], TICK);
    assert_eq!(feed.next().await, Some(vec![1]));

    feed.restart(vec![9, 8], Duration::from_millis(100));
    assert!(!feed.is_cancelled());
    assert_eq!(feed.next().await, Some(vec![9]));
    assert_eq!(feed.next().await, Some(vec![9, 8]));
    assert_eq!(feed.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn feed_zero_delay_matrix() {
    let feed = Feed::start(vec![1, 2], Duration::ZERO);
    let prefixes: Vec<Vec<i64>> = feed.collect().await;
    assert_eq!(prefixes, vec![vec![1], vec![1, 2]]);
}

#[tokio::test(start_paused = true)]
async fn feeds_are_independent_matrix() {
    let mut a = Feed::start(vec![1, 2], TICK);
    let mut b = Feed::start(vec![7], TICK);
    b.cancel();
    assert_eq!(b.next().await, None);
    assert_eq!(a.next().await, Some(vec![1]));
    assert_eq!(a.next().await, Some(vec![1, 2]));
}

#[tokio::test(start_paused = true)]
async fn play_rebuilds_each_prefix_matrix() {
    let values = vec![3, 2, 1];
    let sim = Simulator::new(StructureKind::List, SimConfig::default(), values.len());
    let frames: Vec<_> = sim.play(Feed::start(values, TICK)).collect().await;
    let frames: Vec<Snapshot> = frames.into_iter().map(Result::unwrap).collect();
    assert_eq!(
        frames,
        vec![
            Snapshot::List(vec![3]),
            Snapshot::List(vec![2, 3]),
            Snapshot::List(vec![1, 2, 3]),
        ]
    );
}
