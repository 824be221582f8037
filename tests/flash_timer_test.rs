//! Flash timing on tokio's paused clock.

use bolt_scene::core::bolt::default_first_flash_ms;
use bolt_scene::core::{block_count, BOLT_CELLS};
use bolt_scene::engine::{spawn_flash_timer, FlashEvent, FlashSchedule};
use bolt_scene::types::{FlashTiming, FLASH_INTERVAL_MAX_MS, FLASH_INTERVAL_MIN_MS};
use tokio::sync::mpsc;
use tokio::time::{self, Duration, Instant};

#[tokio::test(start_paused = true)]
async fn test_default_bolt_first_flash_timing() {
    let n = block_count(&BOLT_CELLS);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();
    let _handle = spawn_flash_timer(FlashSchedule::new(n, FlashTiming::default(), 7), tx);

    assert_eq!(rx.recv().await, Some(FlashEvent::On));
    let on_ms = start.elapsed().as_millis() as u64;
    assert_eq!(default_first_flash_ms(), 2965);
    assert!((2965..2967).contains(&on_ms), "on at {on_ms}");

    assert_eq!(rx.recv().await, Some(FlashEvent::Off));
    let off_ms = start.elapsed().as_millis() as u64;
    assert!((3165..3167).contains(&off_ms), "off at {off_ms}");

    assert_eq!(rx.recv().await, Some(FlashEvent::On));
    let next_ms = start.elapsed().as_millis() as u64;
    let gap = next_ms - on_ms;
    assert!(
        (FLASH_INTERVAL_MIN_MS as u64 - 2..FLASH_INTERVAL_MAX_MS as u64 + 2).contains(&gap),
        "gap {gap}"
    );
}

#[tokio::test(start_paused = true)]
async fn test_no_flash_before_entrance_finishes() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = spawn_flash_timer(FlashSchedule::new(43, FlashTiming::default(), 1), tx);

    time::sleep(Duration::from_millis(2900)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stopped_timer_never_fires() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_flash_timer(FlashSchedule::new(1, FlashTiming::default(), 1), tx);

    time::sleep(Duration::from_millis(100)).await;
    handle.stop();
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_handle_cancels_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    drop(spawn_flash_timer(FlashSchedule::new(1, FlashTiming::default(), 1), tx));
    assert_eq!(rx.recv().await, None);
}

#[test]
fn test_schedule_is_deterministic_per_seed() {
    let run = |seed| {
        let mut s = FlashSchedule::new(43, FlashTiming::default(), seed);
        let mut ons = Vec::new();
        while ons.len() < 5 {
            let now = s.next_deadline_ms();
            if s.poll(now) == Some(FlashEvent::On) {
                ons.push(now);
            }
        }
        ons
    };
    assert_eq!(run(11), run(11));
    assert_eq!(run(11)[0], default_first_flash_ms());
}
