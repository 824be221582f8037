//! Flash timer - runs a [`FlashSchedule`] on tokio timers.
//!
//! [`spawn_flash_timer`] returns a [`FlashHandle`]. Stopping or dropping the
//! handle cancels every pending and recurring timer, so a host that removes
//! the hero container does not leak a task.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, trace};

use crate::flash::{FlashEvent, FlashSchedule};

/// Stop handle for a running flash timer.
#[derive(Debug)]
pub struct FlashHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl FlashHandle {
    /// Cancel all pending timers. Events already sent stay in the channel.
    pub fn stop(mut self) {
        self.cancel();
    }

    /// True once the timer task has exited (stopped, or its receiver closed).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    fn cancel(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.task.abort();
    }
}

impl Drop for FlashHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn the timer on the current tokio runtime.
///
/// Events go to `events`; the task ends when the handle is stopped or the
/// receiver is dropped.
pub fn spawn_flash_timer(
    schedule: FlashSchedule,
    events: mpsc::UnboundedSender<FlashEvent>,
) -> FlashHandle {
    let (stop_tx, stop_rx) = oneshot::channel();
    let task = tokio::spawn(run_flash_timer(schedule, events, stop_rx));
    FlashHandle {
        stop_tx: Some(stop_tx),
        task,
    }
}

async fn run_flash_timer(
    mut schedule: FlashSchedule,
    events: mpsc::UnboundedSender<FlashEvent>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let start = Instant::now();
    debug!(first_flash_ms = schedule.next_deadline_ms(), "flash timer started");

    loop {
        let deadline = start + Duration::from_millis(schedule.next_deadline_ms());
        tokio::select! {
            _ = &mut stop_rx => {
                debug!(cycles = schedule.cycles(), "flash timer stopped");
                return;
            }
            _ = time::sleep_until(deadline) => {}
        }

        let now_ms = start.elapsed().as_millis() as u64;
        while let Some(event) = schedule.poll(now_ms) {
            trace!(?event, now_ms, "flash transition");
            if events.send(event).is_err() {
                debug!("flash receiver dropped, timer exiting");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlashTiming;

    #[tokio::test(start_paused = true)]
    async fn first_flash_fires_after_block_stagger() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _handle = spawn_flash_timer(FlashSchedule::new(4, FlashTiming::default(), 1), tx);

        assert_eq!(rx.recv().await, Some(FlashEvent::On));
        let on_ms = start.elapsed().as_millis();
        assert!((820..822).contains(&on_ms), "on at {on_ms}");

        assert_eq!(rx.recv().await, Some(FlashEvent::Off));
        let off_ms = start.elapsed().as_millis();
        assert!((1020..1022).contains(&off_ms), "off at {off_ms}");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_pending_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_flash_timer(FlashSchedule::new(0, FlashTiming::default(), 1), tx);

        time::sleep(Duration::from_millis(100)).await;
        handle.stop();

        // Sender is dropped with the task; nothing was ever due.
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn timer_runs_on_a_plain_runtime() {
        let timing = FlashTiming {
            stagger_ms: 1,
            lead_ms: 5,
            duration_ms: 5,
            interval_min_ms: 20,
            interval_max_ms: 30,
        };
        let events = tokio_test::block_on(async {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let handle = spawn_flash_timer(FlashSchedule::new(3, timing, 1), tx);
            let mut seen = Vec::new();
            while seen.len() < 4 {
                seen.push(rx.recv().await.unwrap());
            }
            handle.stop();
            seen
        });
        assert_eq!(
            events,
            vec![FlashEvent::On, FlashEvent::Off, FlashEvent::On, FlashEvent::Off]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_receiver_ends_task() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn_flash_timer(FlashSchedule::new(0, FlashTiming::default(), 1), tx);
        drop(rx);

        time::sleep(Duration::from_millis(700)).await;
        tokio::task::yield_now().await;
        assert!(handle.is_finished());
    }
}
