//! Flash driver - bridges the async flash timer into a sync render loop.
//!
//! The terminal preview ticks on its own thread; the driver owns a small
//! tokio runtime, runs the timer there and hands events back through a
//! channel the loop drains with [`FlashDriver::try_recv`].

use std::io;

use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tracing::debug;

use crate::flash::{FlashEvent, FlashSchedule};
use crate::timer::{spawn_flash_timer, FlashHandle};

pub struct FlashDriver {
    // Dropped before the runtime so the task is cancelled while it still exists.
    handle: Option<FlashHandle>,
    events: mpsc::UnboundedReceiver<FlashEvent>,
    rt: Runtime,
}

impl FlashDriver {
    pub fn start(schedule: FlashSchedule) -> io::Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;
        let (handle, events) = Self::spawn(&rt, schedule);
        Ok(Self {
            handle: Some(handle),
            events,
            rt,
        })
    }

    fn spawn(
        rt: &Runtime,
        schedule: FlashSchedule,
    ) -> (FlashHandle, mpsc::UnboundedReceiver<FlashEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let _guard = rt.enter();
        (spawn_flash_timer(schedule, tx), rx)
    }

    pub fn try_recv(&mut self) -> Option<FlashEvent> {
        self.events.try_recv().ok()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer. Undelivered events are discarded.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
            while self.events.try_recv().is_ok() {}
            debug!("flash driver stopped");
        }
    }

    /// Replace the running schedule (if any) with a fresh one.
    pub fn restart(&mut self, schedule: FlashSchedule) {
        self.stop();
        let (handle, events) = Self::spawn(&self.rt, schedule);
        self.handle = Some(handle);
        self.events = events;
    }
}

impl Drop for FlashDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
