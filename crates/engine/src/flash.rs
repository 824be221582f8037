//! Flash schedule - when the bolt lights up
//!
//! A pure state machine over elapsed milliseconds, so it can be driven by a
//! tokio timer ([`crate::timer`]), by a synchronous render loop, or stepped
//! by hand in tests.
//!
//! Cycle:
//!
//! ```text
//! t0 = block_count * stagger + lead     first On
//! tN + duration                         Off
//! tN + uniform[interval_min, interval_max)   next On
//! ```
//!
//! The next activation is measured from the previous activation, and the
//! interval floor is longer than the flash itself, so an On never lands while
//! a flash is still showing.

use crate::core::SimpleRng;
use crate::types::FlashTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashEvent {
    On,
    Off,
}

impl FlashEvent {
    pub fn is_on(self) -> bool {
        self == FlashEvent::On
    }
}

#[derive(Debug, Clone)]
pub struct FlashSchedule {
    timing: FlashTiming,
    rng: SimpleRng,
    next_on_ms: u64,
    off_at_ms: Option<u64>,
    cycles: u64,
}

impl FlashSchedule {
    pub fn new(block_count: usize, timing: FlashTiming, seed: u32) -> Self {
        Self {
            timing,
            rng: SimpleRng::new(seed),
            next_on_ms: timing.initial_delay_ms(block_count),
            off_at_ms: None,
            cycles: 0,
        }
    }

    pub fn timing(&self) -> &FlashTiming {
        &self.timing
    }

    pub fn is_flashing(&self) -> bool {
        self.off_at_ms.is_some()
    }

    /// Number of activations so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Elapsed time of the next transition (Off while flashing, else On).
    pub fn next_deadline_ms(&self) -> u64 {
        self.off_at_ms.unwrap_or(self.next_on_ms)
    }

    /// Return the next due transition at `now_ms`, if any.
    ///
    /// Call repeatedly until `None`; a late poll can owe both an On and its Off.
    pub fn poll(&mut self, now_ms: u64) -> Option<FlashEvent> {
        if let Some(off_at) = self.off_at_ms {
            if now_ms < off_at {
                return None;
            }
            self.off_at_ms = None;
            return Some(FlashEvent::Off);
        }

        if now_ms < self.next_on_ms {
            return None;
        }

        let on_at = self.next_on_ms;
        let duration = self.timing.duration_ms as u64;
        let interval = self
            .rng
            .next_between(self.timing.interval_min_ms, self.timing.interval_max_ms)
            as u64;

        self.off_at_ms = Some(on_at + duration);
        self.next_on_ms = on_at + interval.max(duration + 1);
        self.cycles += 1;
        Some(FlashEvent::On)
    }
}
