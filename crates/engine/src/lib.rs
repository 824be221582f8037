//! Timing module - flash cycle and entrance reveals
//!
//! - [`flash`]: pure flash schedule (first flash after the block stagger,
//!   fixed flash window, randomized repeat interval)
//! - [`timer`]: the schedule on tokio timers, with a stop handle
//! - [`driver`]: tokio runtime + timer for synchronous render loops
//! - [`reveal`]: one-shot staggered card reveals
//!
//! # Example
//!
//! ```
//! use bolt_scene_engine::{FlashEvent, FlashSchedule};
//! use bolt_scene_engine::types::FlashTiming;
//!
//! let mut schedule = FlashSchedule::new(2, FlashTiming::default(), 1);
//! assert_eq!(schedule.next_deadline_ms(), 2 * 55 + 600);
//! assert_eq!(schedule.poll(710), Some(FlashEvent::On));
//! assert_eq!(schedule.poll(910), Some(FlashEvent::Off));
//! ```

pub mod driver;
pub mod flash;
pub mod reveal;
pub mod timer;

pub use bolt_scene_core as core;
pub use bolt_scene_types as types;

pub use driver::FlashDriver;
pub use flash::{FlashEvent, FlashSchedule};
pub use reveal::{Reveal, RevealObserver, VisibilityEntry};
pub use timer::{spawn_flash_timer, FlashHandle};
