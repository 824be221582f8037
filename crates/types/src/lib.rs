//! Core types module - shared data structures and constants
//!
//! This module defines the data shared by the scene generator, the timers,
//! the visual-tree adapter and the terminal preview. Everything here is plain
//! data plus validation; no I/O.
//!
//! # Projection
//!
//! Each [`BoltCell`] is a vertical stack of unit blocks. A block at grid
//! position `(row, column)` and stack depth `z` projects to:
//!
//! ```text
//! screenX = (column - row) * half_tile_width
//! screenY = (column + row) * quarter_tile_height - z * block_depth
//! ```
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLOCK_STAGGER_MS` | 55 | Entrance delay step per block |
//! | `FLASH_LEAD_MS` | 600 | Extra wait after the last block appears |
//! | `FLASH_DURATION_MS` | 200 | Flash window |
//! | `FLASH_INTERVAL_MIN_MS` | 4500 | Shortest gap between flashes |
//! | `FLASH_INTERVAL_MAX_MS` | 6500 | Gap upper bound (exclusive) |
//! | `REVEAL_STAGGER_MS` | 100 | Card reveal delay step |
//!
//! # Examples
//!
//! ```
//! use bolt_scene_types::{adjust_color, BoltCell, Rgb, SceneConfig};
//!
//! let cell = BoltCell::new(2, 3, 2);
//! assert_eq!(cell.height, 2);
//!
//! let config = SceneConfig::default();
//! assert!(config.validate().is_ok());
//!
//! assert_eq!(adjust_color("#000000", 100).unwrap(), "#ffffff");
//! assert_eq!(Rgb::from_hex("#102030").unwrap().adjust(0), Rgb::new(16, 32, 48));
//! ```

pub mod color;
pub mod config;
pub mod error;

use serde::{Deserialize, Serialize};

pub use color::{adjust_color, Palette, Rgb, DEFAULT_PALETTES};
pub use config::{FlashTiming, ParticleConfig, RevealTiming, SceneConfig};
pub use error::{ColorError, SceneError};

/// Half the projected width of one tile, in pixels.
pub const HALF_TILE_WIDTH: f32 = 20.0;

/// A quarter of the projected tile height (half the top-face diamond), in pixels.
pub const QUARTER_TILE_HEIGHT: f32 = 10.0;

/// Vertical extrusion of one unit block, in pixels.
pub const BLOCK_DEPTH: f32 = 16.0;

/// Padding added around the bolt's bounding box.
pub const SCENE_PADDING: f32 = 30.0;

/// Scene canvas floor (width).
pub const MIN_SCENE_WIDTH: f32 = 320.0;

/// Scene canvas floor (height).
pub const MIN_SCENE_HEIGHT: f32 = 280.0;

/// Stud highlight: the top color lightened by this many percent.
pub const STUD_LIGHTEN_PERCENT: i32 = 25;

/// Entrance animation delay step per block (55ms).
pub const BLOCK_STAGGER_MS: u32 = 55;

/// Extra wait before the first flash, after the last block's entrance.
pub const FLASH_LEAD_MS: u32 = 600;

/// Flash window (200ms).
pub const FLASH_DURATION_MS: u32 = 200;

/// Shortest interval between two flash activations.
pub const FLASH_INTERVAL_MIN_MS: u32 = 4500;

/// Exclusive upper bound of the interval between two flash activations.
pub const FLASH_INTERVAL_MAX_MS: u32 = 6500;

/// Card reveal delay step within one visibility batch.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Number of ambient particles scattered around the bolt.
pub const DEFAULT_PARTICLE_COUNT: u16 = 14;

/// Id of the page element that activates the hero animation.
pub const HERO_CONTAINER_ID: &str = "bolt-hero";

/// Id of the generated scene root.
pub const SCENE_ROOT_ID: &str = "bolt-scene";

/// Id of the glow layer.
pub const GLOW_LAYER_ID: &str = "bolt-glow";

/// Id of the flash overlay.
pub const FLASH_OVERLAY_ID: &str = "bolt-flash";

/// Class of page cards that get an entrance reveal.
pub const REVEAL_TARGET_CLASS: &str = "reveal-card";

/// Set on the scene root once it is mounted; starts the entrance animation.
pub const CLASS_ACTIVE: &str = "is-active";

/// Set on the flash overlay and scene root while a flash is on.
pub const CLASS_FLASH: &str = "is-flash";

/// Set on a card once it has been revealed.
pub const CLASS_VISIBLE: &str = "is-visible";

/// Set on cards that are waiting for their reveal.
pub const CLASS_ANIM_READY: &str = "anim-ready";

/// One grid position's stack descriptor.
///
/// `height` is the number of unit blocks stacked at `(row, col)`. A height of
/// zero is tolerated and produces no blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoltCell {
    pub row: i32,
    pub col: i32,
    pub height: u32,
}

impl BoltCell {
    pub const fn new(row: i32, col: i32, height: u32) -> Self {
        Self { row, col, height }
    }
}

/// Palette index for stack depth `z`: `min(z, palette_count - 1)`.
///
/// Returns 0 when there are no palettes; callers validate the config first.
///
/// # Examples
///
/// ```
/// use bolt_scene_types::palette_index;
///
/// assert_eq!(palette_index(0, 3), 0);
/// assert_eq!(palette_index(2, 3), 2);
/// assert_eq!(palette_index(7, 3), 2);
/// ```
pub fn palette_index(z: u32, palette_count: usize) -> usize {
    (z as usize).min(palette_count.saturating_sub(1))
}

/// Entrance animation delay for the block enumerated at `order`.
pub fn block_entrance_delay_ms(order: usize, stagger_ms: u32) -> u64 {
    order as u64 * stagger_ms as u64
}
