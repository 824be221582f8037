//! Scene, flash, reveal and particle configuration.
//!
//! All structs deserialize with `#[serde(default)]` so a config file only
//! needs to name the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::color::{Palette, DEFAULT_PALETTES};
use crate::error::SceneError;
use crate::{
    BLOCK_DEPTH, BLOCK_STAGGER_MS, DEFAULT_PARTICLE_COUNT, FLASH_DURATION_MS,
    FLASH_INTERVAL_MAX_MS, FLASH_INTERVAL_MIN_MS, FLASH_LEAD_MS, HALF_TILE_WIDTH,
    MIN_SCENE_HEIGHT, MIN_SCENE_WIDTH, QUARTER_TILE_HEIGHT, REVEAL_STAGGER_MS, SCENE_PADDING,
};

/// Geometry and palettes for the scene generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub half_tile_width: f32,
    pub quarter_tile_height: f32,
    pub block_depth: f32,
    /// Ordered by stack depth; depths past the end reuse the last palette.
    pub palettes: Vec<Palette>,
    pub min_scene_width: f32,
    pub min_scene_height: f32,
    pub padding: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            half_tile_width: HALF_TILE_WIDTH,
            quarter_tile_height: QUARTER_TILE_HEIGHT,
            block_depth: BLOCK_DEPTH,
            palettes: DEFAULT_PALETTES.to_vec(),
            min_scene_width: MIN_SCENE_WIDTH,
            min_scene_height: MIN_SCENE_HEIGHT,
            padding: SCENE_PADDING,
        }
    }
}

impl SceneConfig {
    /// Projected width of one block (`2 * half_tile_width`).
    pub fn block_width(&self) -> f32 {
        2.0 * self.half_tile_width
    }

    /// Projected height of one block (`2 * quarter_tile_height + block_depth`).
    pub fn block_height(&self) -> f32 {
        2.0 * self.quarter_tile_height + self.block_depth
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.palettes.is_empty() {
            return Err(SceneError::NoPalettes);
        }

        let positive = [
            ("half_tile_width", self.half_tile_width),
            ("quarter_tile_height", self.quarter_tile_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::InvalidDimension { name, value });
            }
        }

        let non_negative = [
            ("block_depth", self.block_depth),
            ("min_scene_width", self.min_scene_width),
            ("min_scene_height", self.min_scene_height),
            ("padding", self.padding),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidDimension { name, value });
            }
        }

        Ok(())
    }
}

/// Timing of the periodic flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashTiming {
    /// Per-block entrance stagger; also drives the first flash delay.
    pub stagger_ms: u32,
    pub lead_ms: u32,
    pub duration_ms: u32,
    pub interval_min_ms: u32,
    /// Exclusive, unless equal to `interval_min_ms`.
    pub interval_max_ms: u32,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            stagger_ms: BLOCK_STAGGER_MS,
            lead_ms: FLASH_LEAD_MS,
            duration_ms: FLASH_DURATION_MS,
            interval_min_ms: FLASH_INTERVAL_MIN_MS,
            interval_max_ms: FLASH_INTERVAL_MAX_MS,
        }
    }
}

impl FlashTiming {
    /// First activation: once every block has started its entrance, plus the lead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_scene_types::FlashTiming;
    ///
    /// assert_eq!(FlashTiming::default().initial_delay_ms(10), 10 * 55 + 600);
    /// ```
    pub fn initial_delay_ms(&self, block_count: usize) -> u64 {
        block_count as u64 * self.stagger_ms as u64 + self.lead_ms as u64
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.interval_min_ms > self.interval_max_ms {
            return Err(SceneError::InvalidFlashInterval {
                min_ms: self.interval_min_ms,
                max_ms: self.interval_max_ms,
            });
        }
        if self.duration_ms == 0 || self.duration_ms >= self.interval_min_ms {
            return Err(SceneError::InvalidFlashDuration {
                duration_ms: self.duration_ms,
                interval_min_ms: self.interval_min_ms,
            });
        }
        Ok(())
    }
}

/// Timing of the card entrance reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub stagger_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger_ms: REVEAL_STAGGER_MS,
        }
    }
}

/// Ambient particle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: u16,
    pub seed: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            seed: 1,
        }
    }
}
