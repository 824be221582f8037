//! Widget configuration.
//!
//! Loaded from a JSON file; every section is optional and falls back to the
//! built-in defaults.
//!
//! # Environment Variables
//!
//! - `BOLT_SCENE_CONFIG`: path of a JSON config file
//! - `BOLT_SCENE_SEED`: seed for flash intervals and particle placement
//!
//! # Example
//!
//! ```json
//! {
//!   "scene": { "padding": 40 },
//!   "flash": { "interval_min_ms": 3000, "interval_max_ms": 4000 },
//!   "stacking": "depth_sort",
//!   "cells": [ { "row": 0, "col": 0, "height": 2 } ]
//! }
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{StackingOrder, BOLT_CELLS};
use crate::error::ConfigError;
use crate::types::{BoltCell, FlashTiming, ParticleConfig, RevealTiming, SceneConfig};

pub const CONFIG_PATH_ENV: &str = "BOLT_SCENE_CONFIG";
pub const SEED_ENV: &str = "BOLT_SCENE_SEED";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoltConfig {
    pub scene: SceneConfig,
    pub flash: FlashTiming,
    pub reveal: RevealTiming,
    pub particles: ParticleConfig,
    pub stacking: StackingOrder,
    /// Replaces the built-in bolt shape when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<BoltCell>>,
    /// Flash interval seed.
    pub seed: u32,
}

impl BoltConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded bolt config");
        Self::from_json_str(&raw)
    }

    /// Defaults, overridden by `BOLT_SCENE_CONFIG` and `BOLT_SCENE_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`BoltConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup(CONFIG_PATH_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_seed_override(&lookup);
        config.validate()?;
        Ok(config)
    }

    /// [`BoltConfig::load`], then the `BOLT_SCENE_SEED` override.
    pub fn load_with_env(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_seed_override(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply `BOLT_SCENE_SEED` read through `lookup`. Invalid values are
    /// logged and ignored.
    pub fn apply_seed_override(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(seed) => self.set_seed(seed),
                Err(_) => warn!(value = %raw, "ignoring invalid {SEED_ENV}"),
            }
        }
    }

    /// Seed both the flash intervals and the particle field.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        self.particles.seed = seed;
    }

    /// Configured cells, or the built-in bolt.
    pub fn cells(&self) -> &[BoltCell] {
        self.cells.as_deref().unwrap_or(&BOLT_CELLS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()?;
        self.flash.validate()?;
        Ok(())
    }
}
