//! Core scene logic - pure, deterministic, and testable
//!
//! This crate turns the bolt's literal cell table into a positioned,
//! layered, colored set of isometric unit blocks. It has **no dependencies**
//! on rendering, timers, or I/O:
//!
//! - **Deterministic**: same cells + config produce the same scene
//! - **Host-agnostic**: the result is plain data; adapters turn it into a
//!   DOM-like tree or a terminal framebuffer
//!
//! # Module Structure
//!
//! - [`bolt`]: the built-in bolt shape and palettes
//! - [`scene`]: projection, bounding box, centering, stacking order
//! - [`particles`]: ambient particle field
//! - [`rng`]: seeded LCG shared with the flash timer
//!
//! # Example
//!
//! ```
//! use bolt_scene_core::{generate_scene, BOLT_CELLS};
//! use bolt_scene_core::types::SceneConfig;
//!
//! let config = SceneConfig::default();
//! let scene = generate_scene(&BOLT_CELLS, &config).unwrap();
//!
//! assert_eq!(scene.block_count(), 43);
//! assert!(scene.width >= config.min_scene_width);
//! assert!(scene.height >= config.min_scene_height);
//! ```

pub mod bolt;
pub mod particles;
pub mod rng;
pub mod scene;

pub use bolt_scene_types as types;

pub use bolt::{block_count, BOLT_CELLS, DEFAULT_PALETTES};
pub use particles::{scatter_particles, Particle};
pub use rng::SimpleRng;
pub use scene::{generate_scene, generate_scene_with, Face, Scene, StackingOrder, UnitBlock};
