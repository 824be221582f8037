//! Adapter module - materializes the bolt scene into a host page
//!
//! The core crate produces plain data; this crate is the thin layer that
//! turns it into something a page can show, without ever reaching for
//! global state:
//!
//! 1. **Activation**: the host exposes a container with id `bolt-hero`.
//!    Pages without it are skipped silently.
//! 2. **Build**: the scene is generated once and appended as an element
//!    tree (glow layer, blocks with three shaded faces and an optional stud,
//!    ambient particles, flash overlay).
//! 3. **Animate**: the scene root gets `is-active` (entrance stagger), and
//!    flash events toggle `is-flash`.
//! 4. **Reveal**: page cards get `anim-ready`, then `is-visible` with a
//!    staggered `transition-delay` once they scroll into view.
//!
//! # Example
//!
//! ```
//! use bolt_scene_adapter::{apply_flash, mount_hero, BoltConfig, Document, HostPage};
//! use bolt_scene_adapter::engine::FlashEvent;
//! use bolt_scene_adapter::types::{CLASS_FLASH, FLASH_OVERLAY_ID};
//!
//! let mut page = Document::with_hero();
//! let mount = mount_hero(&mut page, &BoltConfig::default()).unwrap().unwrap();
//! assert_eq!(mount.block_count(), 43);
//!
//! apply_flash(&mut page, FlashEvent::On);
//! assert!(page.element(FLASH_OVERLAY_ID).unwrap().has_class(CLASS_FLASH));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod materialize;
pub mod mount;
pub mod tree;

pub use bolt_scene_core as core;
pub use bolt_scene_engine as engine;
pub use bolt_scene_types as types;

pub use config::BoltConfig;
pub use document::{Document, HostPage};
pub use error::ConfigError;
pub use export::{render_html_document, render_json};
pub use materialize::{build_scene_tree, stylesheet};
pub use mount::{apply_flash, apply_reveals, mount_hero, prepare_reveals, HeroMount};
pub use tree::Element;
