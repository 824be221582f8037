//! Terminal input for the scene preview.
//!
//! Maps `crossterm` key events into [`PreviewAction`]s. Independent of the
//! renderer so the preview loop can be driven from tests.

pub mod map;

pub use bolt_scene_types as types;

pub use map::{map_key, should_quit, PreviewAction};
