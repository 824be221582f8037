//! Bolt scene (workspace facade crate).
//!
//! Re-exports the member crates as `bolt_scene::{core,adapter,term,input,engine,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use bolt_scene_adapter as adapter;
pub use bolt_scene_core as core;
pub use bolt_scene_engine as engine;
pub use bolt_scene_input as input;
pub use bolt_scene_term as term;
pub use bolt_scene_types as types;
