//! Terminal preview of the bolt scene.
//!
//! The scene is rasterized into a framebuffer of styled cells and flushed
//! through crossterm. No ratatui widgets; the view owns every cell.
//!
//! - [`fb`]: cell grid
//! - [`scene_view`]: scene -> cells (pure, testable)
//! - [`renderer`]: cells -> terminal bytes (full redraw then diffs)

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use bolt_scene_core as core;
pub use bolt_scene_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{PreviewState, SceneView, Viewport};
