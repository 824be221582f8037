//! SceneView: rasterizes a generated [`Scene`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each terminal cell samples the scene at its
//! center; blocks are painted in ascending z-index so later blocks cover
//! earlier ones, the same way the browser stacks them.

use crate::core::{Face, Particle, Scene};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Animation state shown by the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewState {
    pub flashing: bool,
    pub paused: bool,
    /// Blocks whose entrance has started (all of them once the stagger is over).
    pub visible_blocks: usize,
}

const BACKGROUND: Rgb = Rgb::new(12, 16, 32);
const FLASH_BACKGROUND: Rgb = Rgb::new(44, 52, 88);
const PARTICLE: Rgb = Rgb::new(255, 224, 102);
const STATUS_FG: Rgb = Rgb::new(170, 180, 200);
const FLASH_LIGHTEN_PERCENT: i32 = 35;

pub struct SceneView {
    /// Scene pixels per terminal column.
    px_per_col: f32,
    /// Scene pixels per terminal row.
    px_per_row: f32,
}

impl Default for SceneView {
    fn default() -> Self {
        // Terminal glyphs are roughly twice as tall as wide.
        Self::new(4.0, 8.0)
    }
}

impl SceneView {
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            px_per_col: px_per_col.max(0.5),
            px_per_row: px_per_row.max(0.5),
        }
    }

    /// Size of the scene in terminal cells.
    pub fn scene_cells(&self, scene: &Scene) -> (u16, u16) {
        let cols = (scene.width / self.px_per_col).ceil() as u16;
        let rows = (scene.height / self.px_per_row).ceil() as u16;
        (cols, rows)
    }

    pub fn render(
        &self,
        scene: &Scene,
        particles: &[Particle],
        state: &PreviewState,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, particles, state, viewport, &mut fb);
        fb
    }

    pub fn render_into(
        &self,
        scene: &Scene,
        particles: &[Particle],
        state: &PreviewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        // Last row is reserved for the status line.
        let canvas_h = viewport.height.saturating_sub(1);
        let (cols, rows) = self.scene_cells(scene);
        let origin_x = (viewport.width.saturating_sub(cols) / 2) as i32;
        let origin_y = (canvas_h.saturating_sub(rows) / 2) as i32;

        let bg = if state.flashing {
            FLASH_BACKGROUND
        } else {
            BACKGROUND
        };
        let visible_rows = rows.min(canvas_h);
        fb.fill_rect(
            origin_x,
            origin_y,
            cols,
            visible_rows,
            CellStyle::solid(bg).into_cell(' '),
        );

        let particle_style = CellStyle {
            fg: PARTICLE,
            bg,
            bold: false,
            dim: true,
        };
        for p in particles {
            let x = origin_x + (p.left_pct / 100.0 * cols as f32) as i32;
            let y = origin_y + (p.top_pct / 100.0 * rows as f32) as i32;
            if y < origin_y + visible_rows as i32 {
                fb.set(x, y, particle_style.into_cell('·'));
            }
        }

        for block in scene.paint_order() {
            if block.order >= state.visible_blocks {
                continue;
            }
            let palette = if state.flashing {
                block.palette.adjust(FLASH_LIGHTEN_PERCENT)
            } else {
                block.palette
            };

            let c0 = (block.x / self.px_per_col).floor() as i32;
            let c1 = ((block.x + scene.block_width) / self.px_per_col).ceil() as i32;
            let r0 = (block.y / self.px_per_row).floor() as i32;
            let r1 = ((block.y + scene.block_height) / self.px_per_row).ceil() as i32;

            for cy in r0..r1 {
                if cy >= visible_rows as i32 {
                    break;
                }
                for cx in c0..c1 {
                    let sx = (cx as f32 + 0.5) * self.px_per_col;
                    let sy = (cy as f32 + 0.5) * self.px_per_row;
                    if let Some(face) = scene.face_at(block, sx, sy) {
                        let color = match face {
                            Face::Top => palette.top,
                            Face::Left => palette.left,
                            Face::Right => palette.right,
                        };
                        let cell = CellStyle::solid(color).into_cell('█');
                        fb.set(origin_x + cx, origin_y + cy, cell);
                    }
                }
            }

            if let Some(stud) = block.stud {
                let sx = block.x + scene.block_width / 2.0;
                let sy = block.y + scene.quarter_tile_height;
                let cx = (sx / self.px_per_col) as i32;
                let cy = (sy / self.px_per_row) as i32;
                if cy < visible_rows as i32 {
                    let stud = if state.flashing {
                        stud.adjust(FLASH_LIGHTEN_PERCENT)
                    } else {
                        stud
                    };
                    fb.set(
                        origin_x + cx,
                        origin_y + cy,
                        CellStyle::text(stud, palette.top).into_cell('◆'),
                    );
                }
            }
        }

        if viewport.height > 0 {
            let status = format!(
                " blocks {}/{}  flash {}{}  [f] flash  [p] pause  [r] reseed  [q] quit",
                state.visible_blocks.min(scene.block_count()),
                scene.block_count(),
                if state.flashing { "ON " } else { "off" },
                if state.paused { "  (paused)" } else { "" },
            );
            fb.put_str(
                0,
                viewport.height as i32 - 1,
                &status,
                CellStyle::text(STATUS_FG, Rgb::BLACK),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_scene;
    use crate::types::{BoltCell, SceneConfig};

    fn one_block() -> Scene {
        generate_scene(&[BoltCell::new(0, 0, 1)], &SceneConfig::default()).unwrap()
    }

    fn all_visible(scene: &Scene) -> PreviewState {
        PreviewState {
            visible_blocks: scene.block_count(),
            ..PreviewState::default()
        }
    }

    #[test]
    fn scene_size_in_cells() {
        let view = SceneView::default();
        assert_eq!(view.scene_cells(&one_block()), (80, 35));
    }

    #[test]
    fn block_faces_are_drawn_with_palette_colors() {
        let scene = one_block();
        let view = SceneView::default();
        let fb = view.render(&scene, &[], &all_visible(&scene), Viewport::new(80, 36));

        // Block box at (140,122) px -> cols 35..45, rows 15..20.
        let b = scene.blocks[0];
        let top = fb.get(39, 15).unwrap();
        assert_eq!(top.ch, '█');
        assert_eq!(top.style.fg, b.palette.top);

        let left = fb.get(36, 18).unwrap();
        assert_eq!(left.style.fg, b.palette.left);
        let right = fb.get(43, 18).unwrap();
        assert_eq!(right.style.fg, b.palette.right);
    }

    #[test]
    fn stud_marks_topmost_block() {
        let scene = one_block();
        let state = all_visible(&scene);
        let fb = SceneView::default().render(&scene, &[], &state, Viewport::new(80, 36));
        // Stud point (160, 132) px -> cell (40, 16).
        assert_eq!(fb.get(40, 16).unwrap().ch, '◆');
    }

    #[test]
    fn hidden_blocks_are_not_drawn() {
        let scene = one_block();
        let state = PreviewState::default();
        let fb = SceneView::default().render(&scene, &[], &state, Viewport::new(80, 36));
        assert_eq!(fb.get(39, 15).unwrap().ch, ' ');
    }

    #[test]
    fn flash_brightens_blocks_and_background() {
        let scene = one_block();
        let mut state = all_visible(&scene);
        state.flashing = true;
        let fb = SceneView::default().render(&scene, &[], &state, Viewport::new(80, 36));

        let top = fb.get(39, 15).unwrap();
        let expected = scene.blocks[0].palette.top.adjust(FLASH_LIGHTEN_PERCENT);
        assert_eq!(top.style.fg, expected);
        assert_eq!(fb.get(1, 1).unwrap().style.bg, FLASH_BACKGROUND);
    }

    #[test]
    fn status_line_reports_state() {
        let scene = one_block();
        let mut state = all_visible(&scene);
        state.paused = true;
        let fb = SceneView::default().render(&scene, &[], &state, Viewport::new(100, 36));
        let status = fb.row_text(35);
        assert!(status.contains("blocks 1/1"));
        assert!(status.contains("(paused)"));
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let scene = one_block();
        let view = SceneView::default();
        for (w, h) in [(0, 0), (1, 1), (10, 3), (200, 2)] {
            let fb = view.render(&scene, &[], &all_visible(&scene), Viewport::new(w, h));
            assert_eq!((fb.width(), fb.height()), (w, h));
        }
    }
}
