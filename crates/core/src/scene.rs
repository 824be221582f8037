//! Scene generator - isometric layout of the bolt
//!
//! [`generate_scene`] expands every [`BoltCell`] into its stack of unit
//! blocks, projects each block to screen space, measures the bounding box of
//! the whole set and shifts every block by one shared offset so the bolt sits
//! centered in a padded canvas.
//!
//! The function is pure: same cells and config, same scene. Materializing
//! the result (DOM-like tree, terminal framebuffer) happens elsewhere.

use serde::{Deserialize, Serialize};

use crate::types::{
    palette_index, BoltCell, Palette, Rgb, SceneConfig, SceneError, STUD_LIGHTEN_PERCENT,
};

/// How blocks are layered on top of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingOrder {
    /// `row * 10 + col + z * 100`.
    ///
    /// A fixed painter's-order approximation. It layers the built-in bolt
    /// correctly because that shape is hand-authored to avoid ambiguous
    /// overlaps and keeps rows and columns under 10; it is not a general
    /// depth sort.
    #[default]
    Painter,
    /// Rank blocks by `(row + col, z, row, enumeration order)`.
    ///
    /// Back-to-front by diagonal, bottom-to-top inside a diagonal. Correct
    /// for arbitrary grid shapes; z-indices are dense ranks starting at 0.
    DepthSort,
}

/// One rendered unit block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitBlock {
    pub row: i32,
    pub col: i32,
    /// Depth inside the stack, 0 at the bottom.
    pub z: u32,
    /// Enumeration index over the whole scene (drives entrance stagger).
    pub order: usize,
    /// Left edge of the block's bounding box, after centering.
    pub x: f32,
    /// Top edge of the block's bounding box, after centering.
    pub y: f32,
    pub z_index: i32,
    pub palette_index: usize,
    pub palette: Palette,
    pub is_topmost: bool,
    /// Stud highlight color; only set on the topmost block of a stack.
    pub stud: Option<Rgb>,
}

/// Generated scene: canvas size plus positioned blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub block_width: f32,
    pub block_height: f32,
    /// Half the top-face diamond height; with `block_depth`, locates the faces
    /// inside a block's box.
    pub quarter_tile_height: f32,
    pub block_depth: f32,
    /// Cell order, z ascending within a cell.
    pub blocks: Vec<UnitBlock>,
}

impl Scene {
    /// Scene with no blocks, sized to the configured minimum.
    pub fn empty(config: &SceneConfig) -> Self {
        Self {
            width: config.min_scene_width,
            height: config.min_scene_height,
            block_width: config.block_width(),
            block_height: config.block_height(),
            quarter_tile_height: config.quarter_tile_height,
            block_depth: config.block_depth,
            blocks: Vec::new(),
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in the order they should be painted (ascending z-index;
    /// enumeration order breaks ties).
    pub fn paint_order(&self) -> Vec<&UnitBlock> {
        let mut sorted: Vec<&UnitBlock> = self.blocks.iter().collect();
        sorted.sort_by_key(|b| (b.z_index, b.order));
        sorted
    }

    pub fn topmost(&self) -> impl Iterator<Item = &UnitBlock> {
        self.blocks.iter().filter(|b| b.is_topmost)
    }

    /// Which face of `block` covers the scene point `(x, y)`, if any.
    ///
    /// The box of a block holds the top diamond (`2 * quarter_tile_height`
    /// tall) above two parallelograms extruded down by `block_depth`.
    pub fn face_at(&self, block: &UnitBlock, x: f32, y: f32) -> Option<Face> {
        let hw = self.block_width / 2.0;
        let qh = self.quarter_tile_height;
        let u = x - block.x;
        let v = y - block.y;
        if u < 0.0 || v < 0.0 || u > self.block_width || v > self.block_height {
            return None;
        }

        if (u - hw).abs() / hw + (v - qh).abs() / qh <= 1.0 {
            return Some(Face::Top);
        }

        let slope = qh / hw;
        let (edge, face) = if u <= hw {
            (qh + u * slope, Face::Left)
        } else {
            (2.0 * qh - (u - hw) * slope, Face::Right)
        };
        (v >= edge && v <= edge + self.block_depth).then_some(face)
    }

    /// Color of `face` on `block`.
    pub fn face_color(block: &UnitBlock, face: Face) -> Rgb {
        match face {
            Face::Top => block.palette.top,
            Face::Left => block.palette.left,
            Face::Right => block.palette.right,
        }
    }
}

/// The three visible faces of an isometric block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Right,
}

/// Raw (uncentered) screen position of a block.
///
/// # Examples
///
/// ```
/// use bolt_scene_core::scene::project;
/// use bolt_scene_core::types::SceneConfig;
///
/// let c = SceneConfig::default();
/// assert_eq!(project(0, 0, 0, &c), (0.0, 0.0));
/// assert_eq!(project(1, 3, 0, &c), (40.0, 40.0));
/// assert_eq!(project(0, 0, 1, &c), (0.0, -16.0));
/// ```
pub fn project(row: i32, col: i32, z: u32, config: &SceneConfig) -> (f32, f32) {
    let (row, col) = (i64::from(row), i64::from(col));
    let x = (col - row) as f32 * config.half_tile_width;
    let y = (col + row) as f32 * config.quarter_tile_height - z as f32 * config.block_depth;
    (x, y)
}

/// Painter's-order z-index: `row * 10 + col + z * 100`.
pub fn painter_z_index(row: i32, col: i32, z: u32) -> i32 {
    row.saturating_mul(10)
        .saturating_add(col)
        .saturating_add((z as i32).saturating_mul(100))
}

/// Generate the scene with the default [`StackingOrder::Painter`] layering.
pub fn generate_scene(cells: &[BoltCell], config: &SceneConfig) -> Result<Scene, SceneError> {
    generate_scene_with(cells, config, StackingOrder::Painter)
}

pub fn generate_scene_with(
    cells: &[BoltCell],
    config: &SceneConfig,
    stacking: StackingOrder,
) -> Result<Scene, SceneError> {
    config.validate()?;

    let block_width = config.block_width();
    let block_height = config.block_height();

    let mut blocks = Vec::with_capacity(cells.iter().map(|c| c.height as usize).sum());
    for cell in cells {
        for z in 0..cell.height {
            let (x, y) = project(cell.row, cell.col, z, config);
            let palette_index = palette_index(z, config.palettes.len());
            let palette = config.palettes[palette_index];
            let is_topmost = z + 1 == cell.height;

            blocks.push(UnitBlock {
                row: cell.row,
                col: cell.col,
                z,
                order: blocks.len(),
                x,
                y,
                z_index: painter_z_index(cell.row, cell.col, z),
                palette_index,
                palette,
                is_topmost,
                stud: is_topmost.then(|| palette.top.adjust(STUD_LIGHTEN_PERCENT)),
            });
        }
    }

    // No blocks means no bounding box; fall back to the minimum canvas.
    if blocks.is_empty() {
        return Ok(Scene::empty(config));
    }

    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for b in &blocks {
        min_x = min_x.min(b.x);
        max_x = max_x.max(b.x + block_width);
        min_y = min_y.min(b.y);
        max_y = max_y.max(b.y + block_height);
    }

    let bounds_w = max_x - min_x;
    let bounds_h = max_y - min_y;
    let width = (bounds_w + 2.0 * config.padding).max(config.min_scene_width);
    let height = (bounds_h + 2.0 * config.padding).max(config.min_scene_height);

    let offset_x = (width - bounds_w) / 2.0 - min_x;
    let offset_y = (height - bounds_h) / 2.0 - min_y;
    for b in &mut blocks {
        b.x += offset_x;
        b.y += offset_y;
    }

    if stacking == StackingOrder::DepthSort {
        assign_depth_ranks(&mut blocks);
    }

    Ok(Scene {
        width,
        height,
        block_width,
        block_height,
        quarter_tile_height: config.quarter_tile_height,
        block_depth: config.block_depth,
        blocks,
    })
}

fn assign_depth_ranks(blocks: &mut [UnitBlock]) {
    let mut ranked: Vec<usize> = (0..blocks.len()).collect();
    ranked.sort_by_key(|&i| {
        let b = &blocks[i];
        (b.row as i64 + b.col as i64, b.z, b.row, b.order)
    });
    for (rank, i) in ranked.into_iter().enumerate() {
        blocks[i].z_index = rank as i32;
    }
}
