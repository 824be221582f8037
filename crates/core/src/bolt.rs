//! The built-in lightning bolt shape.
//!
//! Laid out top-down on the grid: a three-wide stroke running down-left, a
//! six-wide crossbar on row 3, then a second stroke tapering to a one-cell
//! tip. Stacks are tallest around the crossbar.
//!
//! Every cell keeps `row < 10` and `col < 10`, which the painter's-order
//! z-index relies on.

use crate::types::{BoltCell, FlashTiming};

pub use crate::types::DEFAULT_PALETTES;

#[rustfmt::skip]
pub const BOLT_CELLS: [BoltCell; 27] = [
    BoltCell::new(0, 4, 1), BoltCell::new(0, 5, 2), BoltCell::new(0, 6, 1),
    BoltCell::new(1, 3, 1), BoltCell::new(1, 4, 2), BoltCell::new(1, 5, 2),
    BoltCell::new(2, 2, 1), BoltCell::new(2, 3, 2), BoltCell::new(2, 4, 2),
    BoltCell::new(3, 1, 1), BoltCell::new(3, 2, 2), BoltCell::new(3, 3, 3),
    BoltCell::new(3, 4, 3), BoltCell::new(3, 5, 2), BoltCell::new(3, 6, 1),
    BoltCell::new(4, 3, 2), BoltCell::new(4, 4, 2), BoltCell::new(4, 5, 1),
    BoltCell::new(5, 2, 2), BoltCell::new(5, 3, 2), BoltCell::new(5, 4, 1),
    BoltCell::new(6, 1, 1), BoltCell::new(6, 2, 2), BoltCell::new(6, 3, 1),
    BoltCell::new(7, 1, 1), BoltCell::new(7, 2, 1),
    BoltCell::new(8, 1, 1),
];

/// Number of unit blocks the given cells expand into.
pub fn block_count(cells: &[BoltCell]) -> usize {
    cells.iter().map(|c| c.height as usize).sum()
}

/// First flash delay for the built-in bolt with default timing.
pub fn default_first_flash_ms() -> u64 {
    FlashTiming::default().initial_delay_ms(block_count(&BOLT_CELLS))
}
