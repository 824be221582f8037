//! Key mapping from terminal events to preview actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::FLASH_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    /// Fire one flash now (lasts `FLASH_DURATION_MS`).
    Flash,
    /// Stop or restart the flash timer.
    TogglePause,
    /// Scatter the particles again with a new seed.
    Reseed,
    /// Replay the block entrance.
    Replay,
}

impl PreviewAction {
    /// How long a manual flash stays on.
    pub const MANUAL_FLASH_MS: u32 = FLASH_DURATION_MS;
}

/// Map keyboard input to preview actions. Key releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<PreviewAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => {
            Some(PreviewAction::Flash)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(PreviewAction::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PreviewAction::Reseed),
        KeyCode::Enter => Some(PreviewAction::Replay),
        _ => None,
    }
}

/// Check if key should quit the preview.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
