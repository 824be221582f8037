//! Terminal preview rendering through the facade crate.

use bolt_scene::core::{generate_scene, scatter_particles, BOLT_CELLS};
use bolt_scene::input::{map_key, PreviewAction};
use bolt_scene::term::{encode_diff_into, PreviewState, SceneView, Viewport};
use bolt_scene::types::{ParticleConfig, SceneConfig};
use crossterm::event::{KeyCode, KeyEvent};

fn count_glyph(fb: &bolt_scene::term::FrameBuffer, ch: char) -> usize {
    (0..fb.height())
        .map(|y| fb.row_text(y).chars().filter(|&c| c == ch).count())
        .sum()
}

#[test]
fn test_default_bolt_renders_with_studs() {
    let scene = generate_scene(&BOLT_CELLS, &SceneConfig::default()).unwrap();
    let state = PreviewState {
        visible_blocks: scene.block_count(),
        ..PreviewState::default()
    };
    let fb = SceneView::default().render(&scene, &[], &state, Viewport::new(120, 60));

    assert!(count_glyph(&fb, '█') > 100);
    assert!(count_glyph(&fb, '◆') > 0);
    assert!(fb.row_text(59).contains("blocks 43/43"));
}

#[test]
fn test_entrance_reveals_blocks_progressively() {
    let scene = generate_scene(&BOLT_CELLS, &SceneConfig::default()).unwrap();
    let view = SceneView::default();
    let render = |visible| {
        let state = PreviewState {
            visible_blocks: visible,
            ..PreviewState::default()
        };
        view.render(&scene, &[], &state, Viewport::new(120, 60))
    };

    let none = render(0);
    let half = render(20);
    let all = render(43);
    assert_eq!(count_glyph(&none, '█'), 0);
    assert!(count_glyph(&half, '█') > 0);
    assert!(count_glyph(&all, '█') >= count_glyph(&half, '█'));

    let mut diff = Vec::new();
    encode_diff_into(&half, &all, &mut diff).unwrap();
    assert!(!diff.is_empty());
}

#[test]
fn test_particles_drawn_inside_scene() {
    let scene = generate_scene(&[], &SceneConfig::default()).unwrap();
    let particles = scatter_particles(&ParticleConfig::default());
    let fb = SceneView::default().render(
        &scene,
        &particles,
        &PreviewState::default(),
        Viewport::new(80, 36),
    );
    assert!(count_glyph(&fb, '·') > 0);
}

#[test]
fn test_preview_keys() {
    assert_eq!(
        map_key(KeyEvent::from(KeyCode::Char('f'))),
        Some(PreviewAction::Flash)
    );
    assert_eq!(
        map_key(KeyEvent::from(KeyCode::Char('p'))),
        Some(PreviewAction::TogglePause)
    );
}
