use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bolt_scene::adapter::{build_scene_tree, render_html_document, BoltConfig};
use bolt_scene::core::{generate_scene, scatter_particles, BOLT_CELLS};
use bolt_scene::term::{FrameBuffer, PreviewState, SceneView, Viewport};
use bolt_scene::types::{FlashTiming, ParticleConfig, SceneConfig};

fn bench_generate_scene(c: &mut Criterion) {
    let config = SceneConfig::default();

    c.bench_function("generate_default_bolt", |b| {
        b.iter(|| generate_scene(black_box(&BOLT_CELLS), &config))
    });
}

fn bench_build_tree(c: &mut Criterion) {
    let scene = generate_scene(&BOLT_CELLS, &SceneConfig::default()).unwrap();
    let particles = scatter_particles(&ParticleConfig::default());
    let timing = FlashTiming::default();

    c.bench_function("build_scene_tree", |b| {
        b.iter(|| build_scene_tree(black_box(&scene), &particles, &timing))
    });
}

fn bench_export_html(c: &mut Criterion) {
    let config = BoltConfig::default();

    c.bench_function("render_html_document", |b| {
        b.iter(|| render_html_document(black_box(&config), "Bolt"))
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let scene = generate_scene(&BOLT_CELLS, &SceneConfig::default()).unwrap();
    let particles = scatter_particles(&ParticleConfig::default());
    let state = PreviewState {
        visible_blocks: scene.block_count(),
        ..PreviewState::default()
    };
    let view = SceneView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("scene_view_120x40", |b| {
        b.iter(|| view.render_into(black_box(&scene), &particles, &state, viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_generate_scene,
    bench_build_tree,
    bench_export_html,
    bench_rasterize
);
criterion_main!(benches);
