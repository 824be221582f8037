//! Scene -> element tree.
//!
//! Layout of the generated subtree:
//!
//! ```text
//! div#bolt-scene.bolt-scene            width/height
//!   div#bolt-glow.bolt-glow
//!   div.bolt-blocks
//!     div.bolt-block[.bolt-block--top] left/top/z-index/animation-delay
//!       div.bolt-face.bolt-face--top   background
//!       div.bolt-face.bolt-face--left
//!       div.bolt-face.bolt-face--right
//!       div.bolt-stud                  topmost blocks only
//!   div.bolt-particles
//!     div.bolt-particle                left/top %, size, delay, duration
//!   div#bolt-flash.bolt-flash
//! ```
//!
//! Only positions and colors are inline; everything else is left to the
//! stylesheet (see [`stylesheet`]).

use crate::core::{Particle, Scene, UnitBlock};
use crate::tree::Element;
use crate::types::{
    block_entrance_delay_ms, FlashTiming, SceneConfig, FLASH_OVERLAY_ID, GLOW_LAYER_ID,
    SCENE_ROOT_ID,
};

pub fn build_scene_tree(scene: &Scene, particles: &[Particle], flash: &FlashTiming) -> Element {
    let mut blocks = Element::div().with_class("bolt-blocks");
    for block in &scene.blocks {
        blocks.push(block_element(block, scene, flash.stagger_ms));
    }

    let mut field = Element::div().with_class("bolt-particles");
    for p in particles {
        field.push(particle_element(p));
    }

    Element::div()
        .with_id(SCENE_ROOT_ID)
        .with_class("bolt-scene")
        .with_style("width", px(scene.width))
        .with_style("height", px(scene.height))
        .with_child(Element::div().with_id(GLOW_LAYER_ID).with_class("bolt-glow"))
        .with_child(blocks)
        .with_child(field)
        .with_child(Element::div().with_id(FLASH_OVERLAY_ID).with_class("bolt-flash"))
}

fn block_element(block: &UnitBlock, scene: &Scene, stagger_ms: u32) -> Element {
    let face = |side: &str, color: String| {
        Element::div()
            .with_class("bolt-face")
            .with_class(&format!("bolt-face--{side}"))
            .with_style("background", color)
    };

    let mut el = Element::div()
        .with_class("bolt-block")
        .with_style("left", px(block.x))
        .with_style("top", px(block.y))
        .with_style("width", px(scene.block_width))
        .with_style("height", px(scene.block_height))
        .with_style("z-index", block.z_index.to_string())
        .with_style(
            "animation-delay",
            ms(block_entrance_delay_ms(block.order, stagger_ms)),
        )
        .with_child(face("top", block.palette.top.to_hex()))
        .with_child(face("left", block.palette.left.to_hex()))
        .with_child(face("right", block.palette.right.to_hex()));

    if let Some(stud) = block.stud {
        el.add_class("bolt-block--top");
        el.push(
            Element::div()
                .with_class("bolt-stud")
                .with_style("background", stud.to_hex()),
        );
    }
    el
}

fn particle_element(p: &Particle) -> Element {
    let size = px(p.size_px as f32);
    Element::div()
        .with_class("bolt-particle")
        .with_style("left", pct(p.left_pct))
        .with_style("top", pct(p.top_pct))
        .with_style("width", size.clone())
        .with_style("height", size)
        .with_style("animation-delay", ms(p.delay_ms as u64))
        .with_style("animation-duration", ms(p.duration_ms as u64))
}

/// Default stylesheet for the generated tree.
///
/// Face outlines are clip-path polygons in percentages of the block box, so
/// they depend on the tile proportions in `config`.
pub fn stylesheet(config: &SceneConfig) -> String {
    let h = config.block_height();
    let q = config.quarter_tile_height / h * 100.0;
    let q2 = 2.0 * q;
    let qd = (config.quarter_tile_height + config.block_depth) / h * 100.0;

    format!(
        r#".hero {{ display: flex; justify-content: center; }}
.bolt-scene {{ position: relative; overflow: hidden; }}
.bolt-glow {{ position: absolute; inset: 10%; border-radius: 50%; background: radial-gradient(circle, rgba(127, 178, 255, 0.35), transparent 70%); transition: opacity 120ms; opacity: 0.6; }}
.bolt-scene.is-flash .bolt-glow {{ opacity: 1; }}
.bolt-blocks {{ position: absolute; inset: 0; }}
.bolt-block {{ position: absolute; opacity: 0; }}
.bolt-scene.is-active .bolt-block {{ animation: bolt-drop 420ms cubic-bezier(0.2, 0.8, 0.2, 1) both; }}
.bolt-face {{ position: absolute; inset: 0; }}
.bolt-face--top {{ clip-path: polygon(50% 0%, 100% {q}%, 50% {q2}%, 0% {q}%); }}
.bolt-face--left {{ clip-path: polygon(0% {q}%, 50% {q2}%, 50% 100%, 0% {qd}%); }}
.bolt-face--right {{ clip-path: polygon(50% {q2}%, 100% {q}%, 100% {qd}%, 50% 100%); }}
.bolt-stud {{ position: absolute; left: 50%; top: {q}%; width: 30%; height: 14%; border-radius: 50%; transform: translate(-50%, -50%); }}
.bolt-particles {{ position: absolute; inset: 0; pointer-events: none; }}
.bolt-particle {{ position: absolute; border-radius: 50%; background: #ffe066; opacity: 0; animation: bolt-float ease-in-out infinite; }}
.bolt-flash {{ position: absolute; inset: 0; opacity: 0; pointer-events: none; background: radial-gradient(circle, rgba(255, 255, 255, 0.85), transparent 65%); transition: opacity 60ms; }}
.bolt-flash.is-flash {{ opacity: 1; }}
.reveal-card.anim-ready {{ opacity: 0; transform: translateY(16px); transition: opacity 500ms, transform 500ms; }}
.reveal-card.anim-ready.is-visible {{ opacity: 1; transform: none; }}
@keyframes bolt-drop {{ from {{ opacity: 0; transform: translateY(-24px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes bolt-float {{ 0%, 100% {{ opacity: 0; transform: translateY(0); }} 50% {{ opacity: 0.8; transform: translateY(-12px); }} }}
"#,
        q = fmt_num(q),
        q2 = fmt_num(q2),
        qd = fmt_num(qd),
    )
}

pub(crate) fn px(v: f32) -> String {
    format!("{}px", fmt_num(v))
}

pub(crate) fn pct(v: f32) -> String {
    format!("{}%", fmt_num(v))
}

pub(crate) fn ms(v: u64) -> String {
    format!("{v}ms")
}

fn fmt_num(v: f32) -> String {
    if (v - v.round()).abs() < 0.005 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}
