//! Mounting the widget into a host page.
//!
//! - [`mount_hero`] builds the scene once and appends it to the hero
//!   container. Pages without a container are a silent no-op.
//! - [`apply_flash`] mirrors flash timer events onto the tree.
//! - [`prepare_reveals`] / [`apply_reveals`] wire the entrance observer to
//!   the page cards.

use tracing::{debug, info, warn};

use crate::config::BoltConfig;
use crate::core::{generate_scene_with, scatter_particles, Particle, Scene};
use crate::document::HostPage;
use crate::engine::{FlashEvent, FlashSchedule, Reveal, RevealObserver};
use crate::error::ConfigError;
use crate::materialize::{build_scene_tree, ms};
use crate::types::{
    FlashTiming, ParticleConfig, CLASS_ACTIVE, CLASS_ANIM_READY, CLASS_FLASH, CLASS_VISIBLE,
    FLASH_OVERLAY_ID, HERO_CONTAINER_ID, REVEAL_TARGET_CLASS, SCENE_ROOT_ID,
};

/// A mounted hero scene.
#[derive(Debug, Clone)]
pub struct HeroMount {
    pub scene: Scene,
    pub particles: Vec<Particle>,
    flash: FlashTiming,
    particle_config: ParticleConfig,
    seed: u32,
}

impl HeroMount {
    pub fn block_count(&self) -> usize {
        self.scene.block_count()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Particle settings the field was scattered with.
    pub fn particle_config(&self) -> ParticleConfig {
        self.particle_config
    }

    /// Fresh flash schedule for this scene (first flash after its last block).
    pub fn flash_schedule(&self) -> FlashSchedule {
        FlashSchedule::new(self.block_count(), self.flash, self.seed)
    }
}

/// Build the scene and append it to the hero container.
///
/// Returns `Ok(None)` without touching the page when the container is
/// missing, or when a scene is already mounted (it is never rebuilt).
pub fn mount_hero<P: HostPage + ?Sized>(
    page: &mut P,
    config: &BoltConfig,
) -> Result<Option<HeroMount>, ConfigError> {
    if !page.has_element(HERO_CONTAINER_ID) {
        debug!("no hero container on page, skipping bolt scene");
        return Ok(None);
    }
    if page.has_element(SCENE_ROOT_ID) {
        debug!("bolt scene already mounted");
        return Ok(None);
    }

    config.validate()?;
    let scene = generate_scene_with(config.cells(), &config.scene, config.stacking)?;
    let particles = scatter_particles(&config.particles);

    let tree = build_scene_tree(&scene, &particles, &config.flash);
    if !page.append_child(HERO_CONTAINER_ID, tree) {
        warn!("host rejected the bolt scene, skipping");
        return Ok(None);
    }
    if !page.add_class(SCENE_ROOT_ID, CLASS_ACTIVE) {
        warn!("bolt scene root missing after append");
    }

    info!(
        blocks = scene.block_count(),
        width = scene.width,
        height = scene.height,
        "bolt scene mounted"
    );

    Ok(Some(HeroMount {
        scene,
        particles,
        flash: config.flash,
        particle_config: config.particles,
        seed: config.seed,
    }))
}

/// Toggle the flash classes on the overlay and the scene root.
pub fn apply_flash<P: HostPage + ?Sized>(page: &mut P, event: FlashEvent) {
    for id in [FLASH_OVERLAY_ID, SCENE_ROOT_ID] {
        match event {
            FlashEvent::On => page.add_class(id, CLASS_FLASH),
            FlashEvent::Off => page.remove_class(id, CLASS_FLASH),
        };
    }
}

/// Mark every reveal card as waiting and start watching them, staggered
/// by `config.reveal`.
///
/// Hosts without visibility observation get `None` and the cards are left
/// untouched (fully visible).
pub fn prepare_reveals<P: HostPage + ?Sized>(
    page: &mut P,
    config: &BoltConfig,
) -> Option<RevealObserver<String>> {
    if !page.supports_visibility_observer() {
        debug!("host has no visibility observer, skipping card reveals");
        return None;
    }

    let ids = page.ids_with_class(REVEAL_TARGET_CLASS);
    for id in &ids {
        page.add_class(id, CLASS_ANIM_READY);
    }
    debug!(cards = ids.len(), "watching cards for reveal");
    RevealObserver::if_supported(true, ids, config.reveal)
}

pub fn apply_reveals<P: HostPage + ?Sized>(page: &mut P, reveals: &[Reveal<String>]) {
    for reveal in reveals {
        page.set_style(&reveal.key, "transition-delay", &ms(reveal.delay_ms));
        page.add_class(&reveal.key, CLASS_VISIBLE);
    }
}
