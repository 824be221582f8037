//! Ambient particles drifting around the bolt.
//!
//! Positions are percentages of the scene canvas so the field survives any
//! resize done by the host stylesheet.

use serde::Serialize;

use crate::rng::SimpleRng;
use crate::types::ParticleConfig;

const SIZE_MIN_PX: u32 = 2;
const SIZE_MAX_PX: u32 = 5;
const DELAY_MAX_MS: u32 = 4000;
const DURATION_MIN_MS: u32 = 3000;
const DURATION_MAX_MS: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: u32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// Scatter `config.count` particles, deterministically for a given seed.
pub fn scatter_particles(config: &ParticleConfig) -> Vec<Particle> {
    let mut rng = SimpleRng::new(config.seed);
    (0..config.count)
        .map(|_| Particle {
            left_pct: rng.next_unit() * 100.0,
            top_pct: rng.next_unit() * 100.0,
            size_px: rng.next_between(SIZE_MIN_PX, SIZE_MAX_PX),
            delay_ms: rng.next_range(DELAY_MAX_MS),
            duration_ms: rng.next_between(DURATION_MIN_MS, DURATION_MAX_MS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_count_and_ranges() {
        let particles = scatter_particles(&ParticleConfig { count: 40, seed: 9 });
        assert_eq!(particles.len(), 40);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((SIZE_MIN_PX..SIZE_MAX_PX).contains(&p.size_px));
            assert!(p.delay_ms < DELAY_MAX_MS);
            assert!((DURATION_MIN_MS..DURATION_MAX_MS).contains(&p.duration_ms));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let c = ParticleConfig { count: 8, seed: 42 };
        assert_eq!(scatter_particles(&c), scatter_particles(&c));
    }

    #[test]
    fn different_seed_different_field() {
        let a = scatter_particles(&ParticleConfig { count: 8, seed: 1 });
        let b = scatter_particles(&ParticleConfig { count: 8, seed: 2 });
        assert_ne!(a, b);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(scatter_particles(&ParticleConfig { count: 0, seed: 1 }).is_empty());
    }
}
