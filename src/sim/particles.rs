//! Ephemeral visual-feedback particles
//!
//! Particles are spawned in fixed-size bursts at collision points and aged
//! once per tick. They never feed back into gameplay: removing this module's
//! calls from the stepper would change nothing but the rendered effects.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::state::Particle;

/// Spawn a burst of particles at a collision point.
///
/// Velocity components are drawn per-axis from the session RNG so bursts are
/// reproducible for a given seed and input sequence.
pub fn spawn_burst<R: Rng>(particles: &mut Vec<Particle>, rng: &mut R, pos: Vec2, color: u32) {
    for _ in 0..BURST_SIZE {
        particles.push(Particle {
            pos,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_MAX_VEL..=PARTICLE_MAX_VEL),
                rng.random_range(-PARTICLE_MAX_VEL..=PARTICLE_MAX_VEL),
            ),
            color,
            life: PARTICLE_LIFE,
        });
    }
}

/// Advance every particle one tick and drop the expired ones.
///
/// Removal is a retain-filter, not index-based deletion; consumers get no
/// ordering guarantee.
pub fn age(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= 1;
    }
    particles.retain(|p| p.life > 0);
}
