//! Explosion particles
//!
//! Fixed-capacity pool of particle records. Slots are reused: emitting
//! reinitializes records in place and expiry only clears the active flag.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single particle record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Seconds left before the particle expires
    pub life: f32,
    /// Inactive records hold stale pos/vel and must not be drawn
    pub active: bool,
}

impl Particle {
    pub const DEAD: Self = Self {
        pos: Vec3::ZERO,
        vel: Vec3::ZERO,
        life: 0.0,
        active: false,
    };
}

/// Which slots a burst claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmitPolicy {
    /// Reinitialize every slot, live or not
    #[default]
    ReinitAll,
    /// Activate up to `max` currently inactive slots, leaving live ones alone
    FreeSlots { max: usize },
}

/// Fixed-size particle storage with its own RNG
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    policy: EmitPolicy,
    rng: Pcg32,
}

impl ParticlePool {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self::with_policy(capacity, seed, EmitPolicy::default())
    }

    pub fn with_policy(capacity: usize, seed: u64, policy: EmitPolicy) -> Self {
        Self {
            particles: vec![Particle::DEAD; capacity],
            policy,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn policy(&self) -> EmitPolicy {
        self.policy
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    /// Launch a burst from `center`; returns how many slots were (re)initialized
    pub fn emit(&mut self, center: Vec3) -> usize {
        let mut emitted = 0;
        match self.policy {
            EmitPolicy::ReinitAll => {
                for particle in self.particles.iter_mut() {
                    *particle = spawn(&mut self.rng, center);
                    emitted += 1;
                }
            }
            EmitPolicy::FreeSlots { max } => {
                for particle in self.particles.iter_mut().filter(|p| !p.active).take(max) {
                    *particle = spawn(&mut self.rng, center);
                    emitted += 1;
                }
            }
        }
        log::debug!("Particle burst at {center}: {emitted} slots");
        emitted
    }

    /// Age and move every active particle by `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        for particle in self.particles.iter_mut().filter(|p| p.active) {
            particle.life -= dt;
            if particle.life <= 0.0 {
                particle.active = false;
                continue;
            }
            particle.vel += PARTICLE_GRAVITY * dt;
            particle.pos += particle.vel * dt;
        }
    }

    /// Positions of active particles, in slot order
    pub fn active_positions(&self) -> Vec<Vec3> {
        self.particles
            .iter()
            .filter(|p| p.active)
            .map(|p| p.pos)
            .collect()
    }

    /// Deactivate every slot
    pub fn clear(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.active = false;
        }
    }
}

fn spawn(rng: &mut Pcg32, center: Vec3) -> Particle {
    let dir = Vec3::new(
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
    )
    .try_normalize()
    .unwrap_or(Vec3::Y);
    let speed = rng.random_range(PARTICLE_MIN_SPEED..=PARTICLE_MAX_SPEED);

    Particle {
        pos: center,
        vel: dir * speed,
        life: PARTICLE_LIFETIME,
        active: true,
    }
}
