//! Session state and core simulation types
//!
//! Everything the frame step mutates lives in one owned `GameState`.

use glam::Vec3;

use super::input::LookTracker;
use super::particles::ParticlePool;
use super::player::Player;
use super::vehicle::{DrivableVehicle, StationaryVehicle, VehicleId};
use crate::consts::*;
use crate::settings::Settings;

/// Id of the single drivable vehicle; stationary targets count up from 1
pub const DRIVABLE_ID: VehicleId = VehicleId(0);

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    /// Explosion targets, in fixed order
    pub targets: Vec<StationaryVehicle>,
    pub car: DrivableVehicle,
    pub particles: ParticlePool,
    pub look: LookTracker,
    /// Number of resets since start
    pub resets: u32,
}

impl GameState {
    /// New session using the compile-time defaults
    pub fn new(seed: u64, now: f32) -> Self {
        Self::from_settings(
            &Settings {
                seed,
                ..Settings::default()
            },
            now,
        )
    }

    pub fn from_settings(settings: &Settings, now: f32) -> Self {
        Self {
            player: Player::spawn(now),
            targets: spawn_targets(),
            car: DrivableVehicle::new(DRIVABLE_ID),
            particles: ParticlePool::with_policy(
                settings.particle_capacity,
                settings.seed,
                settings.emit_policy,
            ),
            look: LookTracker::new(settings.mouse_sensitivity),
            resets: 0,
        }
    }

    /// Put player, vehicles, camera and particles back to their start values
    ///
    /// Runs inside a single frame step, before anything is drawn, so the
    /// renderer never sees a half-reset session.
    pub fn reset(&mut self, now: f32) {
        self.player = Player::spawn(now);
        self.targets = spawn_targets();
        self.car = DrivableVehicle::new(DRIVABLE_ID);
        self.particles.clear();
        self.look.reseed();
        self.resets += 1;
        log::info!("Session reset #{} at t={now:.2}", self.resets);
    }

    /// Point that trips explosions: the car while driving, else the player
    pub fn reference_point(&self) -> Vec3 {
        if self.player.in_vehicle() {
            self.car.position
        } else {
            self.player.position
        }
    }

    /// What the camera follows
    pub fn camera_target(&self) -> Vec3 {
        self.reference_point()
    }

    pub fn targets_remaining(&self) -> usize {
        self.targets.iter().filter(|t| t.is_intact()).count()
    }
}

fn spawn_targets() -> Vec<StationaryVehicle> {
    STATIONARY_VEHICLE_ORIGINS
        .iter()
        .enumerate()
        .map(|(i, &origin)| StationaryVehicle::new(VehicleId(i as u32 + 1), origin))
        .collect()
}
