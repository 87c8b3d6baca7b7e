//! Vehicles: proximity-triggered explosion targets and the drivable car

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::input::FrameInput;
use super::particles::ParticlePool;
use crate::consts::*;
use crate::heading_to_forward;

/// Stable vehicle identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

/// Lifecycle of a stationary vehicle
///
/// Transitions only move forward (Intact -> Exploding -> Destroyed); only a
/// session reset brings a vehicle back.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ExplosionState {
    #[default]
    Intact,
    /// Explosion shader is playing
    Exploding { started_at: f32 },
    /// Explosion finished, nothing left to draw
    Destroyed { started_at: f32 },
}

/// What a stationary vehicle should look like at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    Intact,
    Exploding { elapsed: f32 },
    Gone,
}

/// A parked car that blows up when something gets too close
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationaryVehicle {
    pub id: VehicleId,
    pub origin: Vec3,
    pub state: ExplosionState,
}

impl StationaryVehicle {
    pub fn new(id: VehicleId, origin: Vec3) -> Self {
        Self {
            id,
            origin,
            state: ExplosionState::Intact,
        }
    }

    /// Blow up if `reference` is inside the trigger radius
    ///
    /// Emits a particle burst at the origin on the Intact -> Exploding edge
    /// and returns true; any other state is left untouched.
    pub fn check_proximity(
        &mut self,
        reference: Vec3,
        now: f32,
        particles: &mut ParticlePool,
    ) -> bool {
        if self.state != ExplosionState::Intact {
            return false;
        }
        if reference.distance(self.origin) >= EXPLOSION_TRIGGER_RADIUS {
            return false;
        }

        self.state = ExplosionState::Exploding { started_at: now };
        particles.emit(self.origin);
        log::info!("Vehicle {} exploded at t={now:.2}", self.id.0);
        true
    }

    /// Retire a finished explosion; returns true on the Exploding -> Destroyed edge
    pub fn advance(&mut self, now: f32) -> bool {
        if let ExplosionState::Exploding { started_at } = self.state {
            if now - started_at >= EXPLOSION_DURATION {
                self.state = ExplosionState::Destroyed { started_at };
                log::debug!("Vehicle {} explosion finished", self.id.0);
                return true;
            }
        }
        false
    }

    /// Appearance at `now`, derived from elapsed time so it is correct even
    /// before `advance` has run this frame
    pub fn appearance(&self, now: f32) -> Appearance {
        match self.state {
            ExplosionState::Intact => Appearance::Intact,
            ExplosionState::Exploding { started_at } => {
                let elapsed = now - started_at;
                if elapsed < EXPLOSION_DURATION {
                    Appearance::Exploding { elapsed }
                } else {
                    Appearance::Gone
                }
            }
            ExplosionState::Destroyed { .. } => Appearance::Gone,
        }
    }

    pub fn is_intact(&self) -> bool {
        self.state == ExplosionState::Intact
    }
}

/// The car the player can get into and steer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivableVehicle {
    pub id: VehicleId,
    pub position: Vec3,
    /// Heading in degrees
    pub yaw: f32,
}

impl DrivableVehicle {
    pub fn new(id: VehicleId) -> Self {
        Self {
            id,
            position: DRIVABLE_START,
            yaw: DRIVABLE_START_YAW,
        }
    }

    pub fn forward(&self) -> Vec3 {
        heading_to_forward(self.yaw)
    }

    /// Spot where a leaving driver is placed
    pub fn exit_point(&self) -> Vec3 {
        self.position - self.forward() * EXIT_OFFSET
    }

    /// Apply driving inputs for one frame
    ///
    /// Forward/back translate along the heading computed before steering;
    /// steering flips while reversing.
    pub fn drive(&mut self, input: &FrameInput, dt: f32) {
        let forward = self.forward();
        if input.forward {
            self.position += forward * DRIVE_SPEED * dt;
        }
        if input.back {
            self.position -= forward * DRIVE_SPEED * dt;
        }

        let mut steer = 0.0;
        if input.left {
            steer -= 1.0;
        }
        if input.right {
            steer += 1.0;
        }
        if input.back {
            steer = -steer;
        }
        self.yaw += steer * STEER_RATE * dt;
    }
}
