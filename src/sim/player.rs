//! The player-controlled cube
//!
//! Walks relative to the camera heading, jumps, dashes on a cooldown and can
//! take over the drivable vehicle. While driving, its own movement is frozen.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::input::FrameInput;
use super::vehicle::{DrivableVehicle, VehicleId};
use crate::consts::*;
use crate::heading_to_forward;

/// Result of an interact press that changed possession
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Possession {
    Entered(VehicleId),
    Exited(VehicleId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    /// Vertical speed while airborne (up is positive)
    pub vertical_vel: f32,
    pub airborne: bool,
    /// Camera-linked heading, degrees
    pub yaw: f32,
    /// Camera pitch, degrees, kept within +/- PITCH_LIMIT by the look tracker
    pub pitch: f32,
    pub last_dash: f32,
    /// Time of the last enter/exit, for debouncing the interact key
    pub last_interact: f32,
    /// Vehicle currently being driven
    pub vehicle: Option<VehicleId>,
}

impl Player {
    /// Fresh player at the start position with dash ready as of `now`
    pub fn spawn(now: f32) -> Self {
        Self {
            position: PLAYER_START,
            vertical_vel: 0.0,
            airborne: false,
            yaw: CAMERA_START_YAW,
            pitch: CAMERA_START_PITCH,
            last_dash: now - DASH_COOLDOWN,
            last_interact: -1.0,
            vehicle: None,
        }
    }

    pub fn in_vehicle(&self) -> bool {
        self.vehicle.is_some()
    }

    /// Horizontal facing derived from yaw
    pub fn forward(&self) -> Vec3 {
        heading_to_forward(self.yaw)
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Movement, jump and dash for one frame; a no-op while driving
    ///
    /// Returns true if a dash fired.
    pub fn update(&mut self, input: &FrameInput, now: f32, dt: f32) -> bool {
        if self.in_vehicle() {
            return false;
        }
        self.walk(input, dt);
        if input.jump {
            self.jump();
        }
        self.fall(dt);
        input.dash && self.try_dash(now)
    }

    /// Directional inputs add up without normalization, so diagonals are faster
    pub fn walk(&mut self, input: &FrameInput, dt: f32) {
        let step = MOVE_SPEED * dt;
        let forward = self.forward();
        let right = self.right();

        if input.forward {
            self.position += forward * step;
        }
        if input.back {
            self.position -= forward * step;
        }
        if input.left {
            self.position -= right * step;
        }
        if input.right {
            self.position += right * step;
        }
    }

    pub fn jump(&mut self) {
        if !self.airborne {
            self.airborne = true;
            self.vertical_vel = JUMP_POWER;
        }
    }

    /// Integrate vertical motion and land on the ground plane
    pub fn fall(&mut self, dt: f32) {
        if !self.airborne {
            return;
        }
        self.vertical_vel += GRAVITY * dt;
        self.position.y += self.vertical_vel * dt;
        if self.position.y <= GROUND_Y {
            self.position.y = GROUND_Y;
            self.airborne = false;
            self.vertical_vel = 0.0;
        }
    }

    /// Dash forward if the cooldown has elapsed; presses during cooldown are dropped
    pub fn try_dash(&mut self, now: f32) -> bool {
        if self.in_vehicle() || now - self.last_dash < DASH_COOLDOWN {
            return false;
        }
        self.position += self.forward() * DASH_DISTANCE;
        self.last_dash = now;
        log::debug!("Dash at t={now:.2} to {}", self.position);
        true
    }

    /// Enter or leave `car` on an interact press
    pub fn interact(
        &mut self,
        input: &FrameInput,
        now: f32,
        car: &DrivableVehicle,
    ) -> Option<Possession> {
        if !input.interact || now - self.last_interact <= INTERACT_DEBOUNCE {
            return None;
        }

        let outcome = match self.vehicle {
            None if self.position.distance(car.position) < ENTER_RADIUS => {
                self.vehicle = Some(car.id);
                Possession::Entered(car.id)
            }
            None => return None,
            Some(id) => {
                self.vehicle = None;
                self.position = car.exit_point();
                self.vertical_vel = 0.0;
                // The exit point keeps the car's height, which may sit below GROUND_Y
                self.airborne = self.position.y > GROUND_Y;
                Possession::Exited(id)
            }
        };
        self.last_interact = now;
        log::info!("Player {outcome:?} at t={now:.2}");
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn test_spawn_defaults() {
        let player = Player::spawn(0.0);
        assert_eq!(player.position, PLAYER_START);
        assert!(!player.airborne);
        assert!(!player.in_vehicle());
        assert_eq!(player.last_dash, -DASH_COOLDOWN);
    }

    #[test]
    fn test_forward_and_right() {
        let mut player = Player::spawn(0.0);
        player.yaw = 0.0;
        assert!(player.forward().abs_diff_eq(Vec3::X, 1e-6));
        assert!(player.right().abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn test_walk_forward() {
        let mut player = Player::spawn(0.0);
        player.yaw = 0.0;
        let fwd = FrameInput {
            forward: true,
            ..input()
        };
        player.walk(&fwd, 0.5);
        assert!(player.position.abs_diff_eq(PLAYER_START + Vec3::X * MOVE_SPEED * 0.5, 1e-5));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut player = Player::spawn(0.0);
        let diag = FrameInput {
            forward: true,
            right: true,
            ..input()
        };
        player.walk(&diag, 1.0);
        let moved = (player.position - PLAYER_START).length();
        assert!((moved - MOVE_SPEED * 2f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut player = Player::spawn(0.0);
        player.jump();
        assert!(player.airborne);
        assert_eq!(player.vertical_vel, JUMP_POWER);

        let dt = 1.0 / 60.0;
        let mut peak = GROUND_Y;
        for _ in 0..120 {
            player.fall(dt);
            peak = peak.max(player.position.y);
        }
        assert!(peak > GROUND_Y + 1.0);
        assert!(!player.airborne);
        assert_eq!(player.position.y, GROUND_Y);
        assert_eq!(player.vertical_vel, 0.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = Player::spawn(0.0);
        player.jump();
        player.fall(0.1);
        let vel = player.vertical_vel;
        player.jump();
        assert_eq!(player.vertical_vel, vel);
    }

    #[test]
    fn test_dash_cooldown() {
        let mut player = Player::spawn(0.0);
        let t = 5.0;
        let start = player.position;
        let fwd = player.forward();

        assert!(player.try_dash(t));
        assert!(player.position.abs_diff_eq(start + fwd * DASH_DISTANCE, 1e-5));

        let after_first = player.position;
        assert!(!player.try_dash(t + 1.0));
        assert_eq!(player.position, after_first);

        // Heading changed since the first dash; the second one uses the new heading
        player.yaw = 0.0;
        assert!(player.try_dash(t + 2.1));
        assert!(player.position.abs_diff_eq(after_first + Vec3::X * DASH_DISTANCE, 1e-5));
        assert_eq!(player.last_dash, t + 2.1);
    }

    #[test]
    fn test_dash_ready_exactly_at_cooldown() {
        let mut player = Player::spawn(0.0);
        player.last_dash = 5.0;
        assert!(!player.try_dash(5.0 + DASH_COOLDOWN - 0.01));
        assert!(player.try_dash(5.0 + DASH_COOLDOWN));
        assert_eq!(player.last_dash, 7.0);
    }

    #[test]
    fn test_update_dash_only_on_press() {
        let mut player = Player::spawn(0.0);
        assert!(!player.update(&input(), 1.0, 0.0));
        let dash = FrameInput {
            dash: true,
            ..input()
        };
        assert!(player.update(&dash, 1.0, 0.0));
    }

    #[test]
    fn test_cannot_enter_from_afar() {
        let mut player = Player::spawn(0.0);
        let car = DrivableVehicle::new(VehicleId(5));
        let press = FrameInput {
            interact: true,
            ..input()
        };
        assert_eq!(player.interact(&press, 1.0, &car), None);
        assert!(!player.in_vehicle());
    }

    #[test]
    fn test_enter_radius_is_exclusive() {
        let mut player = Player::spawn(0.0);
        let car = DrivableVehicle::new(VehicleId(5));
        let press = FrameInput {
            interact: true,
            ..input()
        };

        player.position = car.position + Vec3::X * ENTER_RADIUS;
        assert_eq!(player.position.distance(car.position), ENTER_RADIUS);
        assert_eq!(player.interact(&press, 1.0, &car), None);
        assert!(!player.in_vehicle());
        assert_eq!(player.last_interact, -1.0);

        player.position = car.position + Vec3::X * 1.99;
        assert_eq!(player.interact(&press, 1.0, &car), Some(Possession::Entered(VehicleId(5))));
    }

    #[test]
    fn test_press_at_debounce_edge_is_dropped() {
        let mut player = Player::spawn(0.0);
        let car = DrivableVehicle::new(VehicleId(5));
        player.position = car.position;
        let press = FrameInput {
            interact: true,
            ..input()
        };

        assert!(player.interact(&press, 1.0, &car).is_some());
        assert_eq!(player.interact(&press, 1.0 + INTERACT_DEBOUNCE, &car), None);
        assert!(player.in_vehicle());
        assert_eq!(player.last_interact, 1.0);

        assert_eq!(
            player.interact(&press, 1.0 + INTERACT_DEBOUNCE + 0.01, &car),
            Some(Possession::Exited(VehicleId(5)))
        );
    }

    #[test]
    fn test_exit_keeps_car_height() {
        let mut player = Player::spawn(0.0);
        let car = DrivableVehicle::new(VehicleId(5));
        player.vehicle = Some(car.id);

        let press = FrameInput {
            interact: true,
            ..input()
        };
        assert!(player.interact(&press, 1.0, &car).is_some());
        assert_eq!(player.position.y, car.position.y);
        assert!(!player.airborne);
    }

    #[test]
    fn test_enter_then_exit_repositions() {
        let mut player = Player::spawn(0.0);
        let mut car = DrivableVehicle::new(VehicleId(5));
        player.position = car.position + Vec3::new(1.0, 0.25, 0.0);
        let press = FrameInput {
            interact: true,
            ..input()
        };

        assert_eq!(player.interact(&press, 1.0, &car), Some(Possession::Entered(VehicleId(5))));
        assert!(player.in_vehicle());

        // Debounced
        assert_eq!(player.interact(&press, 1.3, &car), None);
        assert!(player.in_vehicle());

        car.position = Vec3::new(2.0, 0.0, 3.0);
        car.yaw = 30.0;
        assert_eq!(player.interact(&press, 1.6, &car), Some(Possession::Exited(VehicleId(5))));
        assert!(!player.in_vehicle());
        let expected = car.position - car.forward() * 2.0;
        assert!(player.position.abs_diff_eq(expected, 1e-5));
        assert_eq!(player.last_interact, 1.6);
    }

    #[test]
    fn test_frozen_while_driving() {
        let mut player = Player::spawn(0.0);
        player.vehicle = Some(VehicleId(5));
        let everything = FrameInput {
            forward: true,
            jump: true,
            dash: true,
            ..input()
        };
        assert!(!player.update(&everything, 10.0, 0.1));
        assert_eq!(player.position, PLAYER_START);
        assert!(!player.airborne);
        assert!(!player.try_dash(10.0));
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(dts in prop::collection::vec(0.0f32..0.2, 1..200)) {
            let mut player = Player::spawn(0.0);
            player.jump();
            for dt in dts {
                player.fall(dt);
                prop_assert!(player.position.y >= GROUND_Y);
            }
        }
    }
}
