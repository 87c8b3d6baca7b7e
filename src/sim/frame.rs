//! Per-frame simulation step
//!
//! Advances the session in a fixed order:
//! reset -> look -> player -> explosions -> particles -> enter/exit -> driving.

use super::input::FrameInput;
use super::player::Possession;
use super::state::GameState;
use super::vehicle::VehicleId;

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    pub reset: bool,
    pub dashed: bool,
    /// Targets that started exploding this frame
    pub exploded: Vec<VehicleId>,
    /// Targets whose explosion finished this frame
    pub finished: Vec<VehicleId>,
    pub possession: Option<Possession>,
}

/// Advance the session by one frame of `dt` seconds ending at `now`
pub fn step(state: &mut GameState, input: &FrameInput, now: f32, dt: f32) -> FrameEvents {
    let mut events = FrameEvents::default();

    if input.reset {
        state.reset(now);
        events.reset = true;
    }

    if let Some(cursor) = input.cursor {
        let player = &mut state.player;
        state.look.apply(cursor, &mut player.yaw, &mut player.pitch);
    }

    events.dashed = state.player.update(input, now, dt);

    let reference = state.reference_point();
    for target in state.targets.iter_mut() {
        if target.check_proximity(reference, now, &mut state.particles) {
            events.exploded.push(target.id);
        }
        if target.advance(now) {
            events.finished.push(target.id);
        }
    }

    state.particles.integrate(dt);

    events.possession = state.player.interact(input, now, &state.car);

    if state.player.in_vehicle() {
        state.car.drive(input, dt);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::DRIVABLE_ID;
    use crate::sim::vehicle::{Appearance, ExplosionState};
    use glam::{Vec2, Vec3};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_idle_frame_changes_nothing() {
        let mut state = GameState::new(1, 0.0);
        let events = step(&mut state, &FrameInput::default(), DT, DT);
        assert_eq!(events, FrameEvents::default());
        assert_eq!(state.player.position, PLAYER_START);
    }

    #[test]
    fn test_walking_into_target_explodes_it() {
        let mut state = GameState::new(1, 0.0);
        let target = state.targets[3].origin;
        state.player.position = Vec3::new(target.x, GROUND_Y, target.z + 1.0);

        let events = step(&mut state, &FrameInput::default(), 3.0, DT);

        assert_eq!(events.exploded, vec![state.targets[3].id]);
        assert_eq!(state.targets[3].state, ExplosionState::Exploding { started_at: 3.0 });
        // Whole pool reinitialized, then integrated once
        assert_eq!(state.particles.active_count(), MAX_PARTICLES);
        assert_eq!(state.targets_remaining(), 3);

        // Standing still inside the zone does not re-trigger
        let events = step(&mut state, &FrameInput::default(), 3.0 + DT, DT);
        assert!(events.exploded.is_empty());
    }

    #[test]
    fn test_explosion_finishes_after_duration() {
        let mut state = GameState::new(1, 0.0);
        state.player.position = state.targets[0].origin;
        step(&mut state, &FrameInput::default(), 1.0, DT);
        state.player.position = PLAYER_START;

        let events = step(&mut state, &FrameInput::default(), 2.9, DT);
        assert!(events.finished.is_empty());
        assert!(matches!(state.targets[0].appearance(2.9), Appearance::Exploding { .. }));

        let events = step(&mut state, &FrameInput::default(), 3.1, DT);
        assert_eq!(events.finished, vec![state.targets[0].id]);
        assert_eq!(state.targets[0].appearance(3.1), Appearance::Gone);
    }

    #[test]
    fn test_particles_die_out() {
        let mut state = GameState::new(1, 0.0);
        state.player.position = state.targets[1].origin;
        let mut now = 1.0;
        step(&mut state, &FrameInput::default(), now, DT);
        state.player.position = PLAYER_START;

        for _ in 0..70 {
            now += DT;
            step(&mut state, &FrameInput::default(), now, DT);
        }
        assert_eq!(state.particles.active_count(), 0);
    }

    #[test]
    fn test_driving_car_triggers_with_car_position() {
        let mut state = GameState::new(1, 0.0);
        state.player.vehicle = Some(DRIVABLE_ID);
        // Player body parked right on a target, but the car is what counts
        state.player.position = state.targets[0].origin;

        let events = step(&mut state, &FrameInput::default(), 1.0, DT);
        assert!(events.exploded.is_empty());

        state.car.position = state.targets[2].origin + Vec3::X;
        let events = step(&mut state, &FrameInput::default(), 1.0 + DT, DT);
        assert_eq!(events.exploded, vec![state.targets[2].id]);
    }

    #[test]
    fn test_two_targets_same_frame() {
        let mut state = GameState::new(1, 0.0);
        state.targets[1].origin = state.targets[0].origin + Vec3::X;
        state.player.position = state.targets[0].origin + Vec3::X * 0.5;

        let events = step(&mut state, &FrameInput::default(), 1.0, DT);
        assert_eq!(events.exploded.len(), 2);
    }

    #[test]
    fn test_enter_drive_exit() {
        let mut state = GameState::new(1, 0.0);
        state.player.position = state.car.position + Vec3::new(1.0, GROUND_Y, 0.0);
        let press = FrameInput {
            interact: true,
            ..Default::default()
        };

        let events = step(&mut state, &press, 1.0, DT);
        assert_eq!(events.possession, Some(Possession::Entered(DRIVABLE_ID)));

        let gas = FrameInput {
            forward: true,
            ..Default::default()
        };
        let before = state.car.position;
        let player_before = state.player.position;
        step(&mut state, &gas, 1.0 + DT, DT);
        assert!(state.car.position.distance(before) > 0.0);
        assert_eq!(state.player.position, player_before);

        let events = step(&mut state, &press, 2.0, DT);
        assert_eq!(events.possession, Some(Possession::Exited(DRIVABLE_ID)));
        let expected = state.car.position - state.car.forward() * EXIT_OFFSET;
        assert!(state.player.position.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_reset_mid_session() {
        let mut state = GameState::new(1, 0.0);
        state.player.position = state.targets[0].origin;
        step(&mut state, &FrameInput::default(), 1.0, DT);
        assert_eq!(state.targets_remaining(), 3);

        let reset = FrameInput {
            reset: true,
            ..Default::default()
        };
        let events = step(&mut state, &reset, 1.5, DT);
        assert!(events.reset);
        assert_eq!(state.targets_remaining(), 4);
        assert_eq!(state.particles.active_count(), 0);
        assert_eq!(state.player.position, PLAYER_START);
    }

    #[test]
    fn test_cursor_turns_player() {
        let mut state = GameState::new(1, 0.0);
        let first = FrameInput {
            cursor: Some(Vec2::new(900.0, 600.0)),
            ..Default::default()
        };
        step(&mut state, &first, DT, DT);
        assert_eq!(state.player.yaw, CAMERA_START_YAW);

        let moved = FrameInput {
            cursor: Some(Vec2::new(1000.0, 600.0)),
            ..Default::default()
        };
        step(&mut state, &moved, 2.0 * DT, DT);
        assert!((state.player.yaw - (CAMERA_START_YAW + 100.0 * MOUSE_SENSITIVITY)).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99, 0.0);
        let mut b = GameState::new(99, 0.0);
        let inputs = [
            FrameInput {
                forward: true,
                right: true,
                ..Default::default()
            },
            FrameInput {
                dash: true,
                jump: true,
                ..Default::default()
            },
            FrameInput::default(),
        ];

        let mut now = 0.0;
        for _ in 0..200 {
            for input in &inputs {
                now += DT;
                step(&mut a, input, now, DT);
                step(&mut b, input, now, DT);
            }
        }

        assert_eq!(a.player.position, b.player.position);
        assert_eq!(a.particles.particles(), b.particles.particles());
    }
}
