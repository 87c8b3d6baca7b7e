//! Blast Yard - a small 3D playground
//!
//! Core modules:
//! - `sim`: Simulation (player, vehicles, particles, camera, session state)
//! - `renderer`: Draw submission against an abstract render target
//! - `assets`: Asset loader / shader program collaborators and fail-soft loading
//! - `game`: Frame orchestrator and run loop
//! - `settings`: Optional runtime overrides

pub mod assets;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Window dimensions
    pub const SCREEN_WIDTH: u32 = 1800;
    pub const SCREEN_HEIGHT: u32 = 1200;

    /// Player (cube) defaults
    pub const PLAYER_START: Vec3 = Vec3::new(-8.0, 0.25, -8.0);
    pub const GROUND_Y: f32 = 0.25;
    pub const GRAVITY: f32 = -9.8;
    pub const JUMP_POWER: f32 = 5.0;
    pub const MOVE_SPEED: f32 = 2.5;

    /// Dash
    pub const DASH_DISTANCE: f32 = 5.0;
    pub const DASH_COOLDOWN: f32 = 2.0;

    /// Stationary vehicles ("Car A" targets)
    pub const STATIONARY_VEHICLE_ORIGINS: [Vec3; 4] = [
        Vec3::new(4.0, 0.0, 4.0),
        Vec3::new(4.0, 0.0, -4.0),
        Vec3::new(-4.0, 0.0, 4.0),
        Vec3::new(-4.0, 0.0, -4.0),
    ];
    pub const EXPLOSION_TRIGGER_RADIUS: f32 = 1.5;
    pub const EXPLOSION_DURATION: f32 = 2.0;

    /// Drivable vehicle ("Car B")
    pub const DRIVABLE_START: Vec3 = Vec3::new(0.0, 0.0, -5.0);
    pub const DRIVABLE_START_YAW: f32 = -90.0;
    pub const DRIVE_SPEED: f32 = 5.0;
    /// Degrees per second
    pub const STEER_RATE: f32 = 80.0;
    pub const ENTER_RADIUS: f32 = 2.0;
    pub const INTERACT_DEBOUNCE: f32 = 0.5;
    pub const EXIT_OFFSET: f32 = 2.0;

    /// Camera
    pub const CAMERA_START_YAW: f32 = -90.0;
    pub const CAMERA_START_PITCH: f32 = 20.0;
    pub const PITCH_LIMIT: f32 = 89.0;
    pub const FOLLOW_DISTANCE: f32 = 5.0;
    pub const CAMERA_HEIGHT: f32 = 2.0;
    pub const FOV_Y_DEGREES: f32 = 45.0;
    pub const Z_NEAR: f32 = 0.1;
    pub const Z_FAR: f32 = 100.0;
    pub const MOUSE_SENSITIVITY: f32 = 0.02;

    /// Particles
    pub const MAX_PARTICLES: usize = 5000;
    pub const PARTICLE_LIFETIME: f32 = 1.0;
    pub const PARTICLE_MIN_SPEED: f32 = 2.0;
    pub const PARTICLE_MAX_SPEED: f32 = 5.0;
    pub const PARTICLE_GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);
    pub const PARTICLE_POINT_SIZE: f32 = 40.0;

    /// Render scale factors
    pub const PLAYER_SCALE: f32 = 0.5;
    pub const VEHICLE_SCALE: f32 = 0.7;

    pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.15, 1.0];
}

/// Horizontal unit vector for a heading in degrees (0° = +X, 90° = +Z)
#[inline]
pub fn heading_to_forward(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalize()
}
