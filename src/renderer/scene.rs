//! Per-frame draw submission
//!
//! Fixed order: floor, player, stationary vehicles, particles, drivable
//! vehicle. Everything is resubmitted every frame.

use glam::{Mat4, Quat, Vec3};

use super::vertex::PointVertex;
use super::{RenderTarget, Uniform};
use crate::assets::{Mesh, ProgramHandle, SceneAssets};
use crate::consts::*;
use crate::sim::{Appearance, CameraView, GameState};

/// Counts from one submitted frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub meshes: u32,
    pub explosions: u32,
    pub particles: usize,
}

/// One-time program setup after loading
pub fn prepare(target: &mut impl RenderTarget, assets: &SceneAssets) {
    target.use_program(assets.programs.basic);
    target.set_uniform("texture1", Uniform::Int(0));
}

/// Model matrix for a mesh facing `yaw` degrees
///
/// Meshes are authored facing +Z, hence the 90 degree offset.
pub fn facing_model(position: Vec3, yaw: f32, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_rotation_y((-yaw + 90.0).to_radians()),
        position,
    )
}

struct Pass<'a, T: RenderTarget> {
    target: &'a mut T,
    view: Mat4,
    projection: Mat4,
    stats: FrameStats,
}

impl<T: RenderTarget> Pass<'_, T> {
    fn begin(&mut self, program: ProgramHandle, model: Mat4) {
        self.target.use_program(program);
        self.target.set_uniform("view", Uniform::Mat4(self.view));
        self.target.set_uniform("projection", Uniform::Mat4(self.projection));
        self.target.set_uniform("model", Uniform::Mat4(model));
    }

    fn mesh(&mut self, program: ProgramHandle, model: Mat4, mesh: Mesh) {
        self.begin(program, model);
        self.target.draw_mesh(mesh);
        self.stats.meshes += 1;
    }
}

/// Clear, draw the whole scene and present
pub fn submit_frame(
    target: &mut impl RenderTarget,
    assets: &SceneAssets,
    state: &GameState,
    camera: &CameraView,
    projection: Mat4,
    now: f32,
    point_size: f32,
) -> FrameStats {
    target.clear(CLEAR_COLOR);

    let mut pass = Pass {
        target: &mut *target,
        view: camera.view_matrix(),
        projection,
        stats: FrameStats::default(),
    };
    let programs = assets.programs;

    // Floor
    pass.begin(programs.basic, Mat4::IDENTITY);
    pass.target.bind_texture(0, assets.floor_texture);
    pass.target.draw_mesh(assets.floor);
    pass.stats.meshes += 1;

    // Player is hidden while driving
    if !state.player.in_vehicle() {
        let model = facing_model(state.player.position, state.player.yaw, PLAYER_SCALE);
        pass.mesh(programs.basic, model, assets.cube);
    }

    for vehicle in &state.targets {
        match vehicle.appearance(now) {
            Appearance::Intact => {
                let model = Mat4::from_scale_rotation_translation(
                    Vec3::splat(VEHICLE_SCALE),
                    Quat::IDENTITY,
                    vehicle.origin,
                );
                pass.mesh(programs.basic, model, assets.car);
            }
            Appearance::Exploding { elapsed } => {
                pass.begin(programs.explosion, Mat4::from_translation(vehicle.origin));
                pass.target.set_uniform("explosionTime", Uniform::Float(elapsed));
                pass.target.draw_mesh(assets.car);
                pass.stats.meshes += 1;
                pass.stats.explosions += 1;
            }
            Appearance::Gone => {}
        }
    }

    // Particles
    let points: Vec<PointVertex> = state
        .particles
        .active_positions()
        .into_iter()
        .map(PointVertex::from)
        .collect();
    pass.begin(programs.particle, Mat4::IDENTITY);
    pass.target.set_uniform("pointSize", Uniform::Float(point_size));
    pass.target.draw_points(&points);
    pass.stats.particles = points.len();

    let car = &state.car;
    pass.mesh(
        programs.basic,
        facing_model(car.position, car.yaw, VEHICLE_SCALE),
        assets.car,
    );

    let stats = pass.stats;
    target.present();
    stats
}
