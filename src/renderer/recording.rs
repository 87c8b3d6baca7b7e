//! Render target that records submissions instead of drawing
//!
//! Used by the headless binary and by tests to inspect what a frame submits.

use super::vertex::PointVertex;
use super::{RenderTarget, Uniform};
use crate::assets::{Mesh, ProgramHandle, TextureHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear([f32; 4]),
    UseProgram(ProgramHandle),
    SetUniform(&'static str, Uniform),
    BindTexture { unit: u32, texture: TextureHandle },
    DrawMesh(Mesh),
    /// Number of points streamed
    DrawPoints(usize),
    Present,
}

/// Keeps the commands of the current frame; `present` starts a new one
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub commands: Vec<RenderCommand>,
    /// Frames presented so far
    pub frames: u64,
    /// Keep earlier frames' commands across `clear`
    pub keep_history: bool,
}

impl RecordingTarget {
    /// Mesh ids drawn, in order
    pub fn meshes_drawn(&self) -> Vec<u32> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawMesh(mesh) => Some(mesh.id),
                _ => None,
            })
            .collect()
    }

    pub fn points_drawn(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                RenderCommand::DrawPoints(n) => *n,
                _ => 0,
            })
            .sum()
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self, color: [f32; 4]) {
        if !self.keep_history {
            self.commands.clear();
        }
        self.commands.push(RenderCommand::Clear(color));
    }

    fn use_program(&mut self, program: ProgramHandle) {
        self.commands.push(RenderCommand::UseProgram(program));
    }

    fn set_uniform(&mut self, name: &'static str, value: Uniform) {
        self.commands.push(RenderCommand::SetUniform(name, value));
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureHandle) {
        self.commands.push(RenderCommand::BindTexture { unit, texture });
    }

    fn draw_mesh(&mut self, mesh: Mesh) {
        self.commands.push(RenderCommand::DrawMesh(mesh));
    }

    fn draw_points(&mut self, points: &[PointVertex]) {
        self.commands.push(RenderCommand::DrawPoints(points.len()));
    }

    fn present(&mut self) {
        self.commands.push(RenderCommand::Present);
        self.frames += 1;
    }
}
