//! Rendering module
//!
//! The graphics API lives behind [`RenderTarget`]; this module decides what
//! to draw each frame and in which order, reading simulation state without
//! touching it.

pub mod recording;
pub mod scene;
pub mod vertex;

pub use recording::{RecordingTarget, RenderCommand};
pub use scene::{FrameStats, prepare, submit_frame};
pub use vertex::{PointVertex, Vertex};

use glam::Mat4;

use crate::assets::{Mesh, ProgramHandle, TextureHandle};

/// Uniform values a program accepts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Bool(bool),
    Int(i32),
    Float(f32),
    Mat4(Mat4),
}

/// Immediate-mode draw surface implemented by the graphics backend
pub trait RenderTarget {
    fn clear(&mut self, color: [f32; 4]);
    fn use_program(&mut self, program: ProgramHandle);
    /// Set a uniform on the program last passed to `use_program`
    fn set_uniform(&mut self, name: &'static str, value: Uniform);
    fn bind_texture(&mut self, unit: u32, texture: TextureHandle);
    fn draw_mesh(&mut self, mesh: Mesh);
    /// Stream `points` into the particle buffer and draw them as points
    fn draw_points(&mut self, points: &[PointVertex]);
    /// Swap buffers; may block on vsync
    fn present(&mut self);
}
