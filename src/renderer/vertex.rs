//! Vertex types uploaded to the render target

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Position + texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, z],
            uv: [u, v],
        }
    }
}

/// One particle point
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}

impl From<Vec3> for PointVertex {
    fn from(v: Vec3) -> Self {
        Self {
            position: v.to_array(),
        }
    }
}

/// 20x20 ground quad at y = 0, two triangles
pub const FLOOR_VERTICES: [Vertex; 6] = [
    Vertex::new(10.0, 0.0, 10.0, 1.0, 0.0),
    Vertex::new(-10.0, 0.0, 10.0, 0.0, 0.0),
    Vertex::new(-10.0, 0.0, -10.0, 0.0, 1.0),
    Vertex::new(10.0, 0.0, 10.0, 1.0, 0.0),
    Vertex::new(-10.0, 0.0, -10.0, 0.0, 1.0),
    Vertex::new(10.0, 0.0, -10.0, 1.0, 1.0),
];
