//! Unit quad shared by tile rendering.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub corner: [f32; 2], // -1..1
    pub uv: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // corner
        1 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// Texture rows are stored top-down, so the lower corners sample v = 1.
pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [-1.0, -1.0], uv: [0.0, 1.0] }, // lower left
    QuadVertex { corner: [-1.0,  1.0], uv: [0.0, 0.0] }, // upper left
    QuadVertex { corner: [ 1.0,  1.0], uv: [1.0, 0.0] }, // upper right
    QuadVertex { corner: [ 1.0, -1.0], uv: [1.0, 1.0] }, // lower right
];

pub(super) const QUAD_INDICES: [u16; 6] = [
    0, 2, 1, // upper triangle
    0, 3, 2, // lower triangle
];

/// Index count for one quad; every tile draw uses exactly this many.
pub(super) const QUAD_INDEX_COUNT: u32 = QUAD_INDICES.len() as u32;
