use crate::constants::{ACCIDENTAL_RGBA, ACTIVE_RGBA, NATURAL_RGBA};
use crate::core::{KeyColor, Keyboard};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) pos: [f32; 3],
    pub(crate) normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct KeyInstance {
    pub(crate) center: [f32; 3],
    pub(crate) size: [f32; 3],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct KeysUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) ambient: [f32; 4],
}

#[inline]
pub(crate) fn key_rgba(color: KeyColor) -> [f32; 4] {
    match color {
        KeyColor::RestingNatural => NATURAL_RGBA,
        KeyColor::RestingAccidental => ACCIDENTAL_RGBA,
        KeyColor::Active => ACTIVE_RGBA,
    }
}

pub(crate) fn pack_instances(keyboard: &Keyboard, out: &mut Vec<KeyInstance>) {
    out.clear();
    out.extend(keyboard.keys().iter().map(|k| KeyInstance {
        center: k.center.to_array(),
        size: k.size.to_array(),
        color: key_rgba(k.color),
    }));
}

/// Unit cube centered on the origin, 6 faces x 2 triangles, flat normals.
pub(crate) fn cube_vertices() -> Vec<Vertex> {
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let corners: [(f32, f32); 6] = [
        (-0.5, -0.5),
        (0.5, -0.5),
        (0.5, 0.5),
        (-0.5, -0.5),
        (0.5, 0.5),
        (-0.5, 0.5),
    ];
    let mut verts = Vec::with_capacity(36);
    for (n, u, v) in faces {
        for (cu, cv) in corners {
            let pos = [
                n[0] * 0.5 + u[0] * cu + v[0] * cv,
                n[1] * 0.5 + u[1] * cu + v[1] * cv,
                n[2] * 0.5 + u[2] * cu + v[2] * cv,
            ];
            verts.push(Vertex { pos, normal: n });
        }
    }
    verts
}

pub(crate) static VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
pub(crate) static INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![2 => Float32x3, 3 => Float32x3, 4 => Float32x4];

pub(crate) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        // slot 0: cube vertices
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        // slot 1: per-key instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<KeyInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}
