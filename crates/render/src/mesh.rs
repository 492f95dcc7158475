//! Triangle lists for the geoms of a scene.
//!
//! Every geom is flat shaded: planes become a single quad, boxes a cuboid
//! and spheres the cube that bounds them. Triangles wind counter-clockwise
//! seen from outside so back-face culling works without a depth buffer for
//! the simple scenes this viewer targets.

use bytemuck::{Pod, Zeroable};
use physics::{Geom, Model, Shape, State, Vec3};

/// Vertex layout consumed by `shader.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Light direction for the per-face shading factor.
const LIGHT: Vec3 = Vec3::new(0.3, -0.5, 1.0);
const AMBIENT: f32 = 0.45;

/// Outward normal and tangent pair of each cuboid face, with `u × v = n`.
const CUBOID_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::new(-1.0, 0.0, 0.0), Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::new(0.0, -1.0, 0.0), Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::new(0.0, 0.0, -1.0), Vec3::Y, Vec3::X),
];

/// Build the triangle list of every geom, static geoms first.
#[must_use]
pub fn scene_vertices(model: &Model, state: &State) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for geom in &model.static_geoms {
        push_geom(&mut vertices, geom, Vec3::ZERO);
    }
    for (body, pos) in model.bodies.iter().zip(&state.positions) {
        for geom in &body.geoms {
            push_geom(&mut vertices, geom, *pos);
        }
    }
    vertices
}

fn push_geom(out: &mut Vec<Vertex>, geom: &Geom, frame_pos: Vec3) {
    let center = frame_pos + geom.offset;
    let color = [geom.rgba[0], geom.rgba[1], geom.rgba[2]];
    match geom.shape {
        Shape::Plane { normal, half_size } => {
            let (u, v) = tangent_basis(normal);
            push_quad(
                out,
                center,
                u * half_size[0],
                v * half_size[1],
                shade(color, normal),
            );
        }
        Shape::Sphere { radius } => {
            push_cuboid(out, center, Vec3::new(radius, radius, radius), color);
        }
        Shape::Box { half_extents } => push_cuboid(out, center, half_extents, color),
    }
}

fn push_cuboid(out: &mut Vec<Vertex>, center: Vec3, half: Vec3, color: [f32; 3]) {
    for (normal, u, v) in CUBOID_FACES {
        push_quad(
            out,
            center + scale(normal, half),
            scale(u, half),
            scale(v, half),
            shade(color, normal),
        );
    }
}

/// Two triangles spanning `center ± u ± v`, facing `u × v`.
fn push_quad(out: &mut Vec<Vertex>, center: Vec3, u: Vec3, v: Vec3, color: [f32; 3]) {
    let corners = [
        center - u - v,
        center + u - v,
        center + u + v,
        center - u + v,
    ];
    for index in [0, 1, 2, 0, 2, 3] {
        out.push(Vertex {
            position: corners[index].to_array(),
            color,
        });
    }
}

/// Orthonormal `(u, v)` with `u × v = normal`.
fn tangent_basis(normal: Vec3) -> (Vec3, Vec3) {
    let helper = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let u = (helper - normal * helper.dot(normal)).normalize();
    (u, normal.cross(u))
}

fn scale(axis: Vec3, half: Vec3) -> Vec3 {
    Vec3::new(axis.x * half.x, axis.y * half.y, axis.z * half.z)
}

fn shade(color: [f32; 3], normal: Vec3) -> [f32; 3] {
    let diffuse = normal.dot(LIGHT.normalize()).max(0.0);
    let factor = AMBIENT + (1.0 - AMBIENT) * diffuse;
    color.map(|c| c * factor)
}
