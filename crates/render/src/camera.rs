use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use physics::State;

/// Offset of the eye from the tracked point (z-up world).
const EYE_OFFSET: Vec3 = Vec3::new(0.0, -4.0, 2.5);

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
/// Uniform buffer representation of the camera matrices used by the shaders.
pub struct CameraUniform {
    /// Combined view projection matrix used by the vertex shader.
    pub view_proj: [[f32; 4]; 4],
}

/// Perspective camera following the dynamic bodies of a scene.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    /// Field of view in radians.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Aim at the centroid of all dynamic bodies, or the origin for a
    /// scene without any.
    #[must_use]
    pub fn framing(state: &State, aspect: f32) -> Self {
        let target = if state.positions.is_empty() {
            Vec3::ZERO
        } else {
            let sum = state
                .positions
                .iter()
                .fold(Vec3::ZERO, |acc, p| acc + Vec3::from_array(p.to_array()));
            #[allow(clippy::cast_precision_loss)]
            let count = state.positions.len() as f32;
            sum / count
        };

        Self {
            eye: target + EYE_OFFSET,
            target,
            up: Vec3::Z,
            aspect,
            fovy: 45.0f32.to_radians(),
            znear: 0.05,
            zfar: 100.0,
        }
    }

    /// Creates a combined view projection matrix from the camera parameters.
    #[must_use]
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
        }
    }
}
