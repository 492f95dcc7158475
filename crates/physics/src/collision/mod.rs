//! # Collision Detection and Response
//!
//! Dynamic geoms collide only with static planes. Response is impulse
//! based with Coulomb-style friction clamping.

mod geom_plane;

pub use geom_plane::*;

use crate::types::{Material, Vec3};

/// Contact information for collision response
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Contact point in world space
    pub point: Vec3,
    /// Contact normal, pointing out of the plane
    pub normal: Vec3,
    /// Penetration depth
    pub depth: f32,
    /// Combined friction coefficient
    pub friction: f32,
    /// Combined restitution coefficient
    pub restitution: f32,
}

impl Contact {
    /// Create a new contact with material properties
    pub fn new(point: Vec3, normal: Vec3, depth: f32, mat_a: &Material, mat_b: &Material) -> Self {
        Self {
            point,
            normal,
            depth,
            friction: combine(mat_a.friction, mat_b.friction),
            restitution: combine(mat_a.restitution, mat_b.restitution),
        }
    }
}

/// Geometric mean of two material coefficients
fn combine(a: f32, b: f32) -> f32 {
    (a * b).sqrt()
}
