//! # Physics Integration
//!
//! Semi-implicit Euler for translating bodies: velocity is updated from
//! gravity first, then position from the new velocity.

use crate::types::Vec3;

pub fn integrate_bodies(positions: &mut [Vec3], velocities: &mut [Vec3], gravity: Vec3, dt: f32) {
    for (pos, vel) in positions.iter_mut().zip(velocities.iter_mut()) {
        *vel += gravity * dt;
        *pos += *vel * dt;
    }
}
