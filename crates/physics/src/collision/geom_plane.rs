//! Geom-plane collision detection and response

use super::Contact;
use crate::types::{Geom, Vec3};

/// Detect penetration of a geom (framed at `body_pos`) into a static plane.
pub fn detect_geom_plane_collision(
    geom: &Geom,
    body_pos: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
    plane: &Geom,
) -> Option<Contact> {
    // Deepest point of the geom along the inward plane normal
    let support_point = geom.support_point(body_pos, -plane_normal);
    let distance = plane_normal.dot(support_point - plane_point);

    if distance >= 0.0 {
        return None;
    }

    Some(Contact::new(
        support_point - plane_normal * distance,
        plane_normal,
        -distance,
        &geom.material,
        &plane.material,
    ))
}

/// Apply the contact impulse and push the body back out of the plane.
pub fn resolve_plane_contact(pos: &mut Vec3, vel: &mut Vec3, contact: &Contact) {
    let velocity_along_normal = vel.dot(contact.normal);

    if velocity_along_normal < 0.0 {
        let normal_impulse = -(1.0 + contact.restitution) * velocity_along_normal;
        *vel += contact.normal * normal_impulse;
        apply_friction(vel, contact, normal_impulse);
    }

    *pos += contact.normal * contact.depth;
}

/// Remove tangential velocity up to `friction * normal_impulse`.
fn apply_friction(vel: &mut Vec3, contact: &Contact, normal_impulse: f32) {
    let tangent_velocity = *vel - contact.normal * vel.dot(contact.normal);
    let tangent_speed = tangent_velocity.length();
    if tangent_speed > 1e-6 {
        let reduction = (contact.friction * normal_impulse).min(tangent_speed);
        *vel -= tangent_velocity / tangent_speed * reduction;
    }
}
