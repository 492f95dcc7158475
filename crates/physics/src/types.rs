//! Plain value types shared by the scene loader and the stepper.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Three component vector in world space (MJCF convention: +Z is up).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for a degenerate input.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > f32::EPSILON {
            self / len
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Contact material of a geom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Sliding friction coefficient (first component of MJCF `friction`).
    pub friction: f32,
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: 1.0,
            restitution: 0.0,
        }
    }
}

/// Collision shape of a geom, sized in MJCF half-extent convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Infinite plane through the geom position. `half_size` only bounds
    /// the visual quad.
    Plane { normal: Vec3, half_size: [f32; 2] },
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

/// A geom placed relative to its owning body (or the world for static geoms).
#[derive(Clone, Debug, PartialEq)]
pub struct Geom {
    pub name: Option<String>,
    pub shape: Shape,
    pub offset: Vec3,
    pub rgba: [f32; 4],
    pub material: Material,
}

impl Geom {
    /// Point of the geom furthest along `direction`, given the world
    /// position of its frame.
    #[must_use]
    pub fn support_point(&self, frame_pos: Vec3, direction: Vec3) -> Vec3 {
        let center = frame_pos + self.offset;
        match self.shape {
            Shape::Sphere { radius } => center + direction.normalize() * radius,
            Shape::Box { half_extents } => Vec3::new(
                center.x + half_extents.x * direction.x.signum(),
                center.y + half_extents.y * direction.y.signum(),
                center.z + half_extents.z * direction.z.signum(),
            ),
            Shape::Plane { .. } => center,
        }
    }
}

/// Global simulation options from `<option>`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimOptions {
    /// Step size in seconds.
    pub timestep: f64,
    pub gravity: Vec3,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            timestep: 0.002,
            gravity: Vec3::new(0.0, 0.0, -9.81),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn box_support_point_picks_lowest_corner() {
        let geom = Geom {
            name: None,
            shape: Shape::Box {
                half_extents: Vec3::new(0.1, 0.2, 0.3),
            },
            offset: Vec3::ZERO,
            rgba: [1.0; 4],
            material: Material::default(),
        };
        let p = geom.support_point(Vec3::new(0.0, 0.0, 1.0), -Vec3::Z);
        assert!((p.z - 0.7).abs() < 1e-6);
    }

    #[test]
    fn normalize_degenerate_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }
}
