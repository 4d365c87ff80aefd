//! Rotations stored as unit quaternions and their linear 4-vector encoding.

use core::ops::Mul;

use crate::float::Float;
use crate::vec::{Vec, Vec3, Vec4};

/// A rotation as a quaternion `x·i + y·j + z·k + w`.
///
/// Only unit-length quaternions are rotations. [`Quat::from_vector`] with
/// `normalize = false` can produce non-unit values, used for velocities.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    /// Create a quaternion from raw components.
    pub fn new(x: F, y: F, z: F, w: F) -> Self {
        Quat { x, y, z, w }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }

    /// Rotation of `angle` radians around a unit `axis`.
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let half = angle / F::two();
        let s = half.sin();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: half.cos() }
    }

    /// Linear encoding used by the spring: components in `(x, y, z, w)` order.
    pub fn to_vector(self) -> Vec4<F> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Decode a 4-vector.
    ///
    /// With `normalize` the result is projected onto unit length, so it is a
    /// valid rotation; a zero-length input decodes to the identity. Without
    /// it the components are passed through untouched, which is what a
    /// velocity needs.
    pub fn from_vector(v: Vec4<F>, normalize: bool) -> Self {
        if !normalize {
            return Quat::new(v.x, v.y, v.z, v.w);
        }
        let n = v.normalize();
        if n == Vec4::zero() {
            Self::identity()
        } else {
            Quat::new(n.x, n.y, n.z, n.w)
        }
    }

    /// 4D dot product of the encodings.
    pub fn dot(self, other: Self) -> F {
        self.to_vector().dot(other.to_vector())
    }

    /// Return `self` or `-self`, whichever lies in the same hemisphere as
    /// `reference`. Both describe the same rotation.
    pub fn aligned_to(self, reference: Self) -> Self {
        if self.dot(reference) < F::zero() {
            Quat::new(-self.x, -self.y, -self.z, -self.w)
        } else {
            self
        }
    }

    /// Inverse of a unit quaternion.
    pub fn conjugate(self) -> Self {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Angle in radians between two rotations, in `[0, π]`.
    pub fn angle_to(self, other: Self) -> F {
        let rel = self.conjugate() * other;
        let s = Vec3::new(rel.x, rel.y, rel.z).length();
        F::two() * F::atan2(s, rel.w.abs())
    }

    /// Rotate a vector.
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v).scale(F::two());
        v + t.scale(self.w) + u.cross(t)
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl<F: Float> Mul for Quat<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = Vec3::new(self.x, self.y, self.z);
        let b = Vec3::new(rhs.x, rhs.y, rhs.z);
        let v = b.scale(self.w) + a.scale(rhs.w) + a.cross(b);
        Quat::new(v.x, v.y, v.z, self.w * rhs.w - a.dot(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_y() -> Vec3<f32> {
        Vec3::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn round_trip_through_vector() {
        let q = Quat::from_axis_angle(Vec3::new(0.6f32, 0.0, 0.8), 1.2);
        let back = Quat::from_vector(q.to_vector(), true);
        assert!(q.angle_to(back) < 1e-3);
        assert!((back.to_vector().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negated_vector_is_same_rotation() {
        let q = Quat::from_axis_angle(axis_y(), 0.7);
        let back = Quat::from_vector(-q.to_vector(), true);
        assert!(q.angle_to(back) < 1e-3);
        assert!(back.aligned_to(q).dot(q) > 0.0);
    }

    #[test]
    fn zero_vector_decodes_to_identity() {
        assert_eq!(Quat::from_vector(Vec4::<f32>::zero(), true), Quat::identity());
    }

    #[test]
    fn unnormalized_decode_keeps_components() {
        let v = Vec4::new(0.1f32, -0.2, 0.3, 0.0);
        let q = Quat::from_vector(v, false);
        assert_eq!(q.to_vector(), v);
    }

    #[test]
    fn quarter_turn_rotates_x_onto_minus_z() {
        let q = Quat::from_axis_angle(axis_y(), core::f32::consts::FRAC_PI_2);
        let r = q.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert!(r.x.abs() < 1e-6);
        assert!((r.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn product_composes_angles() {
        let a = Quat::from_axis_angle(axis_y(), 0.3);
        let b = Quat::from_axis_angle(axis_y(), 0.5);
        let ab = a * b;
        assert!((Quat::identity().angle_to(ab) - 0.8).abs() < 1e-5);
    }
}
