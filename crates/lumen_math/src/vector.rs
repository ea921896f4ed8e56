//! Lighting helpers on top of `glam::Vec3`.

use crate::Vec3;

/// Scale of the distance falloff used by [`VectorExt::attenuation`].
pub const ATTENUATION_FACTOR: f32 = 0.001;

/// Operations the shading code needs that glam does not provide.
pub trait VectorExt {
    /// Mirror `self` about the line spanned by `normal`.
    ///
    /// The component along `normal` is kept, the tangential remainder is
    /// negated, and the result is renormalized. `normal` must be unit length.
    /// Reflecting an incoming direction this way yields a vector pointing
    /// back into the surface; negate it to get the outgoing bounce.
    fn reflection(self, normal: Vec3) -> Vec3;

    /// Inverse-distance falloff `1 / (1 + |self| * ATTENUATION_FACTOR)`,
    /// where `self` spans the distance being attenuated.
    fn attenuation(self) -> f32;
}

impl VectorExt for Vec3 {
    #[inline]
    fn reflection(self, normal: Vec3) -> Vec3 {
        let projection = normal * normal.dot(self);
        let tangent = self - projection;
        (projection - tangent).normalize()
    }

    #[inline]
    fn attenuation(self) -> f32 {
        1.0 / (1.0 + self.length() * ATTENUATION_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-6
    }

    #[test]
    fn test_reflection_keeps_normal_component() {
        let v = Vec3::new(1.0, 1.0, 0.0);
        let r = v.reflection(Vec3::Y);

        // Tangent flips, normal part stays, result is unit length
        assert!(approx_eq(r, Vec3::new(-1.0, 1.0, 0.0).normalize()));
    }

    #[test]
    fn test_reflection_of_normal_is_normal() {
        let r = Vec3::new(0.0, 0.0, 3.0).reflection(Vec3::Z);
        assert!(approx_eq(r, Vec3::Z));
    }

    #[test]
    fn test_negated_reflection_is_mirror_bounce() {
        // Ray travelling down onto a floor bounces back up
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let bounce = -incoming.reflection(Vec3::Y);
        assert!(approx_eq(bounce, Vec3::new(1.0, 1.0, 0.0).normalize()));
    }

    #[test]
    fn test_attenuation() {
        assert_eq!(Vec3::ZERO.attenuation(), 1.0);

        let far = Vec3::new(0.0, 1000.0, 0.0).attenuation();
        assert!((far - 0.5).abs() < 1e-6);

        // Falloff is monotonic in distance
        assert!(Vec3::splat(10.0).attenuation() > Vec3::splat(20.0).attenuation());
    }

    #[test]
    fn test_zero_length_normalize_is_nan() {
        assert!(Vec3::ZERO.reflection(Vec3::Y).is_nan());
    }
}
