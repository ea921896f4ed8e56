//! Sphere primitive for ray tracing.

use crate::{Material, Primitive, Ray, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. A zero or negative radius is a caller error.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Primitive for Sphere {
    /// Smaller root of `|o + t·v|² = r²` with `o = origin - center`.
    ///
    /// A ray starting inside the sphere gets a negative root.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let o = ray.origin() - self.center;
        let v = ray.direction();

        let a = v.length_squared();
        let h = o.dot(v);
        let c = o.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        Some((-h - discriminant.sqrt()) / a)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
