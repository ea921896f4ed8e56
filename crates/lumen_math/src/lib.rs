// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod color;
mod interval;
mod ray;
mod vector;

pub use color::{pack_rgba, rgba_bytes, unpack_rgba, Color};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{VectorExt, ATTENUATION_FACTOR};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_is_component_wise() {
        let a = Color::new(0.5, 1.0, 2.0);
        let b = Color::new(2.0, 0.5, 0.25);
        assert_eq!(a * b, Color::new(1.0, 0.5, 0.5));
        assert_eq!(a / b, Color::new(0.25, 2.0, 8.0));
        assert_eq!(a + b, Color::new(2.5, 1.5, 2.25));
        assert_eq!(a * 2.0, Color::new(1.0, 2.0, 4.0));
    }
}
