//! Built-in scenes.

use lumen_math::{Color, Vec3};

use crate::scene::{CameraDesc, MaterialDesc, SceneDesc};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &["showcase", "single_sphere", "quad"];

/// Look up a built-in scene by name.
pub fn preset(name: &str, width: u32, height: u32) -> Option<SceneDesc> {
    match name {
        "showcase" => Some(showcase(width, height)),
        "single_sphere" => Some(single_sphere(width, height)),
        "quad" => Some(quad(width, height)),
        _ => None,
    }
}

/// Four large spheres, one of them a black mirror, lit by four white lights.
///
/// Everything is measured in pixels of the target image so the framing stays
/// the same at any resolution.
pub fn showcase(width: u32, height: u32) -> SceneDesc {
    let w = width as f32;
    let h = height as f32;

    let camera = CameraDesc::LookAt {
        eye: Vec3::new(0.0, h / 2.0, 0.0),
        view: Vec3::new(0.0, h / 2.0, 1.0),
        up: Vec3::Y,
        near: w,
        far: 5.0 * w,
    };

    let mut scene = SceneDesc::new(width, height, camera)
        .with_sphere(
            Vec3::new(-w, 0.0, w * 3.0),
            w / 2.0,
            MaterialDesc::diffuse(Color::new(0.1, 0.1, 0.9)),
        )
        .with_sphere(
            Vec3::new(-w * 0.7, h, w * 4.0),
            w / 2.0,
            MaterialDesc::new(Color::new(0.5, 0.1, 0.9), Color::ONE, 16.0),
        )
        .with_sphere(
            Vec3::new(0.0, 0.0, w * 3.0),
            w / 2.0,
            MaterialDesc::new(Color::ZERO, Color::ONE, 16.0),
        )
        .with_sphere(Vec3::new(w, 0.0, w * 2.0), w / 2.0, MaterialDesc::diffuse(Color::ONE))
        .with_light(Vec3::new(0.0, 0.0, w), Color::ONE)
        .with_light(Vec3::new(0.0, 0.0, w), Color::ONE)
        .with_light(Vec3::new(w - 250.0, 0.0, w * 2.5), Color::ONE)
        .with_light(Vec3::new(w, 500.0, w * 2.0), Color::ONE);

    scene.background = Color::splat(0.5);
    scene.ambient = Color::splat(0.0001);
    scene.max_depth = 2;
    scene
}

/// A single red sphere straight ahead, lit from the eye.
pub fn single_sphere(width: u32, height: u32) -> SceneDesc {
    let camera = CameraDesc::LookAt {
        eye: Vec3::ZERO,
        view: Vec3::Z,
        up: Vec3::Y,
        near: width.max(height) as f32,
        far: 100.0,
    };

    SceneDesc::new(width, height, camera)
        .with_sphere(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            MaterialDesc::diffuse(Color::new(0.9, 0.0, 0.0)),
        )
        .with_light(Vec3::ZERO, Color::ONE)
}

/// A square split along its diagonal into two triangles.
///
/// The second triangle owns the diagonal exclusively so no point on it is
/// counted twice.
pub fn quad(width: u32, height: u32) -> SceneDesc {
    let camera = CameraDesc::LookAt {
        eye: Vec3::ZERO,
        view: Vec3::Z,
        up: Vec3::Y,
        near: width.max(height) as f32 * 2.0,
        far: 100.0,
    };

    let a = Vec3::new(-1.0, -1.0, 5.0);
    let b = Vec3::new(1.0, 1.0, 5.0);
    let c = Vec3::new(-1.0, 1.0, 5.0);
    let d = Vec3::new(1.0, -1.0, 5.0);

    let mut scene = SceneDesc::new(width, height, camera)
        .with_triangle([a, b, c], MaterialDesc::diffuse(Color::new(0.2, 0.8, 0.2)))
        .with_triangle_edges(
            [a, d, b],
            MaterialDesc::diffuse(Color::new(0.2, 0.2, 0.8)),
            [false, false, true],
        )
        .with_light(Vec3::new(0.0, 0.0, 1.0), Color::ONE);

    scene.background = Color::splat(0.1);
    scene.ambient = Color::splat(0.1);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for name in PRESET_NAMES {
            let scene = preset(name, 72, 48).unwrap();
            assert!(scene.validate().is_ok(), "preset {name} failed validation");
            assert_eq!((scene.width, scene.height), (72, 48));
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(preset("cornell_box", 10, 10).is_none());
    }

    #[test]
    fn test_showcase_layout() {
        let scene = showcase(720, 480);
        assert_eq!(scene.shapes.len(), 4);
        assert_eq!(scene.lights.len(), 4);
        assert_eq!(scene.camera.frame().near, 720.0);
        assert_eq!(scene.camera.frame().far, 3600.0);
    }
}
