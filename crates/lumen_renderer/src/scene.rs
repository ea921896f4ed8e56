//! Per-render scene snapshot.

use lumen_core::{SceneDesc, ShapeDesc};

use crate::{Light, Material, Primitive, PrimitiveList, RenderConfig, Sphere, Triangle};

/// Everything the kernel reads while rendering.
///
/// Read-only for the duration of a render and shared by every worker.
#[derive(Default)]
pub struct Scene {
    pub primitives: PrimitiveList,
    pub lights: Vec<Light>,
    pub config: RenderConfig,
}

impl Scene {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            primitives: PrimitiveList::new(),
            lights: Vec::new(),
            config,
        }
    }

    /// Append a primitive. Order decides ties between equal hits.
    pub fn add(&mut self, primitive: impl Primitive + 'static) {
        self.primitives.add(Box::new(primitive));
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Build kernel primitives from a scene description, keeping shape order.
    pub fn from_desc(desc: &SceneDesc) -> Self {
        let mut scene = Self::new(RenderConfig::from_desc(desc));

        for shape in &desc.shapes {
            let material = Material::from(shape.material());
            match shape {
                ShapeDesc::Sphere { center, radius, .. } => {
                    scene.add(Sphere::new(*center, *radius, material));
                }
                ShapeDesc::Triangle {
                    vertices,
                    exclusive_edges,
                    ..
                } => {
                    let [v0, v1, v2] = *vertices;
                    scene.add(Triangle::new(v0, v1, v2, material).with_exclusive_edges(*exclusive_edges));
                }
            }
        }

        scene.lights = desc.lights.iter().map(Light::from).collect();

        log::debug!(
            "Built scene: {} primitives, {} lights, depth {}",
            scene.primitives.len(),
            scene.lights.len(),
            scene.config.max_depth
        );

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Vec3};
    use lumen_core::presets;

    #[test]
    fn test_from_desc_keeps_order_and_settings() {
        let desc = presets::showcase(72, 48);
        let scene = Scene::from_desc(&desc);

        assert_eq!(scene.primitives.len(), 4);
        assert_eq!(scene.lights.len(), 4);
        assert_eq!(scene.config.max_depth, 2);
        assert_eq!(scene.config.background, Color::splat(0.5));

        // Third sphere is the black mirror
        let mirror = scene.primitives[2].material();
        assert_eq!(mirror.diffuse, Color::ZERO);
        assert_eq!(mirror.specular, Color::ONE);
    }

    #[test]
    fn test_from_desc_builds_triangles() {
        let desc = presets::quad(32, 32);
        let scene = Scene::from_desc(&desc);

        assert_eq!(scene.primitives.len(), 2);
        assert_eq!(scene.primitives[0].normal(Vec3::ZERO), Vec3::NEG_Z);
        assert_eq!(scene.lights[0].position, Vec3::new(0.0, 0.0, 1.0));
    }
}
