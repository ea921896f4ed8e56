//! Whitted-style shading: Phong direct lighting with hard shadows plus a
//! bounded chain of mirror bounces.

use lumen_math::VectorExt;

use crate::{find_nearest, is_occluded, Color, Hit, Material, Ray, Scene, Vec3};

/// Returned for a primary ray that hit nothing.
///
/// The background is composited after exposure, so escaped samples must not
/// look like real intensities.
pub const ESCAPED: Color = Color::new(-1.0, -1.0, -1.0);

/// True for samples produced by [`ESCAPED`]. Real intensities are never negative.
#[inline]
pub fn is_escaped(sample: Color) -> bool {
    sample.x < 0.0
}

/// Intensity carried back along `ray` from `hit`.
///
/// Runs one stage per surface, at most `max_depth + 1` stages. Each stage
/// adds ambient plus direct lighting at the current surface, weighted by the
/// product of the specular colors and bounce attenuations of the surfaces
/// before it. The chain stops early when a bounce ray leaves the scene.
///
/// Every stage takes its view vector and its mirror direction from the ray
/// that reached that surface, not from the primary ray.
pub fn shade(scene: &Scene, ray: &Ray, hit: Option<Hit>) -> Color {
    let Some(Hit { mut index, t }) = hit else {
        return ESCAPED;
    };

    let max_depth = scene.config.max_depth;
    let mut point = ray.at(t);
    let mut incoming = ray.direction() * t;
    let mut reflectance = Color::ONE;
    let mut intensity = Color::ZERO;

    for bounce in 0..=max_depth {
        let primitive = &scene.primitives[index];
        let material = primitive.material();
        let normal = primitive.normal(point);
        let view = -incoming.normalize();

        intensity += reflectance * direct_lighting(scene, index, point, normal, view, material);

        if bounce == max_depth {
            break;
        }

        let bounce_dir = -incoming.reflection(normal);
        let Some(next) = find_nearest(&scene.primitives, &Ray::new(point, bounce_dir), Some(index)) else {
            break;
        };

        let travel = bounce_dir * next.t;
        point += travel;
        reflectance *= material.specular * travel.attenuation();
        incoming = bounce_dir;
        index = next.index;
    }

    intensity
}

/// Ambient plus the unshadowed Phong terms of every light facing the surface.
fn direct_lighting(
    scene: &Scene,
    index: usize,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    material: &Material,
) -> Color {
    let mut local = material.diffuse * scene.config.ambient;

    for light in &scene.lights {
        let to_light = light.position - point;
        let light_cosine = normal.dot(to_light.normalize());
        if light_cosine < 0.0 {
            continue;
        }

        if is_occluded(&scene.primitives, light.position, -to_light, index) {
            continue;
        }

        let reflect_cosine = to_light.reflection(normal).dot(view);
        local += light.color * material.response(light_cosine, reflect_cosine) * to_light.attenuation();
    }

    local
}
