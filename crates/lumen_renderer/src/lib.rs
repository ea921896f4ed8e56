//! Lumen Renderer - CPU Whitted-style raytracing.
//!
//! Point lights, Phong shading with hard shadows, mirror reflections up to
//! a fixed depth, 2x2 supersampling and a global exposure pass that scales
//! the whole image by its brightest sample.
//!
//! Intersection is a linear scan over the primitive list; insertion order
//! breaks ties between equally distant hits.

mod camera;
mod light;
mod material;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;
mod visibility;

pub use camera::{Camera, SampleGrid};
pub use light::Light;
pub use material::Material;
pub use primitive::{Primitive, PrimitiveList};
pub use renderer::{
    max_intensity, render, render_image, resolve, trace_samples, ImageBuffer, RenderConfig,
    RenderError, RenderResult, RenderStats, SampleBuffer, SAMPLES_PER_PIXEL,
};
pub use scene::Scene;
pub use shading::{is_escaped, shade, ESCAPED};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use visibility::{find_nearest, is_occluded, Hit};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Ray, Vec3};
