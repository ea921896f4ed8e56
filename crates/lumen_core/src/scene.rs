//! Scene description types for Lumen.
//!
//! This module defines the serializable scene representation consumed by
//! the renderer. Vectors and colors are written as `[x, y, z]` arrays.

use lumen_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

fn default_shininess() -> f32 {
    1.0
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_zoom() -> f32 {
    1.0
}

fn white() -> Color {
    Color::ONE
}

/// A Phong surface description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    /// Diffuse color, also used as the ambient reflectance
    pub diffuse: Color,

    /// Specular color; doubles as the mirror reflectance of the surface
    #[serde(default)]
    pub specular: Color,

    /// Specular exponent
    #[serde(default = "default_shininess")]
    pub shininess: f32,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            diffuse: Color::splat(0.5), // Grey default
            specular: Color::ZERO,
            shininess: default_shininess(),
        }
    }
}

impl MaterialDesc {
    /// A purely diffuse material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }

    /// A material with both diffuse and specular response.
    pub fn new(diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }
}

/// A point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub position: Vec3,

    /// Emitted intensity, not limited to [0, 1]
    pub color: Color,
}

/// Geometric primitives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDesc {
    Sphere {
        center: Vec3,
        radius: f32,
        material: MaterialDesc,
    },
    Triangle {
        /// Clockwise as seen from the lit side
        vertices: [Vec3; 3],
        material: MaterialDesc,
        /// Per edge (v0→v1, v1→v2, v2→v0): treat the edge itself as outside.
        /// Set on one side of an edge shared by two triangles.
        #[serde(default)]
        exclusive_edges: [bool; 3],
    },
}

impl ShapeDesc {
    pub fn material(&self) -> &MaterialDesc {
        match self {
            ShapeDesc::Sphere { material, .. } | ShapeDesc::Triangle { material, .. } => material,
        }
    }
}

/// The resolved pinhole placement a camera description boils down to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub eye: Vec3,
    pub view: Vec3,
    pub up: Vec3,
    pub near: f32,
    pub far: f32,
}

/// Camera placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraDesc {
    /// Eye looking at `view`, `up` need not be orthogonal to the view axis.
    LookAt {
        eye: Vec3,
        view: Vec3,
        #[serde(default = "default_up")]
        up: Vec3,
        near: f32,
        far: f32,
    },
    /// The interactive controls: orbit `target` at `distance`.
    ///
    /// Azimuth turns around +Y starting from -Z, attitude lifts the eye
    /// towards +Y. `zoom` multiplies the near distance.
    Orbit {
        target: Vec3,
        distance: f32,
        #[serde(default)]
        azimuth_deg: f32,
        #[serde(default)]
        attitude_deg: f32,
        near: f32,
        #[serde(default = "default_zoom")]
        zoom: f32,
        far: f32,
    },
}

impl CameraDesc {
    /// Resolve to eye/view/up and the effective near distance.
    pub fn frame(&self) -> CameraFrame {
        match *self {
            CameraDesc::LookAt {
                eye,
                view,
                up,
                near,
                far,
            } => CameraFrame {
                eye,
                view,
                up,
                near,
                far,
            },
            CameraDesc::Orbit {
                target,
                distance,
                azimuth_deg,
                attitude_deg,
                near,
                zoom,
                far,
            } => {
                let (az, att) = (azimuth_deg.to_radians(), attitude_deg.to_radians());
                let offset = Vec3::new(att.cos() * az.sin(), att.sin(), -att.cos() * az.cos());
                CameraFrame {
                    eye: target + offset * distance,
                    view: target,
                    up: Vec3::Y,
                    near: near * zoom,
                    far,
                }
            }
        }
    }

    /// Convert to an orbit rig around the point currently looked at.
    ///
    /// The resolved frame is unchanged except that `up` becomes +Y.
    pub fn to_orbit(&self) -> CameraDesc {
        match *self {
            CameraDesc::Orbit { .. } => self.clone(),
            CameraDesc::LookAt {
                eye,
                view,
                near,
                far,
                ..
            } => {
                let offset = eye - view;
                let distance = offset.length();
                let dir = offset / distance;
                CameraDesc::Orbit {
                    target: view,
                    distance,
                    azimuth_deg: dir.x.atan2(-dir.z).to_degrees(),
                    attitude_deg: dir.y.clamp(-1.0, 1.0).asin().to_degrees(),
                    near,
                    zoom: 1.0,
                    far,
                }
            }
        }
    }
}

/// A complete scene: image size, camera, lights, shapes and render constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    pub width: u32,
    pub height: u32,
    pub camera: CameraDesc,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
    /// Order matters: earlier shapes win intersection ties
    #[serde(default)]
    pub shapes: Vec<ShapeDesc>,
    #[serde(default)]
    pub background: Color,
    #[serde(default = "white")]
    pub ambient: Color,
    /// Number of mirror bounces after the primary hit
    #[serde(default)]
    pub max_depth: u32,
}

impl SceneDesc {
    /// Create an empty scene with default render constants.
    pub fn new(width: u32, height: u32, camera: CameraDesc) -> Self {
        Self {
            width,
            height,
            camera,
            lights: Vec::new(),
            shapes: Vec::new(),
            background: Color::ZERO,
            ambient: white(),
            max_depth: 0,
        }
    }

    pub fn with_light(mut self, position: Vec3, color: Color) -> Self {
        self.lights.push(LightDesc { position, color });
        self
    }

    pub fn with_sphere(mut self, center: Vec3, radius: f32, material: MaterialDesc) -> Self {
        self.shapes.push(ShapeDesc::Sphere {
            center,
            radius,
            material,
        });
        self
    }

    pub fn with_triangle(self, vertices: [Vec3; 3], material: MaterialDesc) -> Self {
        self.with_triangle_edges(vertices, material, [false; 3])
    }

    pub fn with_triangle_edges(
        mut self,
        vertices: [Vec3; 3],
        material: MaterialDesc,
        exclusive_edges: [bool; 3],
    ) -> Self {
        self.shapes.push(ShapeDesc::Triangle {
            vertices,
            material,
            exclusive_edges,
        });
        self
    }
}
