//! Scene file loading.
//!
//! Scenes are JSON documents deserialized straight into [`SceneDesc`] and
//! validated before they reach the renderer, which assumes well-formed input.

use std::path::Path;

use lumen_math::Vec3;
use thiserror::Error;

use crate::scene::{CameraDesc, SceneDesc, ShapeDesc};

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDesc> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse and validate a JSON scene document.
pub fn load_scene_from_str(text: &str) -> SceneResult<SceneDesc> {
    let scene: SceneDesc = serde_json::from_str(text)?;
    scene.validate().inspect_err(|e| log::warn!("{e}"))?;

    log::info!(
        "Loaded scene: {}x{}, {} shapes, {} lights, depth {}",
        scene.width,
        scene.height,
        scene.shapes.len(),
        scene.lights.len(),
        scene.max_depth
    );
    Ok(scene)
}

fn invalid(message: impl Into<String>) -> SceneError {
    SceneError::Invalid(message.into())
}

fn check_finite(what: &str, v: Vec3) -> SceneResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{what} is not finite: {v}")))
    }
}

fn check_positive(what: &str, x: f32) -> SceneResult<()> {
    if x.is_finite() && x > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{what} must be positive, got {x}")))
    }
}

impl SceneDesc {
    /// Reject scenes the renderer cannot draw meaningfully.
    ///
    /// Degenerate triangles are not detected; they simply never report a hit.
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        match &self.camera {
            CameraDesc::LookAt {
                eye,
                view,
                up,
                near,
                ..
            } => {
                check_finite("camera eye", *eye)?;
                check_finite("camera view", *view)?;
                check_finite("camera up", *up)?;
                if eye == view {
                    return Err(invalid("camera eye and view coincide"));
                }
                check_positive("camera near", *near)?;
            }
            CameraDesc::Orbit {
                target,
                distance,
                near,
                zoom,
                ..
            } => {
                check_finite("camera target", *target)?;
                check_positive("camera distance", *distance)?;
                check_positive("camera near", *near)?;
                check_positive("camera zoom", *zoom)?;
            }
        }

        // An up vector parallel to the view direction leaves no image plane
        let frame = self.camera.frame();
        let forward = frame.view - frame.eye;
        let side = forward.cross(frame.up).length_squared();
        if !(side > 1e-10 * forward.length_squared() * frame.up.length_squared()) {
            return Err(invalid("camera up is parallel to the view direction"));
        }

        for (i, light) in self.lights.iter().enumerate() {
            check_finite(&format!("light {i} position"), light.position)?;
            check_finite(&format!("light {i} color"), light.color)?;
        }

        for (i, shape) in self.shapes.iter().enumerate() {
            match shape {
                ShapeDesc::Sphere { center, radius, .. } => {
                    check_finite(&format!("sphere {i} center"), *center)?;
                    check_positive(&format!("sphere {i} radius"), *radius)?;
                }
                ShapeDesc::Triangle { vertices, .. } => {
                    for v in vertices {
                        check_finite(&format!("triangle {i} vertex"), *v)?;
                    }
                }
            }
            let material = shape.material();
            check_finite(&format!("shape {i} diffuse"), material.diffuse)?;
            check_finite(&format!("shape {i} specular"), material.specular)?;
            if !material.shininess.is_finite() {
                return Err(invalid(format!("shape {i} shininess is not finite")));
            }
        }

        check_finite("background", self.background)?;
        check_finite("ambient", self.ambient)?;
        Ok(())
    }
}
