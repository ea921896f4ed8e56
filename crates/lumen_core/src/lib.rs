//! Lumen Core - Scene descriptions for the Lumen raytracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDesc`, `CameraDesc`, `LightDesc`,
//!   `ShapeDesc`, `MaterialDesc`
//! - **Loading**: JSON scene files with validation
//! - **Presets**: built-in demo scenes
//!
//! Descriptions are plain data. The renderer turns them into its own
//! primitives when a render is requested.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} shapes, {} lights", scene.shapes.len(), scene.lights.len());
//! ```

pub mod loader;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{CameraDesc, CameraFrame, LightDesc, MaterialDesc, SceneDesc, ShapeDesc};
