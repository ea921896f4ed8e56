//! Command line arguments.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_core::{load_scene, presets, CameraDesc, SceneDesc};

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

const DEFAULT_WIDTH: u32 = 720;
const DEFAULT_HEIGHT: u32 = 480;

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Whitted-style raytracer: renders a scene once and writes a PNG")]
pub struct Args {
    /// Scene file (JSON). Without one, a built-in preset is rendered
    pub scene: Option<PathBuf>,

    /// Built-in scene to render when no scene file is given
    #[arg(long, default_value = "showcase", conflicts_with = "scene")]
    pub preset: String,

    /// Output PNG path
    #[arg(short, long, default_value = "lumen.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Mirror bounces after the first hit
    #[arg(long)]
    pub depth: Option<u32>,

    /// Distance from the eye to the image plane, in pixels
    #[arg(long)]
    pub near: Option<f32>,

    /// Near distance multiplier (orbit camera)
    #[arg(long)]
    pub zoom: Option<f32>,

    /// Orbit angle around +Y in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub azimuth: Option<f32>,

    /// Orbit elevation in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub attitude: Option<f32>,

    /// Orbit radius around the look-at point
    #[arg(long)]
    pub distance: Option<f32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Load the scene file or build the preset, then apply the overrides.
    pub fn scene_desc(&self) -> Result<SceneDesc> {
        let mut desc = match &self.scene {
            Some(path) => load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?,
            None => {
                let width = self.width.unwrap_or(DEFAULT_WIDTH);
                let height = self.height.unwrap_or(DEFAULT_HEIGHT);
                presets::preset(&self.preset, width, height).ok_or_else(|| {
                    anyhow!(
                        "Unknown preset '{}', expected one of: {}",
                        self.preset,
                        presets::PRESET_NAMES.join(", ")
                    )
                })?
            }
        };

        self.apply_overrides(&mut desc);
        desc.validate().context("Scene is invalid after applying overrides")?;
        Ok(desc)
    }

    fn uses_orbit(&self) -> bool {
        self.zoom.is_some()
            || self.azimuth.is_some()
            || self.attitude.is_some()
            || self.distance.is_some()
    }

    /// Apply size, depth and camera flags to a scene.
    ///
    /// Any orbit flag turns a look-at camera into an orbit rig around the
    /// point it was looking at.
    pub fn apply_overrides(&self, desc: &mut SceneDesc) {
        if let Some(width) = self.width {
            desc.width = width;
        }
        if let Some(height) = self.height {
            desc.height = height;
        }
        if let Some(depth) = self.depth {
            desc.max_depth = depth;
        }

        if self.uses_orbit() {
            desc.camera = desc.camera.to_orbit();
        }

        match &mut desc.camera {
            CameraDesc::LookAt { near, .. } => {
                if let Some(value) = self.near {
                    *near = value;
                }
            }
            CameraDesc::Orbit {
                distance,
                azimuth_deg,
                attitude_deg,
                near,
                zoom,
                ..
            } => {
                if let Some(value) = self.near {
                    *near = value;
                }
                if let Some(value) = self.zoom {
                    *zoom = value;
                }
                if let Some(value) = self.azimuth {
                    *azimuth_deg = value;
                }
                if let Some(value) = self.attitude {
                    *attitude_deg = value;
                }
                if let Some(value) = self.distance {
                    *distance = value;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::presets::single_sphere;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lumen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.scene.is_none());
        assert_eq!(args.preset, "showcase");
        assert_eq!(args.output, PathBuf::from("lumen.png"));
        assert_eq!(args.log_level, LogLevel::Info);
        assert!(!args.uses_orbit());
    }

    #[test]
    fn test_preset_with_size() {
        let args = parse(&["--preset", "quad", "--width", "40", "--height", "30"]);
        let desc = args.scene_desc().unwrap();

        assert_eq!((desc.width, desc.height), (40, 30));
        assert_eq!(desc.shapes.len(), 2);
    }

    #[test]
    fn test_unknown_preset() {
        let args = parse(&["--preset", "teapot"]);
        let err = args.scene_desc().unwrap_err();
        assert!(err.to_string().contains("teapot"));
    }

    #[test]
    fn test_scene_and_preset_conflict() {
        let result = Args::try_parse_from(["lumen", "scene.json", "--preset", "quad"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_scene_file() {
        let args = parse(&["/nonexistent/scene.json"]);
        assert!(args.scene_desc().is_err());
    }

    #[test]
    fn test_depth_and_near_override_look_at() {
        let mut desc = single_sphere(32, 32);
        parse(&["--depth", "3", "--near", "12.5"]).apply_overrides(&mut desc);

        assert_eq!(desc.max_depth, 3);
        assert!(matches!(desc.camera, CameraDesc::LookAt { near, .. } if near == 12.5));
    }

    #[test]
    fn test_orbit_flag_converts_camera() {
        let mut desc = single_sphere(32, 32);
        parse(&["--azimuth", "-90", "--zoom", "2"]).apply_overrides(&mut desc);

        let CameraDesc::Orbit {
            target,
            distance,
            azimuth_deg,
            zoom,
            ..
        } = desc.camera
        else {
            panic!("expected orbit camera, got {:?}", desc.camera);
        };

        // single_sphere looks from the origin towards +Z
        assert_eq!(target.to_array(), [0.0, 0.0, 1.0]);
        assert!((distance - 1.0).abs() < 1e-6);
        assert_eq!(azimuth_deg, -90.0);
        assert_eq!(zoom, 2.0);
    }

    #[test]
    fn test_vertical_orbit_is_rejected() {
        let err = parse(&["--preset", "single_sphere", "--attitude", "90"])
            .scene_desc()
            .unwrap_err();
        assert!(format!("{err:#}").contains("parallel"));

        assert!(parse(&["--preset", "single_sphere", "--attitude", "45"])
            .scene_desc()
            .is_ok());
    }

    #[test]
    fn test_log_level_conversion() {
        let args = parse(&["--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
