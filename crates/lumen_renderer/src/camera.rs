//! Pinhole camera and the 2x2 supersampling grid.

use lumen_core::{CameraFrame, SceneDesc};

use crate::{Ray, Vec3};

/// Pinhole camera for generating primary rays.
///
/// The basis is derived from eye, view target and an approximate up vector,
/// so `up` does not need to be orthogonal to the view direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub width: u32,
    pub height: u32,

    eye: Vec3,
    /// View target minus eye, unnormalized
    z: Vec3,
    right: Vec3,
    up: Vec3,
    /// Distance from the eye to the image plane, in pixels
    near: f32,
    /// Unused by the kernel
    far: f32,
}

impl Camera {
    /// Create a new camera.
    pub fn new(eye: Vec3, view: Vec3, up: Vec3, near: f32, far: f32, width: u32, height: u32) -> Self {
        let z = view - eye;
        let right = z.cross(up);
        let up = right.cross(z);

        Self {
            width,
            height,
            eye,
            z,
            right,
            up,
            near,
            far,
        }
    }

    /// Build a camera from a resolved camera frame.
    pub fn from_frame(frame: &CameraFrame, width: u32, height: u32) -> Self {
        Self::new(frame.eye, frame.view, frame.up, frame.near, frame.far, width, height)
    }

    /// Build the camera for a scene description.
    pub fn from_desc(desc: &SceneDesc) -> Self {
        Self::from_frame(&desc.camera.frame(), desc.width, desc.height)
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.z.normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.right.normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.up.normalize()
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Sub-pixel sample directions, two per pixel along each axis.
    ///
    /// The image plane sits `near` units in front of the eye and one pixel is
    /// one unit wide, so `near` controls the field of view. Row 0 is the top
    /// of the image.
    pub fn sample_grid(&self) -> SampleGrid {
        let center = self.forward() * self.near;
        let dx = self.right() * 0.5;
        let dy = self.up() * -0.5;

        let w = self.width as f32;
        let h = self.height as f32;
        let first = center + dx * (-w + 0.5) + dy * (-h + 0.5);

        SampleGrid {
            eye: self.eye,
            first,
            dx,
            dy,
            columns: self.width as usize * 2,
            rows: self.height as usize * 2,
        }
    }
}

/// Precomputed primary ray directions for a `2w x 2h` sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    eye: Vec3,
    first: Vec3,
    dx: Vec3,
    dy: Vec3,
    pub columns: usize,
    pub rows: usize,
}

impl SampleGrid {
    /// Direction of the sample in `column`, `row`. Not unit length.
    #[inline]
    pub fn direction(&self, column: usize, row: usize) -> Vec3 {
        self.first + self.dy * row as f32 + self.dx * column as f32
    }

    /// Primary ray from the eye through the sample in `column`, `row`.
    #[inline]
    pub fn ray(&self, column: usize, row: usize) -> Ray {
        Ray::new(self.eye, self.direction(column, row))
    }
}
