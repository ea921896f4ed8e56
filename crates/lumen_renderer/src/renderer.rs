//! Image synthesis driver.
//!
//! A render runs in three phases separated by full barriers:
//!
//! 1. [`trace_samples`] shades every sample of a `2w x 2h` grid in parallel,
//!    one rayon task per sample row.
//! 2. [`max_intensity`] reduces all non-escaped samples to the brightest
//!    channel value in the image.
//! 3. [`resolve`] divides every sample by that maximum, composites the
//!    background under escaped samples, averages each 2x2 block and packs
//!    the result into RGBA8.
//!
//! One bright sample anywhere dims the whole image.

use std::time::{Duration, Instant};

use lumen_core::SceneDesc;
use lumen_math::{pack_rgba, rgba_bytes};
use rayon::prelude::*;
use thiserror::Error;

use crate::{find_nearest, is_escaped, shade, Camera, Color, Scene, SampleGrid, ESCAPED};

/// Samples averaged into one pixel (a 2x2 grid).
pub const SAMPLES_PER_PIXEL: usize = 4;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Mirror bounces after the first hit; 0 is direct light only
    pub max_depth: u32,
    /// Color behind escaped samples, composited after exposure
    pub background: Color,
    /// Ambient light, scaled by each surface's diffuse color
    pub ambient: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            background: Color::ZERO,
            ambient: Color::ONE,
        }
    }
}

impl RenderConfig {
    pub fn from_desc(desc: &SceneDesc) -> Self {
        Self {
            max_depth: desc.max_depth,
            background: desc.background,
            ambient: desc.ambient,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pixel buffer holds {actual} pixels, image needs {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    /// Primary rays traced
    pub samples: usize,
    /// Primary rays that hit nothing
    pub escaped: usize,
    /// Exposure divisor used for the image
    pub max_intensity: f32,
    pub elapsed: Duration,
}

/// Raw shaded samples of a `2w x 2h` grid, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    width: usize,
    height: usize,
    samples: Vec<Color>,
}

impl SampleBuffer {
    /// Create a buffer for a `width x height` pixel image, every sample escaped.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as usize;
        let height = height as usize;
        Self {
            width,
            height,
            samples: vec![ESCAPED; width * height * SAMPLES_PER_PIXEL],
        }
    }

    /// Build a buffer from per-pixel sample blocks in row-major pixel order.
    ///
    /// Each block is `[top left, top right, bottom left, bottom right]`.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[Color; 4]]) -> RenderResult<Self> {
        let mut buffer = Self::new(width, height);
        let expected = buffer.width * buffer.height;
        if pixels.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        let row_len = buffer.row_len();
        for (i, block) in pixels.iter().enumerate() {
            let (x, y) = (i % buffer.width, i / buffer.width);
            let top = 2 * y * row_len + 2 * x;
            buffer.samples[top] = block[0];
            buffer.samples[top + 1] = block[1];
            buffer.samples[top + row_len] = block[2];
            buffer.samples[top + row_len + 1] = block[3];
        }

        Ok(buffer)
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per grid row.
    pub fn row_len(&self) -> usize {
        self.width * 2
    }

    pub fn samples(&self) -> &[Color] {
        &self.samples
    }

    /// The 2x2 sample block of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [Color; 4] {
        let row_len = self.row_len();
        let top = 2 * y * row_len + 2 * x;
        [
            self.samples[top],
            self.samples[top + 1],
            self.samples[top + row_len],
            self.samples[top + row_len + 1],
        ]
    }

    /// Number of escaped samples.
    pub fn escaped(&self) -> usize {
        self.samples.par_iter().filter(|s| is_escaped(**s)).count()
    }
}

/// Shade a single grid sample.
#[inline]
fn trace_sample(grid: &SampleGrid, scene: &Scene, column: usize, row: usize) -> Color {
    let ray = grid.ray(column, row);
    let hit = find_nearest(&scene.primitives, &ray, None);
    shade(scene, &ray, hit)
}

/// Phase 1: shade every sample of the camera's grid.
pub fn trace_samples(camera: &Camera, scene: &Scene) -> SampleBuffer {
    let grid = camera.sample_grid();
    let mut buffer = SampleBuffer::new(camera.width, camera.height);

    let row_len = buffer.row_len();
    if row_len == 0 {
        return buffer;
    }

    buffer
        .samples
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, samples)| {
            for (column, sample) in samples.iter_mut().enumerate() {
                *sample = trace_sample(&grid, scene, column, row);
            }
        });

    buffer
}

/// Phase 2: largest channel of any non-escaped sample, or 0 if there is none.
pub fn max_intensity(samples: &SampleBuffer) -> f32 {
    samples
        .samples
        .par_iter()
        .filter(|s| !is_escaped(**s))
        .map(|s| s.max_element())
        .reduce(|| 0.0, f32::max)
}

#[inline]
fn exposed(sample: Color, max_intensity: f32, background: Color) -> Color {
    if is_escaped(sample) {
        background
    } else if max_intensity > 0.0 {
        sample / max_intensity
    } else {
        Color::ZERO
    }
}

/// Phase 3: normalize, composite, downsample and pack into `pixels`.
///
/// `pixels` must hold exactly `width * height` entries; every one is
/// overwritten.
pub fn resolve(
    samples: &SampleBuffer,
    max_intensity: f32,
    background: Color,
    pixels: &mut [u32],
) -> RenderResult<()> {
    let expected = samples.width * samples.height;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    if expected == 0 {
        return Ok(());
    }

    pixels
        .par_chunks_mut(samples.width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let sum = samples
                    .pixel(x, y)
                    .iter()
                    .fold(Color::ZERO, |acc, &s| acc + exposed(s, max_intensity, background));
                *pixel = pack_rgba(sum / SAMPLES_PER_PIXEL as f32);
            }
        });

    Ok(())
}

/// Render the scene into a caller-owned `width * height` pixel buffer.
///
/// The buffer size is checked before anything is traced.
pub fn render(camera: &Camera, scene: &Scene, pixels: &mut [u32]) -> RenderResult<RenderStats> {
    let expected = camera.width as usize * camera.height as usize;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let start = Instant::now();

    log::debug!(
        "Tracing {}x{} samples against {} primitives",
        camera.width * 2,
        camera.height * 2,
        scene.primitives.len()
    );
    let samples = trace_samples(camera, scene);

    let max = max_intensity(&samples);
    log::debug!("Max intensity: {max}");

    resolve(&samples, max, scene.config.background, pixels)?;

    let stats = RenderStats {
        width: camera.width,
        height: camera.height,
        samples: samples.samples.len(),
        escaped: samples.escaped(),
        max_intensity: max,
        elapsed: start.elapsed(),
    };

    log::info!(
        "Rendered {}x{} in {:.2?} ({} samples, {} escaped, max intensity {:.4})",
        stats.width,
        stats.height,
        stats.elapsed,
        stats.samples,
        stats.escaped,
        stats.max_intensity
    );

    Ok(stats)
}

/// Owned packed RGBA image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u32>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Raw RGBA8 bytes, row-major (for image encoders or texture upload).
    pub fn to_rgba_bytes(&self) -> &[u8] {
        rgba_bytes(&self.pixels)
    }
}

/// Render the scene into a freshly allocated image.
pub fn render_image(camera: &Camera, scene: &Scene) -> RenderResult<(ImageBuffer, RenderStats)> {
    let mut image = ImageBuffer::new(camera.width, camera.height);
    let stats = render(camera, scene, image.pixels_mut())?;
    Ok((image, stats))
}
