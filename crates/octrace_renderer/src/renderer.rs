//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounce budget
//! - Gamma correction
//! - Anti-aliasing via multi-sampling
//! - Rows rendered in parallel, each with its own RNG

use std::time::Instant;

use octrace_math::{Interval, Ray, Real};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::{Camera, Color, ImageView, Raster, Scene, DEFAULT_GAMMA};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum number of surface interactions per path
    pub max_bounces: u32,
    /// Samples per pixel for anti-aliasing. Zero is treated as one.
    pub samples_per_pixel: u32,
    pub gamma: Real,
    /// Base seed for reproducible renders; row `j` uses `seed + j`.
    /// `None` seeds every row from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_bounces: 10,
            samples_per_pixel: 10,
            gamma: DEFAULT_GAMMA,
            seed: None,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Follows the ray through the scene, scattering at each hit until it escapes
/// to the sky, is absorbed, or runs out of bounces.
pub fn ray_color(ray: &Ray, scene: &Scene, bounces: u32, rng: &mut dyn RngCore) -> Color {
    // Out of bounces: no more light is gathered
    if bounces == 0 {
        return Color::BLACK;
    }

    let Some(rec) = scene.hit(ray, Interval::new(0.001, Real::INFINITY)) else {
        return sky_color(ray);
    };

    match scene.material(rec.material).scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, scene, bounces - 1, rng),
        None => Color::BLACK,
    }
}

/// Vertical white-to-blue gradient seen by rays that escape the scene.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalized();
    let a = 0.5 * (unit_direction.y() + 1.0);
    Color::WHITE.lerp(Color::new(0.5, 0.7, 1.0), a)
}

/// Render a single pixel with multi-sampling, returning the linear average.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: usize,
    j: usize,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::BLACK;

    for _ in 0..samples {
        let ray = camera.random_ray_at(i, j, rng);
        pixel_color += ray_color(&ray, scene, config.max_bounces, rng);
    }

    pixel_color / samples as Real
}

/// Render `scene` into `buffer`.
///
/// Sets up the camera viewport for the buffer's size, then renders rows in
/// parallel. Only the pixels of each row are written; stride padding is
/// left untouched.
pub fn render(camera: &mut Camera, scene: &Scene, buffer: &mut ImageView<'_>, config: &RenderConfig) {
    let (width, height) = (buffer.width(), buffer.height());
    if width == 0 || height == 0 {
        return;
    }

    let start = Instant::now();
    log::info!(
        "Rendering {}x{}: {} spp, {} bounces",
        width,
        height,
        config.samples_per_pixel,
        config.max_bounces
    );

    camera.calculate_viewport_parameters(width, height);
    let camera = &*camera;

    buffer.par_rows_mut().enumerate().for_each(|(j, row)| {
        let mut rng = row_rng(config.seed, j);
        for (i, pixel) in row.iter_mut().enumerate() {
            let color = render_pixel(camera, scene, i, j, config, &mut rng);
            *pixel = color.linear_to_gamma(config.gamma).to_rgba8();
        }
    });

    log::info!("Rendered {}x{} in {:.2?}", width, height, start.elapsed());
}

fn row_rng(seed: Option<u64>, row: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(row as u64)),
        None => StdRng::from_entropy(),
    }
}
