//! Recursive ray tracing over an immutable scene snapshot.
//!
//! [`trace`] follows mirror reflections to a fixed depth, blending the local
//! shading term with the reflected color by the surface's reflectivity.
//! [`render`] drives the per-pixel loop, splitting the image into tiles and
//! tracing them on the rayon thread pool. Every pixel depends only on the
//! scene and camera passed in, so renders are deterministic.

use std::time::Instant;

use glint_core::{Scene, Surface};
use glint_math::{Ray, Vec3};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::tile::{render_tile, tiles_for, Tile, DEFAULT_TILE_SIZE};

/// RGB color with components conventionally in [0, 1]
pub type Color = Vec3;

/// Offset along the surface normal for spawned reflection rays, so a ray
/// cannot immediately re-hit the surface it just left.
const REFLECTION_BIAS: f32 = 1e-4;

/// Shading model applied at the nearest hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shading {
    /// Surface color as-is, with no lighting computation
    #[default]
    Flat,

    /// Ambient, diffuse, and specular terms from the scene's point lights
    Phong,
}

/// Configuration for a render pass.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Maximum reflection recursion depth
    pub max_depth: u32,

    /// Color for rays that leave the scene or exhaust the depth bound
    pub background: Color,

    /// Shading model for the local illumination term
    pub shading: Shading,

    /// Ambient intensity factor (Phong shading only)
    pub ambient: f32,

    /// Specular exponent (Phong shading only)
    pub shininess: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: Color::new(0.2, 0.2, 0.2),
            shading: Shading::Flat,
            ambient: 0.1,
            shininess: 16.0,
        }
    }
}

/// Mirror `v` about the unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Local illumination at a hit point.
///
/// `view_dir` is the unit direction of the incoming ray, pointing toward
/// the surface.
fn shade(
    scene: &Scene,
    surface: Surface,
    point: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    config: &RenderConfig,
) -> Color {
    match config.shading {
        Shading::Flat => surface.color,
        Shading::Phong => {
            let mut color = surface.color * config.ambient;
            let to_eye = -view_dir;

            for light in &scene.lights {
                let light_dir = (light.position - point).normalize();

                let diffuse = normal.dot(light_dir).max(0.0);
                color += surface.color * diffuse;

                let specular = to_eye
                    .dot(reflect(-light_dir, normal))
                    .max(0.0)
                    .powf(config.shininess);
                color += light.color * specular;
            }

            color.clamp(Vec3::ZERO, Vec3::ONE)
        }
    }
}

/// Trace a ray through the scene, following mirror reflections.
///
/// Primary rays start at `depth` 0 and each reflection bounce increments
/// it; past `config.max_depth` the path is cut off with the background
/// color. Rays that hit nothing also return the background.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let hit = match scene.find_nearest(ray) {
        Some(hit) => hit,
        None => return config.background,
    };

    let point = ray.at(hit.t);
    let normal = hit.primitive.normal_at(point);
    let surface = hit.primitive.surface();

    let local = shade(scene, surface, point, normal, ray.direction, config);

    if surface.reflectivity <= 0.0 {
        return local;
    }

    let reflected = Ray::new(
        point + normal * REFLECTION_BIAS,
        reflect(ray.direction, normal),
    );
    let bounced = trace(scene, &reflected, depth + 1, config);

    local * (1.0 - surface.reflectivity) + bounced * surface.reflectivity
}

/// Color of a single pixel, clamped to [0, 1] per channel.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.primary_ray(x, y, width, height);
    trace(scene, &ray, 0, config).clamp(Vec3::ZERO, Vec3::ONE)
}

/// A rendered image: row-major RGB colors, top row first.
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Allocate a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Pixel at `(x, y)`, with `(0, 0)` the top-left corner.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Pack into 8-bit RGB bytes, row-major from the top row.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Map a color to 8-bit RGB channels. Out-of-range values saturate.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        (color.x.clamp(0.0, 1.0) * 255.0) as u8,
        (color.y.clamp(0.0, 1.0) * 255.0) as u8,
        (color.z.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

/// Render the scene from `camera` into a `width` by `height` image.
///
/// The image is split into tiles traced in parallel; each tile is blitted
/// into the buffer afterwards, so workers never share output pixels.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    debug_assert!(width > 0 && height > 0, "image dimensions must be positive");

    let start = Instant::now();

    let tiles = tiles_for(width, height, DEFAULT_TILE_SIZE);
    let rendered: Vec<(Tile, Vec<Color>)> = tiles
        .par_iter()
        .map(|&tile| (tile, render_tile(scene, camera, tile, width, height, config)))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (tile, colors) in rendered {
        let mut index = 0;
        for y in tile.y..tile.y + tile.height {
            for x in tile.x..tile.x + tile.width {
                image.set(x, y, colors[index]);
                index += 1;
            }
        }
    }

    log::debug!(
        "Rendered {}x{} image across {} tiles in {:.2?}",
        width,
        height,
        tiles.len(),
        start.elapsed()
    );

    image
}
