//! Glint renderer - recursive CPU ray tracing.
//!
//! Renders a scene of analytic primitives from a pinhole camera into an
//! RGB image buffer. Tracing follows mirror reflections to a fixed depth
//! and shades hits with a flat or Phong local term; the pixel loop is
//! tiled across the rayon thread pool. Renders are deterministic: the
//! same scene and camera always produce bit-identical images.
//!
//! ```ignore
//! use glint_renderer::{render, Camera, RenderConfig, Scene, Sphere, Surface, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.add_sphere(Sphere::new(
//!     Vec3::new(0.0, 0.0, -5.0),
//!     1.0,
//!     Surface::new(Vec3::new(1.0, 0.0, 0.0), 0.5),
//! ));
//!
//! let camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 60.0)?;
//! let image = render(&scene, &camera, 800, 600, &RenderConfig::default());
//! ```

mod camera;
mod renderer;
mod tile;

pub use camera::{Camera, CameraError, PITCH_LIMIT};
pub use renderer::{
    color_to_rgb8, render, render_pixel, trace, Color, ImageBuffer, RenderConfig, Shading,
};
pub use tile::{render_tile, tiles_for, Tile, DEFAULT_TILE_SIZE};

/// Re-export the scene types so embedders can build scenes through this crate
pub use glint_core::{Hit, Light, Plane, PrimitiveRef, Scene, Sphere, Surface};

/// Re-export the ray and vector types from glint_math
pub use glint_math::{Ray, Vec3};
