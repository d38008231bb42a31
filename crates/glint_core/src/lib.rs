//! Glint core - scene data model for the CPU ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Plane`, `Light`, `Surface`
//! - **Nearest-hit query**: `Scene::find_nearest`
//! - **Scene descriptions**: JSON loading via `io::load_scene`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! // Load a scene description
//! let scene = load_scene("scenes/two_spheres.json")?;
//! println!("Loaded {} primitives", scene.primitive_count());
//! ```

pub mod io;
pub mod scene;

// Re-export commonly used types
pub use io::{load_scene, scene_from_json, SceneError, SceneResult};
pub use scene::{Hit, Light, Plane, PrimitiveRef, Scene, Sphere, Surface};
