//! JSON scene descriptions.
//!
//! Scenes serialize through serde, so the on-disk layout mirrors the
//! [`Scene`] struct directly: top-level `spheres`, `planes`, and `lights`
//! arrays, with vectors written as `[x, y, z]`. Every array may be omitted.
//!
//! Loading re-normalizes plane normals so hand-edited files may use any
//! non-zero vector; a zero-length normal is rejected with an error naming
//! the offending plane.

use std::path::Path;

use thiserror::Error;

use crate::scene::Scene;

/// Errors from loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plane {index} has a zero-length normal")]
    DegenerateNormal { index: usize },
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Parse a scene from a JSON string.
pub fn scene_from_json(json: &str) -> SceneResult<Scene> {
    let mut scene: Scene = serde_json::from_str(json)?;

    for (index, plane) in scene.planes.iter_mut().enumerate() {
        if plane.normal.length_squared() == 0.0 {
            return Err(SceneError::DegenerateNormal { index });
        }
        plane.normal = plane.normal.normalize();
    }

    log::debug!(
        "Parsed scene: {} spheres, {} planes, {} lights",
        scene.spheres.len(),
        scene.planes.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Load a scene from a JSON file on disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let json = std::fs::read_to_string(path)?;
    scene_from_json(&json)
}
