//! Tiled partitioning of the pixel loop.
//!
//! The output image is split into fixed-size rectangular tiles. Each tile
//! renders into its own buffer with nothing shared but the read-only scene
//! and camera, then gets blitted back into the image, so the parallel pass
//! needs no synchronization.

use glint_core::Scene;

use crate::camera::Camera;
use crate::renderer::{render_pixel, Color, RenderConfig};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// A rectangular region of the output image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered by the tile.
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}

/// Split a `width` by `height` image into tiles at most `tile_size` on a
/// side. Edge tiles shrink to fit; together the tiles cover every pixel
/// exactly once.
pub fn tiles_for(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    debug_assert!(tile_size > 0, "tile size must be positive");

    let mut tiles = Vec::new();

    let mut y = 0;
    while y < height {
        let tile_height = tile_size.min(height - y);
        let mut x = 0;
        while x < width {
            let tile_width = tile_size.min(width - x);
            tiles.push(Tile::new(x, y, tile_width, tile_height));
            x += tile_width;
        }
        y += tile_height;
    }

    tiles
}

/// Render one tile of a `width` by `height` image.
///
/// Colors come back row-major with the tile's top row first, clamped to
/// [0, 1] per channel.
pub fn render_tile(
    scene: &Scene,
    camera: &Camera,
    tile: Tile,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut colors = Vec::with_capacity(tile.pixel_count());
    for y in tile.y..tile.y + tile.height {
        for x in tile.x..tile.x + tile.width {
            colors.push(render_pixel(scene, camera, x, y, width, height, config));
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Sphere, Surface};
    use glint_math::Vec3;

    #[test]
    fn test_tiles_cover_an_exact_multiple() {
        let tiles = tiles_for(128, 128, 64);
        assert_eq!(tiles.len(), 4);
        for tile in &tiles {
            assert_eq!(tile.width, 64);
            assert_eq!(tile.height, 64);
        }

        let total: usize = tiles.iter().map(Tile::pixel_count).sum();
        assert_eq!(total, 128 * 128);
    }

    #[test]
    fn test_edge_tiles_shrink_to_fit() {
        let tiles = tiles_for(100, 75, 64);
        assert_eq!(tiles.len(), 4);

        let total: usize = tiles.iter().map(Tile::pixel_count).sum();
        assert_eq!(total, 100 * 75);

        for tile in &tiles {
            assert!(tile.x + tile.width <= 100);
            assert!(tile.y + tile.height <= 75);
        }

        // The last tile is the shrunken bottom-right corner.
        assert_eq!(tiles[3], Tile::new(64, 64, 36, 11));
    }

    #[test]
    #[should_panic(expected = "tile size must be positive")]
    fn test_zero_tile_size_is_rejected() {
        tiles_for(100, 75, 0);
    }

    #[test]
    fn test_single_tile_when_tile_size_exceeds_image() {
        let tiles = tiles_for(32, 20, 64);
        assert_eq!(tiles, vec![Tile::new(0, 0, 32, 20)]);
    }

    #[test]
    fn test_render_tile_matches_per_pixel_rendering() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Surface::new(Vec3::new(1.0, 0.0, 0.0), 0.0),
        ));

        let camera =
            Camera::look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0).unwrap();
        let config = RenderConfig::default();

        let tile = Tile::new(1, 2, 3, 2);
        let colors = render_tile(&scene, &camera, tile, 8, 8, &config);
        assert_eq!(colors.len(), 6);

        let mut index = 0;
        for y in 2..4 {
            for x in 1..4 {
                assert_eq!(
                    colors[index],
                    render_pixel(&scene, &camera, x, y, 8, 8, &config)
                );
                index += 1;
            }
        }
    }
}
