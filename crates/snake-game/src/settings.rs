//! Fixed game settings.
//!
//! Nothing here is user-configurable; the values are collected in one place so
//! the window, timer, grid and renderer agree on them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use snake_engine::paint::Color;
use snake_engine::render::TileGrid;
use snake_engine::window::RuntimeConfig;

use crate::snake::Segment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    /// Logical window size in pixels (square).
    pub window_size: f64,

    /// Time between simulation steps.
    pub tick: Duration,

    /// Grid coordinates wrap at `±grid_bound`.
    pub grid_bound: i32,

    /// NDC distance between neighbouring cells.
    pub cell_size: f32,
    /// NDC half-width of one drawn segment.
    pub tile_half_extent: f32,

    /// Background, sRGB.
    pub clear_srgb: [f32; 4],

    /// Starting body, head first.
    pub initial_body: Vec<Segment>,

    /// Texture location relative to the parent of the working directory.
    pub texture_dir: &'static str,
    pub texture_file: &'static str,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Snake".to_string(),
            window_size: 800.0,
            tick: Duration::from_millis(100),
            grid_bound: 25,
            cell_size: 0.04,
            tile_half_extent: 0.02,
            clear_srgb: [0.17, 0.23, 0.67, 1.0],
            initial_body: vec![Segment::new(0, 0), Segment::new(-1, 0), Segment::new(-2, 0)],
            texture_dir: "snake",
            texture_file: "git.png",
        }
    }
}

impl Settings {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.window_size, self.window_size),
            ..RuntimeConfig::default()
        }
    }

    pub fn tile_grid(&self) -> TileGrid {
        TileGrid {
            cell_size: self.cell_size,
            half_extent: self.tile_half_extent,
        }
    }

    pub fn clear_color(&self) -> Color {
        let [r, g, b, a] = self.clear_srgb;
        Color::from_srgb(r, g, b, a)
    }

    /// `{parent of cwd}/{texture_dir}/{texture_file}`.
    pub fn texture_path(&self, cwd: &Path) -> Result<PathBuf> {
        let parent = cwd
            .parent()
            .with_context(|| format!("working directory {} has no parent", cwd.display()))?;
        Ok(parent.join(self.texture_dir).join(self.texture_file))
    }

    /// Resolves the texture path against the process working directory.
    pub fn resolve_texture_path(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("failed to read working directory")?;
        self.texture_path(&cwd)
    }
}
