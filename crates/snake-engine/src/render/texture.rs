use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// CPU-side RGBA8 image used as the tile texture.
///
/// Decoding happens up front (before any window exists) so a missing or
/// corrupt asset fails the program early; the GPU upload is deferred to the
/// renderer's first frame.
#[derive(Clone, PartialEq, Eq)]
pub struct TileTexture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl TileTexture {
    /// Decodes an image file into straight-alpha RGBA8.
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .to_rgba8();

        let (width, height) = img.dimensions();
        log::info!("loaded texture {} ({width}x{height})", path.display());

        Self::from_rgba8(width, height, img.into_raw())
    }

    /// Wraps raw RGBA8 pixels laid out row-major, top row first.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "texture has zero size ({width}x{height})");

        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            rgba.len() == expected,
            "texture data is {} bytes, expected {expected} for {width}x{height} RGBA8",
            rgba.len()
        );

        Ok(Self { width, height, rgba })
    }

    /// A 1x1 texture of a single straight-alpha RGBA8 color.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }

    pub(super) fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}

impl fmt::Debug for TileTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileTexture")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_accepts_matching_length() {
        let tex = TileTexture::from_rgba8(2, 3, vec![0; 2 * 3 * 4]).unwrap();
        assert_eq!((tex.width(), tex.height()), (2, 3));
        assert_eq!(tex.pixels().len(), 24);
    }

    #[test]
    fn from_rgba8_rejects_short_buffer() {
        let err = TileTexture::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16"));
    }

    #[test]
    fn from_rgba8_rejects_zero_size() {
        assert!(TileTexture::from_rgba8(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn solid_is_one_pixel() {
        let tex = TileTexture::solid([255, 0, 0, 255]);
        assert_eq!(tex.pixels(), &[255, 0, 0, 255]);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = Path::new("definitely/not/here/git.png");
        let err = TileTexture::load(path).unwrap_err();
        assert!(format!("{err:#}").contains("definitely/not/here/git.png"));
    }
}
