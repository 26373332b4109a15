//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures), create
//! them lazily on first use and recreate the pipeline when the surface format
//! changes.
//!
//! Convention:
//! - tiles are positioned on an integer grid
//! - the vertex shader converts grid cells to NDC using a grid uniform

mod ctx;
mod quad;
pub mod texture;
pub mod tiles;

pub use ctx::{RenderCtx, RenderTarget};
pub use texture::TileTexture;
pub use tiles::{TileGrid, TileInstance, TileRenderer};
