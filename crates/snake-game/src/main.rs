mod game;
mod input;
mod settings;
mod snake;

use anyhow::{Context, Result};

use snake_engine::device::GpuInit;
use snake_engine::logging::{init_logging, LoggingConfig};
use snake_engine::render::TileTexture;
use snake_engine::window::Runtime;

use crate::game::SnakeGame;
use crate::settings::Settings;

fn main() {
    init_logging(LoggingConfig::default().with_fallback("info,wgpu_core=warn,wgpu_hal=warn"));

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::default();

    let texture_path = settings.resolve_texture_path()?;
    let texture = TileTexture::load(&texture_path)?;

    let game = SnakeGame::new(&settings, texture).context("invalid starting snake")?;

    Runtime::run(settings.runtime_config(), GpuInit::default(), game)
}
