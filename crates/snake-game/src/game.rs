use std::time::Instant;

use anyhow::Result;

use snake_engine::core::{App, AppControl, FrameCtx};
use snake_engine::paint::Color;
use snake_engine::render::{TileInstance, TileRenderer, TileTexture};
use snake_engine::time::TickTimer;

use crate::input::{self, Command};
use crate::settings::Settings;
use crate::snake::{Direction, Snake, SnakeError};

/// The snake demo: one snake, one heading, stepped on a fixed tick.
pub struct SnakeGame {
    snake: Snake,
    heading: Direction,
    timer: TickTimer,

    renderer: TileRenderer,
    clear: Color,

    /// One instance per segment, head first. Rebuilt every frame.
    instances: Vec<TileInstance>,
}

impl SnakeGame {
    pub fn new(settings: &Settings, texture: TileTexture) -> Result<Self, SnakeError> {
        Self::starting_at(settings, texture, Instant::now())
    }

    pub fn starting_at(
        settings: &Settings,
        texture: TileTexture,
        start: Instant,
    ) -> Result<Self, SnakeError> {
        let snake = Snake::new(settings.initial_body.clone(), settings.grid_bound)?;
        let mut game = Self {
            snake,
            heading: Direction::default(),
            timer: TickTimer::starting_at(settings.tick, start),
            renderer: TileRenderer::new(texture, settings.tile_grid()),
            clear: settings.clear_color(),
            instances: Vec::new(),
        };
        game.refresh_instances();
        Ok(game)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Applies one player command. Returns `Exit` only for [`Command::Quit`].
    pub fn apply(&mut self, command: Command) -> AppControl {
        match command {
            Command::Steer(direction) => {
                if direction != self.heading {
                    log::debug!("heading {:?} -> {:?}", self.heading, direction);
                }
                self.heading = direction;
            }

            Command::Grow => match self.snake.grow() {
                Ok(seg) => log::info!(
                    "snake grew to {} segments, new tail at ({}, {})",
                    self.snake.len(),
                    seg.x,
                    seg.y
                ),
                Err(e) => log::warn!("grow ignored: {e}"),
            },

            Command::ReportCursor { position: Some((x, y)) } => {
                log::info!("cursor position at ({x} : {y})")
            }
            Command::ReportCursor { position: None } => {
                log::info!("cursor position unknown; the cursor has not moved over the window")
            }

            Command::Quit => {
                log::info!("quit requested");
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }

    /// Advances the snake if a tick is due at `now`. Returns whether it moved.
    pub fn step(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.snake.advance(self.heading);

        let head = self.snake.head();
        log::trace!("tick {}: head at ({}, {})", self.timer.ticks(), head.x, head.y);
        true
    }

    fn refresh_instances(&mut self) {
        self.instances.clear();
        self.instances
            .extend(self.snake.segments().iter().map(|s| TileInstance::new(s.x, s.y)));
    }
}

impl App for SnakeGame {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        for command in input::commands(ctx.input_frame) {
            if self.apply(command) == AppControl::Exit {
                return Ok(AppControl::Exit);
            }
        }

        self.step(ctx.now);
        self.refresh_instances();

        let (renderer, instances) = (&mut self.renderer, &self.instances);
        ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, instances);
        })
    }

    fn on_exit(&mut self) {
        log::info!(
            "exiting after {} ticks with {} segments",
            self.timer.ticks(),
            self.snake.len()
        );
    }
}
