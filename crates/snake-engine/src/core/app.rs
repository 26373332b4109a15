use anyhow::Result;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the game layer.
pub trait App {
    /// Called once per redraw of the window.
    ///
    /// Input received since the previous call is available through
    /// `ctx.input_frame`. An `Err` closes the window and is returned from
    /// `Runtime::run`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;

    /// Called once when the event loop is shutting down, before GPU resources
    /// are released.
    fn on_exit(&mut self) {}
}
