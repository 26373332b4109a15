use std::time::Instant;

use anyhow::Result;
use wgpu::SurfaceError;
use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputFrame;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:      &'a Window,
    pub gpu:         &'a mut Gpu<'w>,
    pub input_frame: &'a InputFrame,
    /// Timestamp taken when the redraw started.
    pub now:         Instant,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Recoverable surface errors skip the frame and return `Continue`; fatal
    /// ones are returned as `Err`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> Result<AppControl>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            // Minimized; nothing to present.
            return Ok(AppControl::Continue);
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(&err);
                return surface_error_outcome(action, err);
            }
        };

        // Clear pass, dropped before the draw callback borrows the encoder.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("snake clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view:           &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
        }

        let rctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(AppControl::Continue)
    }
}

fn surface_error_outcome(action: SurfaceErrorAction, err: SurfaceError) -> Result<AppControl> {
    match action {
        SurfaceErrorAction::Fatal => {
            Err(anyhow::Error::new(err).context("surface cannot present frames"))
        }
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
            Ok(AppControl::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_memory_becomes_an_error() {
        let err = SurfaceError::OutOfMemory;
        let action = SurfaceErrorAction::for_error(&err);

        let outcome = surface_error_outcome(action, err);

        let msg = format!("{:#}", outcome.unwrap_err());
        assert!(msg.contains("surface cannot present frames"), "{msg}");
    }

    #[test]
    fn recoverable_errors_continue() {
        for err in [SurfaceError::Lost, SurfaceError::Outdated, SurfaceError::Timeout] {
            let action = SurfaceErrorAction::for_error(&err);
            assert_eq!(surface_error_outcome(action, err).unwrap(), AppControl::Continue);
        }
    }
}
