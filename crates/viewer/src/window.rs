// File: crates/viewer/src/window.rs
// Summary: Presents a chart in an OS window via RGBA blit (CPU) using winit + softbuffer; blocks until closed.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use chart_core::{Chart, ChartDisplay, RenderOptions};
use tracing::{debug, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// One window per `show` call; the call returns once the window is closed
/// (close button or Escape). Resizing re-renders at the new size.
#[derive(Debug, Default)]
pub struct WindowDisplay;

impl WindowDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl ChartDisplay for WindowDisplay {
    fn show(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()> {
        let mut event_loop = EventLoop::new();
        let title = if chart.title.is_empty() { "lvv-chart" } else { chart.title.as_str() };
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
            .build(&event_loop)
            .map_err(|e| anyhow!("failed to create window: {e}"))?;

        let context = unsafe { softbuffer::Context::new(&window) }
            .map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
            .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        let mut frame: Option<Frame> = None;
        let mut failure: Option<anyhow::Error> = None;

        info!("chart window open; close it or press Escape to exit");
        event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => {
                        *cf = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                        window.request_redraw();
                    }
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    let size = window.inner_size();
                    if let Err(e) = present(&mut surface, &mut frame, chart, opts, size.width, size.height) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match failure {
            Some(e) => Err(e),
            None => {
                debug!("chart window closed");
                Ok(())
            }
        }
    }
}

/// Last rendered frame in softbuffer's 0RGB layout, reused until the size changes.
struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

fn present(
    surface: &mut softbuffer::Surface,
    frame: &mut Option<Frame>,
    chart: &Chart,
    opts: &RenderOptions,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        // minimized
        return Ok(());
    };

    let stale = frame.as_ref().map_or(true, |f| f.width != width || f.height != height);
    if stale {
        let mut sized = opts.clone();
        sized.width = width as i32;
        sized.height = height as i32;
        let (rgba, rw, rh, _) = chart.render_to_rgba8(&sized)?;
        debug!(width = rw, height = rh, "rendered frame");
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
            .collect();
        *frame = Some(Frame { width: rw, height: rh, pixels });
    }

    let Some(current) = frame.as_ref() else { return Ok(()) };
    surface
        .resize(w, h)
        .map_err(|e| anyhow!("softbuffer resize: {e}"))?;
    let mut buffer = surface
        .buffer_mut()
        .map_err(|e| anyhow!("softbuffer buffer: {e}"))?;
    let n = buffer.len().min(current.pixels.len());
    buffer[..n].copy_from_slice(&current.pixels[..n]);
    buffer
        .present()
        .map_err(|e| anyhow!("softbuffer present: {e}"))?;
    Ok(())
}
