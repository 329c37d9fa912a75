//! Draw Canvas Application (Desktop)
//!
//! Opens a window, draws freehand lines with the left mouse button and
//! stamps rectangles with the right one.

use anyhow::Context;
use draw_canvas::{AppWrapper, CanvasConfig};
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("🚀 Starting draw canvas");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app_wrapper = AppWrapper::new(CanvasConfig::default());

    // Returns when the window closes or the display connection is lost
    event_loop.run_app(&mut app_wrapper).context("Event loop error")?;

    if let Some(err) = app_wrapper.take_error() {
        return Err(err);
    }

    log::info!("Exiting");
    Ok(())
}
