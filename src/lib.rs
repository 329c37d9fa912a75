//! Draw Canvas Library
//!
//! A minimal desktop drawing canvas: freehand lines with the left mouse
//! button, a fixed-size rectangle stamp with the right one.
//!
//! The event handling in [`Canvas`] is separate from the windowing system and
//! draws through the [`DrawSurface`] trait; [`Renderer`] is the wgpu-backed
//! implementation and [`AppWrapper`] ties it to a winit window.

mod app;
mod color;
mod config;
mod geometry;
mod input;
mod renderer;
mod surface;
mod theme;
mod window;

pub use app::Canvas;
pub use color::{linear_to_srgb, srgb_to_linear, srgb_to_linear_rgba, Rgb};
pub use config::CanvasConfig;
pub use geometry::{Point, Rect};
pub use input::{Button, CanvasEvent, PointerTracker};
pub use renderer::Renderer;
pub use surface::{DrawSurface, Pen, Primitive};
pub use theme::{Theme, ThemeName};
pub use window::AppWrapper;
