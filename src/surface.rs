//! Draw Surface Interface
//!
//! The canvas talks to the window system only through [`DrawSurface`].
//! Draw calls are immediate-mode: nothing is retained except the pixels
//! they produce.

use crate::color::Rgb;
use crate::geometry::{Point, Rect};

/// Stroke parameters for line primitives (round caps)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub color: Rgb,
    /// Line width in pixels
    pub line_width: u32,
}

/// A single draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Line segment from `from` to `to`
    Line { from: Point, to: Point, pen: Pen },
    /// Solid filled rectangle
    FillRect { rect: Rect, color: Rgb },
}

/// Something primitives can be drawn onto
pub trait DrawSurface {
    /// Queue a primitive
    fn draw(&mut self, primitive: Primitive);

    /// Make every queued primitive visible
    fn flush(&mut self);
}
