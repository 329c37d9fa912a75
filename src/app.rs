//! Canvas State and Event Dispatch
//!
//! This module contains the drawing logic. It's independent of the
//! windowing system: events come in as [`CanvasEvent`]s and drawing goes out
//! through a [`DrawSurface`].

use crate::color::Rgb;
use crate::config::CanvasConfig;
use crate::geometry::{Point, Rect};
use crate::input::{Button, CanvasEvent};
use crate::surface::{DrawSurface, Pen, Primitive};
use crate::theme::Theme;

/// Main canvas state
pub struct Canvas {
    theme: Theme,
    /// Foreground pen for freehand lines
    pen: Pen,
    /// Right-click stamp size and color
    stamp_width: u32,
    stamp_height: u32,
    stamp_color: Rgb,
    /// Whether a left-button drag is in progress
    left_button_down: bool,
    /// Last point of the current drag
    prev_point: Option<Point>,
}

impl Canvas {
    /// Create a canvas from validated configuration
    pub fn new(config: &CanvasConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let theme = config.theme()?;

        log::info!(
            "Canvas theme {:?}: background {}, foreground {}",
            config.theme,
            theme.background,
            theme.foreground
        );

        Ok(Self {
            theme,
            pen: Pen {
                color: theme.foreground,
                line_width: config.line_width,
            },
            stamp_width: config.stamp_width,
            stamp_height: config.stamp_height,
            stamp_color: config.stamp_color,
            left_button_down: false,
            prev_point: None,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Check if a freehand drag is in progress
    pub fn is_drawing(&self) -> bool {
        self.left_button_down
    }

    /// Handle one event, returns true when anything was drawn
    pub fn handle(&mut self, event: CanvasEvent, surface: &mut impl DrawSurface) -> bool {
        match event {
            CanvasEvent::Expose => {
                log::debug!("expose event");
                false
            }
            CanvasEvent::ButtonPress { button, position } => self.button_press(button, position, surface),
            CanvasEvent::ButtonRelease { button, position } => {
                self.button_release(button, position, surface)
            }
            CanvasEvent::Motion { position } => self.motion(position, surface),
        }
    }

    fn button_press(&mut self, button: Button, position: Point, surface: &mut impl DrawSurface) -> bool {
        match button {
            Button::Left => {
                self.left_button_down = true;
                self.prev_point = Some(position);
                false
            }
            Button::Right => {
                log::info!("right mouse button press at {:?}", position);
                let rect = Rect::new(position, self.stamp_width, self.stamp_height);
                surface.draw(Primitive::FillRect {
                    rect,
                    color: self.stamp_color,
                });
                surface.flush();
                true
            }
            Button::Other(other) => {
                log::debug!("Ignoring press of unhandled button {:?}", other);
                false
            }
        }
    }

    fn button_release(&mut self, button: Button, position: Point, surface: &mut impl DrawSurface) -> bool {
        match button {
            Button::Left => {
                self.left_button_down = false;
                match self.prev_point.take() {
                    Some(from) => {
                        self.line(from, position, surface);
                        true
                    }
                    None => {
                        log::debug!("Left release at {:?} without a drag", position);
                        false
                    }
                }
            }
            Button::Right => {
                log::info!("right mouse button release");
                false
            }
            Button::Other(other) => {
                log::debug!("Ignoring release of unhandled button {:?}", other);
                false
            }
        }
    }

    fn motion(&mut self, position: Point, surface: &mut impl DrawSurface) -> bool {
        if !self.left_button_down {
            return false;
        }

        let drew = match self.prev_point {
            Some(from) => {
                self.line(from, position, surface);
                true
            }
            None => false,
        };
        self.prev_point = Some(position);
        drew
    }

    fn line(&self, from: Point, to: Point, surface: &mut impl DrawSurface) {
        surface.draw(Primitive::Line {
            from,
            to,
            pen: self.pen,
        });
        surface.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeName;
    use winit::event::MouseButton;

    /// Surface that records what was drawn and when it was flushed
    #[derive(Default)]
    struct RecordingSurface {
        pending: Vec<Primitive>,
        flushed: Vec<Primitive>,
        flushes: usize,
    }

    impl DrawSurface for RecordingSurface {
        fn draw(&mut self, primitive: Primitive) {
            self.pending.push(primitive);
        }

        fn flush(&mut self) {
            self.flushed.append(&mut self.pending);
            self.flushes += 1;
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(&CanvasConfig::default()).unwrap()
    }

    fn press(button: Button, x: i32, y: i32) -> CanvasEvent {
        CanvasEvent::ButtonPress {
            button,
            position: Point::new(x, y),
        }
    }

    fn release(button: Button, x: i32, y: i32) -> CanvasEvent {
        CanvasEvent::ButtonRelease {
            button,
            position: Point::new(x, y),
        }
    }

    fn motion(x: i32, y: i32) -> CanvasEvent {
        CanvasEvent::Motion {
            position: Point::new(x, y),
        }
    }

    fn line(from: (i32, i32), to: (i32, i32)) -> Primitive {
        Primitive::Line {
            from: Point::new(from.0, from.1),
            to: Point::new(to.0, to.1),
            pen: Pen {
                color: Rgb(0xefefef),
                line_width: 8,
            },
        }
    }

    #[test]
    fn drag_draws_connected_segments() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        assert!(!canvas.handle(press(Button::Left, 10, 10), &mut surface));
        assert!(canvas.is_drawing());
        assert!(canvas.handle(motion(20, 15), &mut surface));
        assert!(canvas.handle(motion(30, 25), &mut surface));
        assert!(canvas.handle(release(Button::Left, 35, 30), &mut surface));
        assert!(!canvas.is_drawing());

        assert_eq!(
            surface.flushed,
            vec![
                line((10, 10), (20, 15)),
                line((20, 15), (30, 25)),
                line((30, 25), (35, 30)),
            ]
        );
        // one flush per draw call
        assert_eq!(surface.flushes, 3);
        assert!(surface.pending.is_empty());
    }

    #[test]
    fn click_without_motion_draws_a_dot() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        canvas.handle(press(Button::Left, 50, 60), &mut surface);
        canvas.handle(release(Button::Left, 50, 60), &mut surface);

        assert_eq!(surface.flushed, vec![line((50, 60), (50, 60))]);
    }

    #[test]
    fn motion_without_drag_is_ignored() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        assert!(!canvas.handle(motion(1, 1), &mut surface));
        assert!(!canvas.handle(motion(2, 2), &mut surface));
        assert!(surface.flushed.is_empty());
        assert_eq!(surface.flushes, 0);
    }

    #[test]
    fn stray_left_release_draws_nothing() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        assert!(!canvas.handle(release(Button::Left, 5, 5), &mut surface));
        assert!(surface.flushed.is_empty());

        // a finished drag does not leave a stale start point behind
        canvas.handle(press(Button::Left, 1, 1), &mut surface);
        canvas.handle(release(Button::Left, 2, 2), &mut surface);
        assert!(!canvas.handle(release(Button::Left, 3, 3), &mut surface));
        assert_eq!(surface.flushed, vec![line((1, 1), (2, 2))]);
    }

    #[test]
    fn right_press_stamps_rectangle_and_keeps_pen() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        assert!(canvas.handle(press(Button::Right, 40, 70), &mut surface));
        assert!(!canvas.handle(release(Button::Right, 40, 70), &mut surface));

        assert_eq!(
            surface.flushed,
            vec![Primitive::FillRect {
                rect: Rect {
                    x: 40,
                    y: 70,
                    width: 100,
                    height: 100
                },
                color: Rgb(0x0000ff),
            }]
        );
        assert_eq!(canvas.pen().color, Rgb(0xefefef));
    }

    #[test]
    fn stamp_during_drag_does_not_break_the_stroke() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        canvas.handle(press(Button::Left, 0, 0), &mut surface);
        canvas.handle(press(Button::Right, 10, 10), &mut surface);
        canvas.handle(motion(10, 10), &mut surface);

        assert_eq!(surface.flushed.len(), 2);
        assert_eq!(surface.flushed[1], line((0, 0), (10, 10)));
    }

    #[test]
    fn unhandled_buttons_are_ignored() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        let middle = Button::Other(MouseButton::Middle);
        assert!(!canvas.handle(press(middle, 3, 3), &mut surface));
        assert!(!canvas.handle(release(middle, 3, 3), &mut surface));
        assert!(!canvas.is_drawing());
        assert!(surface.flushed.is_empty());
    }

    #[test]
    fn expose_draws_nothing() {
        let mut canvas = canvas();
        let mut surface = RecordingSurface::default();

        assert!(!canvas.handle(CanvasEvent::Expose, &mut surface));
        assert_eq!(surface.flushes, 0);
    }

    #[test]
    fn light_theme_uses_black_pen() {
        let config = CanvasConfig {
            theme: ThemeName::Light,
            ..CanvasConfig::default()
        };
        let canvas = Canvas::new(&config).unwrap();
        assert_eq!(canvas.pen().color, Rgb(0x000000));
        assert_eq!(canvas.theme().background, Rgb(0xffffff));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CanvasConfig {
            theme: ThemeName::Orange,
            ..CanvasConfig::default()
        };
        assert!(Canvas::new(&config).is_err());

        let config = CanvasConfig {
            line_width: 0,
            ..CanvasConfig::default()
        };
        assert!(Canvas::new(&config).is_err());
    }
}
