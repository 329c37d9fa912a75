//! Window-space geometry (pixels from the top-left corner)

/// A pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floor a fractional position (as reported by the windowing system)
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }
}

/// An axis-aligned rectangle covering `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(origin: Point, width: u32, height: u32) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    /// Exclusive bottom-right corner
    pub fn max(&self) -> Point {
        Point {
            x: self.x.saturating_add(self.width as i32),
            y: self.y.saturating_add(self.height as i32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_fractional_positions() {
        assert_eq!(Point::from_f64(10.9, 3.2), Point::new(10, 3));
        assert_eq!(Point::from_f64(-0.5, 0.0), Point::new(-1, 0));
    }

    #[test]
    fn rect_max_corner() {
        let rect = Rect::new(Point::new(20, 30), 100, 100);
        assert_eq!(rect.max(), Point::new(120, 130));
    }
}
