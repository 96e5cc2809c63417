//! Core geometry types for strung.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Canvas dimensions in abstract units.
///
/// Patterns map nail positions into this box; a drawing backend decides what
/// one unit means on screen or paper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a line from two endpoints.
    #[inline]
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(from.x, from.y, to.x, to.y)
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Get the midpoint of the line.
    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square canvas shortcut.
    #[inline]
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Center point of the canvas.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn line_between_endpoints() {
        let line = Line::between(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(line.start(), Point::new(1.0, 2.0));
        assert_eq!(line.end(), Point::new(3.0, 4.0));
    }

    #[test]
    fn line_midpoint() {
        let line = Line::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(line.midpoint(), Point::new(5.0, 10.0));
    }

    #[test]
    fn size_center_and_min_side() {
        let size = Size::new(200.0, 100.0);
        assert_eq!(size.center(), Point::new(100.0, 50.0));
        assert_eq!(size.min_side(), 100.0);
    }
}
