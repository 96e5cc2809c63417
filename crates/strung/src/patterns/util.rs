//! Shared helpers for nail placement.

use crate::geometry::{Point, Size};
use crate::nails::NailsGroup;

/// Fraction of the short side left clear around the drawing area.
pub const MARGIN: f64 = 0.05;

/// The usable drawing area inside the canvas margin.
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame {
    pub center: Point,
    pub radius: f64,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl CanvasFrame {
    pub fn new(size: Size) -> Self {
        let margin = size.min_side() * MARGIN;
        Self {
            center: size.center(),
            radius: size.min_side() / 2.0 - margin,
            min_x: margin,
            min_y: margin,
            max_x: size.width - margin,
            max_y: size.height - margin,
        }
    }
}

/// Place `count` nails evenly around a circle, starting at `start_angle`.
pub fn circle_nails(
    group: &mut NailsGroup,
    center: Point,
    radius: f64,
    count: usize,
    start_angle: f64,
) {
    for i in 0..count {
        let angle = start_angle + std::f64::consts::TAU * i as f64 / count as f64;
        group.add(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
}

/// Place `count` nails evenly along a segment, including both endpoints.
pub fn segment_nails(group: &mut NailsGroup, from: Point, to: Point, count: usize) {
    if count == 1 {
        group.add(from);
        return;
    }
    for i in 0..count {
        let t = i as f64 / (count - 1) as f64;
        group.add(Point::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
        ));
    }
}

/// Place `count` nails along a segment, including `from` but not `to`.
///
/// Chaining edges of a closed shape through this never doubles a corner.
pub fn edge_nails(group: &mut NailsGroup, from: Point, to: Point, count: usize) {
    for i in 0..count {
        let t = i as f64 / count as f64;
        group.add(Point::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_nails_spacing() {
        let mut group = NailsGroup::new("ring");
        circle_nails(&mut group, Point::new(0.0, 0.0), 10.0, 4, 0.0);

        assert_eq!(group.len(), 4);
        let first = group.nails()[0].at;
        let third = group.nails()[2].at;
        assert!((first.x - 10.0).abs() < 1e-9);
        assert!((third.x + 10.0).abs() < 1e-9, "opposite nail mirrors across center");
    }

    #[test]
    fn segment_nails_includes_both_ends() {
        let mut group = NailsGroup::new("axis");
        segment_nails(&mut group, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 3);

        assert_eq!(group.len(), 3);
        assert_eq!(group.nails()[0].at, Point::new(0.0, 0.0));
        assert_eq!(group.nails()[1].at, Point::new(5.0, 0.0));
        assert_eq!(group.nails()[2].at, Point::new(10.0, 0.0));
    }

    #[test]
    fn edge_nails_excludes_far_end() {
        let mut group = NailsGroup::new("edge");
        edge_nails(&mut group, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2);

        assert_eq!(group.len(), 2);
        assert_eq!(group.nails()[0].at, Point::new(0.0, 0.0));
        assert_eq!(group.nails()[1].at, Point::new(5.0, 0.0));
    }

    #[test]
    fn frame_respects_margin() {
        let frame = CanvasFrame::new(Size::new(200.0, 100.0));
        assert_eq!(frame.min_x, 5.0);
        assert_eq!(frame.max_y, 95.0);
        assert_eq!(frame.radius, 45.0);
        assert_eq!(frame.center, Point::new(100.0, 50.0));
    }
}
